//! Submission error taxonomy.

use solana_sdk::signature::Signature;
use solana_transaction_error::TransactionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Every way a submission can fail. All variants reach the caller unmodified; the submitter never
/// retries and never downgrades one kind into another.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    /// Required configuration is missing or malformed. Raised before any network interaction.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The request can't be signed or sent as built, e.g. a required signer is missing.
    #[error("malformed request: {reason}")]
    Malformed { reason: String },
    /// The endpoint couldn't be reached or didn't answer in time. Safe to retry only if the
    /// transaction was never sent.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// The program or runtime declined the transaction. Resending the same request fails again.
    #[error("transaction rejected: {error}")]
    Rejected {
        /// `None` when the endpoint rejected the transaction during preflight.
        signature: Option<Signature>,
        /// The remote error payload, verbatim.
        error: TransactionError,
        /// Program logs, when the endpoint returned any.
        logs: Vec<String>,
    },
    /// The confirmation wait ended before a definitive result. The transaction may still land:
    /// query its status with `reconcile` before resubmitting.
    #[error("outcome unknown for {signature}: {reason}")]
    Ambiguous { signature: Signature, reason: String },
}

impl SubmitError {
    pub fn transport(message: impl ToString) -> Self {
        Self::Transport {
            message: message.to_string(),
        }
    }

    /// The transaction signature the error refers to, when one was produced.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Self::Rejected { signature, .. } => signature.as_ref(),
            Self::Ambiguous { signature, .. } => Some(signature),
            Self::Config(_) | Self::Malformed { .. } | Self::Transport { .. } => None,
        }
    }

    /// Non-zero process exit status for each failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected { .. } => 1,
            Self::Config(_) => 2,
            Self::Transport { .. } => 3,
            Self::Malformed { .. } => 4,
            Self::Ambiguous { .. } => 5,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}

#[cfg(test)]
mod tests {
    use solana_instruction_error::InstructionError;

    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_non_zero() {
        let errors = [
            SubmitError::Config(ConfigError::Missing { name: "rpc_url" }),
            SubmitError::Malformed {
                reason: String::new(),
            },
            SubmitError::transport("timeout"),
            SubmitError::Rejected {
                signature: None,
                error: TransactionError::InstructionError(0, InstructionError::Custom(1)),
                logs: vec![],
            },
            SubmitError::Ambiguous {
                signature: Signature::default(),
                reason: String::new(),
            },
        ];
        let mut codes: Vec<u8> = errors.iter().map(SubmitError::exit_code).collect();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn ambiguous_carries_its_signature() {
        let signature = Signature::new_unique();
        let err = SubmitError::Ambiguous {
            signature,
            reason: "cancelled".to_string(),
        };
        assert!(err.is_ambiguous());
        assert_eq!(err.signature(), Some(&signature));
    }
}
