//! The signing boundary: an ordered set of signers whose first member pays the fees.

use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signature::Signer,
    transaction::Transaction,
};

use crate::error::SubmitError;

/// Borrowed signers authorizing one transaction. The first signer is the fee payer.
#[derive(Clone, Copy)]
pub struct SignerSet<'a> {
    signers: &'a [&'a dyn Signer],
}

impl<'a> SignerSet<'a> {
    pub fn new(signers: &'a [&'a dyn Signer]) -> Result<Self, SubmitError> {
        if signers.is_empty() {
            return Err(SubmitError::Malformed {
                reason: "at least one signer (the fee payer) is required".to_string(),
            });
        }
        Ok(Self { signers })
    }

    pub fn payer(&self) -> Pubkey {
        self.signers[0].pubkey()
    }

    pub fn pubkeys(&self) -> Vec<Pubkey> {
        self.signers.iter().map(|signer| signer.pubkey()).collect()
    }

    /// Checks that every signer the message requires is present. This runs before any network
    /// call so that an unsignable request never reaches the endpoint.
    pub fn ensure_covers(&self, message: &Message) -> Result<(), SubmitError> {
        let available = self.pubkeys();
        let missing: Vec<String> = message
            .signer_keys()
            .into_iter()
            .filter(|required| !available.contains(required))
            .map(ToString::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::Malformed {
                reason: format!("missing required signer(s): {}", missing.join(", ")),
            })
        }
    }

    /// Signs `message` with every signer in the set. Signers the message doesn't reference are
    /// ignored, as are repeats of a key that's already signing.
    pub fn sign(
        &self,
        message: Message,
        recent_blockhash: Hash,
    ) -> Result<Transaction, SubmitError> {
        self.ensure_covers(&message)?;

        let required = message.signer_keys();
        let mut signers: Vec<&dyn Signer> = Vec::with_capacity(required.len());
        for signer in self.signers.iter().copied() {
            let pubkey = signer.pubkey();
            if required.contains(&&pubkey) && !signers.iter().any(|s| s.pubkey() == pubkey) {
                signers.push(signer);
            }
        }

        let mut transaction = Transaction::new_unsigned(message);
        transaction
            .try_sign(signers.as_slice(), recent_blockhash)
            .map_err(|e| SubmitError::Malformed {
                reason: format!("signing failed: {e}"),
            })?;
        Ok(transaction)
    }
}
