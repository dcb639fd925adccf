//! The endpoint capability the submitter talks to, and its JSON-RPC implementation.

use async_trait::async_trait;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcSendTransactionConfig,
    rpc_request::{
        RpcError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    hash::Hash,
    signature::Signature,
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;

use crate::{
    config::SubmitterConfig,
    error::SubmitError,
};

/// Preflight and rebroadcast options forwarded with a single send.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SendOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: CommitmentConfig,
    pub max_retries: Option<usize>,
}

impl From<&SubmitterConfig> for SendOptions {
    fn from(config: &SubmitterConfig) -> Self {
        Self {
            skip_preflight: config.skip_preflight,
            preflight_commitment: config.commitment_config(),
            max_retries: config.max_retries,
        }
    }
}

/// What the endpoint knows about a sent signature.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureStatus {
    pub slot: u64,
    /// The on-chain error, if the transaction landed and failed.
    pub err: Option<TransactionError>,
    /// Whether the transaction has reached the commitment the status was queried with.
    pub satisfies_commitment: bool,
}

/// The network operations a submission needs. Implementations must not retry on their own.
#[async_trait]
pub trait Endpoint: Send + Sync {
    /// A recent blockhash and the last block height at which it's still valid.
    async fn latest_blockhash(&self) -> Result<(Hash, u64), SubmitError>;

    async fn send_transaction(
        &self,
        transaction: &Transaction,
        options: &SendOptions,
    ) -> Result<Signature, SubmitError>;

    /// `Ok(None)` when the endpoint hasn't seen the signature. Signatures that landed outside the
    /// node's recent status cache must still be found.
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureStatus>, SubmitError>;

    async fn block_height(&self) -> Result<u64, SubmitError>;
}

/// An [`Endpoint`] backed by a Solana JSON-RPC node.
pub struct RpcEndpoint {
    rpc: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcEndpoint {
    pub fn new(config: &SubmitterConfig) -> Self {
        let commitment = config.commitment_config();
        Self {
            rpc: RpcClient::new_with_commitment(config.rpc_url.clone(), commitment),
            commitment,
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

#[async_trait]
impl Endpoint for RpcEndpoint {
    async fn latest_blockhash(&self) -> Result<(Hash, u64), SubmitError> {
        self.rpc
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(classify_client_error)
    }

    async fn send_transaction(
        &self,
        transaction: &Transaction,
        options: &SendOptions,
    ) -> Result<Signature, SubmitError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            preflight_commitment: Some(options.preflight_commitment.commitment),
            max_retries: options.max_retries,
            ..Default::default()
        };
        self.rpc
            .send_transaction_with_config(transaction, config)
            .await
            .map_err(classify_client_error)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureStatus>, SubmitError> {
        let statuses = self
            .rpc
            .get_signature_statuses_with_history(std::slice::from_ref(signature))
            .await
            .map_err(classify_client_error)?;

        Ok(statuses
            .value
            .into_iter()
            .next()
            .flatten()
            .map(|status| SignatureStatus {
                slot: status.slot,
                satisfies_commitment: status.satisfies_commitment(self.commitment),
                err: status.err.map(Into::into),
            }))
    }

    async fn block_height(&self) -> Result<u64, SubmitError> {
        self.rpc
            .get_block_height_with_commitment(self.commitment)
            .await
            .map_err(classify_client_error)
    }
}

/// Sorts an RPC client error into the submission taxonomy. A failed preflight simulation means
/// the program or runtime declined the transaction, so it carries the simulation's error and
/// logs. Anything that never got an answer from the cluster is a transport failure.
pub fn classify_client_error(error: ClientError) -> SubmitError {
    match error.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    logs,
                    ..
                }),
            ..
        }) => SubmitError::Rejected {
            signature: None,
            error: ui_err.clone().into(),
            logs: logs.clone().unwrap_or_default(),
        },
        ClientErrorKind::TransactionError(error) => SubmitError::Rejected {
            signature: None,
            error: error.clone(),
            logs: vec![],
        },
        ClientErrorKind::SigningError(error) => SubmitError::Malformed {
            reason: error.to_string(),
        },
        _ => SubmitError::transport(&error),
    }
}
