//! Builds, signs, sends and confirms Token Mill transactions.

use std::future::{
    pending,
    Future,
};

use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Signature,
        Signer,
    },
};
use solana_transaction_error::TransactionError;

use crate::{
    actions::{
        ActionContext,
        ActionRequest,
        TokenMillAction,
    },
    config::SubmitterConfig,
    endpoint::{
        Endpoint,
        RpcEndpoint,
        SendOptions,
        SignatureStatus,
    },
    error::SubmitError,
    fmt_kv,
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
    },
    pretty::PrettySubmitError,
    signing::SignerSet,
};

/// What the endpoint reports about a signature right now.
#[derive(Clone, Debug, PartialEq)]
pub enum SignatureState {
    /// Landed without error and reached the configured commitment.
    Confirmed,
    /// Landed and failed.
    Failed(TransactionError),
    /// Seen by the endpoint but below the configured commitment.
    Pending,
    /// Unknown to the endpoint. Either it was never received or its blockhash expired.
    NotFound,
}

impl From<Option<SignatureStatus>> for SignatureState {
    fn from(status: Option<SignatureStatus>) -> Self {
        match status {
            None => Self::NotFound,
            Some(SignatureStatus { err: Some(err), .. }) => Self::Failed(err),
            Some(status) if status.satisfies_commitment => Self::Confirmed,
            Some(_) => Self::Pending,
        }
    }
}

/// Submits one transaction per call and waits for its outcome.
///
/// The submitter never retries. Each submission fetches a fresh blockhash, so submitting the same
/// action twice produces two distinct transactions. After an ambiguous outcome, call
/// [`TxSubmitter::reconcile`] before deciding whether to submit again.
pub struct TxSubmitter<E: Endpoint = RpcEndpoint> {
    endpoint: E,
    config: SubmitterConfig,
    ctx: ActionContext,
}

impl TxSubmitter<RpcEndpoint> {
    pub fn new(config: SubmitterConfig) -> Self {
        Self::with_endpoint(RpcEndpoint::new(&config), config)
    }
}

impl<E: Endpoint> TxSubmitter<E> {
    pub fn with_endpoint(endpoint: E, config: SubmitterConfig) -> Self {
        Self {
            endpoint,
            config,
            ctx: ActionContext::default(),
        }
    }

    pub fn with_action_context(mut self, ctx: ActionContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    pub fn action_context(&self) -> &ActionContext {
        &self.ctx
    }

    /// Submits `action` and waits until it reaches the configured commitment.
    pub async fn submit(
        &self,
        action: &TokenMillAction,
        signers: &[&dyn Signer],
    ) -> Result<Signature, SubmitError> {
        self.submit_with_cancel(action, signers, pending()).await
    }

    /// Like [`Self::submit`], but stops waiting when `cancel` resolves. A cancelled wait is
    /// reported as [`SubmitError::Ambiguous`] since the transaction may still land.
    pub async fn submit_with_cancel(
        &self,
        action: &TokenMillAction,
        signers: &[&dyn Signer],
        cancel: impl Future<Output = ()>,
    ) -> Result<Signature, SubmitError> {
        self.submit_request(&action.request(&self.ctx), signers, cancel)
            .await
    }

    pub async fn submit_request(
        &self,
        request: &ActionRequest,
        signers: &[&dyn Signer],
        cancel: impl Future<Output = ()>,
    ) -> Result<Signature, SubmitError> {
        let instructions = self.with_compute_budget(&request.instructions);
        let result = self.send_and_confirm(&instructions, signers, cancel).await;

        if self.config.debug_logs {
            match &result {
                Ok(signature) => {
                    let sender = signers
                        .first()
                        .map(|payer| fmt_kv!("sender", payer.pubkey()))
                        .unwrap_or_default();
                    log_success(request.name, format!("{signature}\n{sender}"));
                }
                Err(error) => {
                    let pretty = PrettySubmitError {
                        error,
                        instructions: &instructions,
                        program_id: self.ctx.program_id,
                    };
                    if error.is_ambiguous() {
                        log_warning(request.name, pretty);
                    } else {
                        log_error(request.name, pretty);
                    }
                }
            }
        }
        result
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        signers: &[&dyn Signer],
        cancel: impl Future<Output = ()>,
    ) -> Result<Signature, SubmitError> {
        let signers = SignerSet::new(signers)?;
        let message = Message::new(instructions, Some(&signers.payer()));
        // Checked before the blockhash fetch so an unsignable request makes no network call.
        signers.ensure_covers(&message)?;

        let (blockhash, last_valid_block_height) = self.endpoint.latest_blockhash().await?;
        let transaction = signers.sign(message, blockhash)?;
        let signature = self
            .endpoint
            .send_transaction(&transaction, &SendOptions::from(&self.config))
            .await?;

        if self.config.debug_logs {
            log_info("Sent", signature);
        }
        self.wait(signature, Some(last_valid_block_height), cancel)
            .await
    }

    /// Waits for an already-submitted signature. Confirming a signature that's already confirmed
    /// returns immediately with the same signature.
    pub async fn confirm(&self, signature: Signature) -> Result<Signature, SubmitError> {
        self.confirm_with_cancel(signature, pending()).await
    }

    pub async fn confirm_with_cancel(
        &self,
        signature: Signature,
        cancel: impl Future<Output = ()>,
    ) -> Result<Signature, SubmitError> {
        self.wait(signature, None, cancel).await
    }

    /// Queries the endpoint once for the state of `signature`.
    pub async fn reconcile(&self, signature: &Signature) -> Result<SignatureState, SubmitError> {
        self.endpoint
            .signature_status(signature)
            .await
            .map(SignatureState::from)
    }

    fn with_compute_budget(&self, instructions: &[Instruction]) -> Vec<Instruction> {
        let budget = [
            self.config
                .compute_unit_limit
                .map(ComputeBudgetInstruction::set_compute_unit_limit),
            self.config
                .compute_unit_price
                .map(ComputeBudgetInstruction::set_compute_unit_price),
        ];
        budget
            .into_iter()
            .flatten()
            .chain(instructions.iter().cloned())
            .collect()
    }

    async fn wait(
        &self,
        signature: Signature,
        last_valid_block_height: Option<u64>,
        cancel: impl Future<Output = ()>,
    ) -> Result<Signature, SubmitError> {
        let timeout = self.config.confirm_timeout;
        let poll = tokio::time::timeout(
            timeout,
            self.poll_until_final(&signature, last_valid_block_height),
        );

        tokio::select! {
            biased;
            outcome = poll => match outcome {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Ambiguous {
                    signature,
                    reason: format!("not confirmed within {timeout:?}"),
                }),
            },
            _ = cancel => Err(SubmitError::Ambiguous {
                signature,
                reason: "cancelled while waiting for confirmation".to_string(),
            }),
        }
    }

    async fn poll_until_final(
        &self,
        signature: &Signature,
        last_valid_block_height: Option<u64>,
    ) -> Result<Signature, SubmitError> {
        // The transaction was sent, so a failed query leaves its outcome unknown.
        let ambiguous = |error: SubmitError| SubmitError::Ambiguous {
            signature: *signature,
            reason: error.to_string(),
        };

        loop {
            let expired = match last_valid_block_height {
                Some(last_valid) => {
                    self.endpoint.block_height().await.map_err(ambiguous)? > last_valid
                }
                None => false,
            };

            match self
                .endpoint
                .signature_status(signature)
                .await
                .map_err(ambiguous)?
            {
                Some(SignatureStatus { err: Some(error), .. }) => {
                    return Err(SubmitError::Rejected {
                        signature: Some(*signature),
                        error,
                        logs: vec![],
                    });
                }
                Some(status) if status.satisfies_commitment => return Ok(*signature),
                Some(_) => {}
                None if expired => {
                    return Err(SubmitError::Rejected {
                        signature: Some(*signature),
                        error: TransactionError::BlockhashNotFound,
                        logs: vec![],
                    });
                }
                None => {}
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
