//! Explicit submitter configuration. Everything the submitter needs is passed in at construction;
//! nothing in this crate reads process environment variables.

use std::{
    path::{
        Path,
        PathBuf,
    },
    str::FromStr,
    time::Duration,
};

use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
};
use thiserror::Error;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Missing or malformed configuration. Always raised before any network interaction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("missing required configuration `{name}`")]
    Missing { name: &'static str },
    #[error("invalid `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("couldn't load keypair from {}: {reason}", path.display())]
    Keypair { path: PathBuf, reason: String },
}

/// The durability threshold a transaction must reach before it's reported as confirmed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitterConfig {
    /// The JSON-RPC endpoint transactions are sent to.
    pub rpc_url: String,
    pub commitment: Commitment,
    /// How long to wait for the commitment before giving up with an ambiguous outcome.
    pub confirm_timeout: Duration,
    /// Delay between signature status polls.
    pub poll_interval: Duration,
    pub skip_preflight: bool,
    /// Forwarded to the RPC node's rebroadcast setting. The submitter itself never resends.
    pub max_retries: Option<usize>,
    /// Prepends `set_compute_unit_limit` when set.
    pub compute_unit_limit: Option<u32>,
    /// Prepends `set_compute_unit_price` (micro-lamports per compute unit) when set.
    pub compute_unit_price: Option<u64>,
    pub debug_logs: bool,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: Commitment::default(),
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            skip_preflight: false,
            max_retries: None,
            compute_unit_limit: None,
            compute_unit_price: None,
            debug_logs: true,
        }
    }
}

impl SubmitterConfig {
    /// Creates a config for `rpc_url` with default settings.
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, ConfigError> {
        let rpc_url = rpc_url.into();
        validate_rpc_url(&rpc_url)?;
        Ok(Self {
            rpc_url,
            ..Default::default()
        })
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_confirm_timeout(mut self, confirm_timeout: Duration) -> Self {
        self.confirm_timeout = confirm_timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_compute_budget(mut self, unit_limit: u32, unit_price: Option<u64>) -> Self {
        self.compute_unit_limit = Some(unit_limit);
        self.compute_unit_price = unit_price;
        self
    }

    pub fn with_debug_logs(mut self, debug_logs: bool) -> Self {
        self.debug_logs = debug_logs;
        self
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        self.commitment.into()
    }
}

fn validate_rpc_url(rpc_url: &str) -> Result<(), ConfigError> {
    let rpc_url = rpc_url.trim();
    if rpc_url.is_empty() {
        return Err(ConfigError::Missing { name: "rpc_url" });
    }
    if !(rpc_url.starts_with("http://") || rpc_url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name: "rpc_url",
            reason: format!("`{rpc_url}` is not an http(s) URL"),
        });
    }
    Ok(())
}

/// Parses a base58 address, naming the offending input on failure.
pub fn parse_pubkey(name: &'static str, value: &str) -> Result<Pubkey, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing { name });
    }
    Pubkey::from_str(value).map_err(|e| ConfigError::Invalid {
        name,
        reason: format!("`{value}` is not a valid address ({e})"),
    })
}

/// Reads a keypair stored as a JSON array of 64 bytes, the format written by `solana-keygen`.
pub fn read_keypair_file(path: impl AsRef<Path>) -> Result<Keypair, ConfigError> {
    let path = path.as_ref();
    solana_keypair::read_keypair_file(path).map_err(|e| ConfigError::Keypair {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
