//! Turns command-line and environment input into validated configuration. Every failure here is a
//! [`ConfigError`], raised before any network interaction.

use std::{
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
};
use token_mill_client::config::{
    parse_pubkey,
    read_keypair_file,
    Commitment,
    ConfigError,
    SubmitterConfig,
};
use token_mill_interface::PRICES_LENGTH;

use crate::cli::Cli;

pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

pub fn wallet(path: Option<&str>) -> Result<Keypair, ConfigError> {
    read_keypair_file(expand_home(path.unwrap_or(DEFAULT_WALLET_PATH)))
}

pub fn required_pubkey(name: &'static str, value: Option<&str>) -> Result<Pubkey, ConfigError> {
    parse_pubkey(name, value.unwrap_or_default())
}

pub fn submitter_config(cli: &Cli) -> Result<SubmitterConfig, ConfigError> {
    let rpc_url = cli
        .rpc_url
        .as_deref()
        .ok_or(ConfigError::Missing { name: "RPC_URL" })?;
    let commitment = Commitment::from_str(&cli.commitment).map_err(|_| ConfigError::Invalid {
        name: "COMMITMENT",
        reason: format!(
            "`{}` isn't one of processed, confirmed or finalized",
            cli.commitment
        ),
    })?;

    let mut config = SubmitterConfig::new(rpc_url)?
        .with_commitment(commitment)
        .with_confirm_timeout(Duration::from_secs(cli.timeout_secs))
        .with_debug_logs(!cli.quiet);
    if let Some(unit_limit) = cli.compute_unit_limit {
        config = config.with_compute_budget(unit_limit, cli.compute_unit_price);
    }
    config.skip_preflight = cli.skip_preflight;
    Ok(config)
}

/// Uses `values` when given, otherwise a linear dummy curve with the given step.
pub fn prices(
    name: &'static str,
    values: &[u64],
    default_step: u64,
) -> Result<[u64; PRICES_LENGTH], ConfigError> {
    if values.is_empty() {
        return Ok(std::array::from_fn(|i| i as u64 * default_step));
    }
    values.try_into().map_err(|_| ConfigError::Invalid {
        name,
        reason: format!(
            "expected {PRICES_LENGTH} prices, got {}",
            values.len()
        ),
    })
}
