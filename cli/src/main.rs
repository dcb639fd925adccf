//! `token-mill`: creates, locks, prices and frees Token Mill markets from the command line.
//!
//! Exits with 0 on success. Failures exit with 1 when the transaction was rejected, 2 on
//! configuration errors, 3 on transport errors, 4 on malformed requests and 5 when the outcome is
//! unknown.

use std::process::ExitCode;

use clap::Parser;
use token_mill_client::{
    actions::ActionContext,
    error::SubmitError,
    logs::log_error,
    submitter::TxSubmitter,
};

use crate::{
    cli::{
        Cli,
        Command,
    },
    commands::Runner,
};

pub mod cli;
pub mod commands;
pub mod load_env;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log_error("token-mill", &error);
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), SubmitError> {
    let config = load_env::submitter_config(&cli)?;
    let ctx = match cli.program_id.as_deref() {
        Some(program_id) => ActionContext::with_program_id(load_env::required_pubkey(
            "TOKEN_MILL_PROGRAM_ID",
            Some(program_id),
        )?),
        None => ActionContext::default(),
    };
    let submitter = TxSubmitter::new(config).with_action_context(ctx);
    let wallet = cli.wallet.as_deref();

    match cli.command {
        Command::Status { signature } => {
            commands::status(&submitter, &signature).await?;
        }
        Command::CreateMarket(market) => {
            let runner = Runner::new(submitter, load_env::wallet(wallet)?);
            runner.create_market(&market).await?;
        }
        Command::LockMarket {
            market,
            swap_authority,
        } => {
            let market = load_env::required_pubkey("MARKET", market.as_deref())?;
            let runner = Runner::new(submitter, load_env::wallet(wallet)?);
            runner
                .lock_market(market, swap_authority.as_deref())
                .await?;
        }
        Command::SetPrices { market, prices } => {
            let market = load_env::required_pubkey("MARKET", market.as_deref())?;
            let runner = Runner::new(submitter, load_env::wallet(wallet)?);
            runner.set_prices(market, &prices).await?;
        }
        Command::FreeMarket { market } => {
            let market = load_env::required_pubkey("MARKET", market.as_deref())?;
            let runner = Runner::new(submitter, load_env::wallet(wallet)?);
            runner.free_market(market).await?;
        }
        Command::Launch {
            market,
            swap_authority,
            prices,
        } => {
            let runner = Runner::new(submitter, load_env::wallet(wallet)?);
            runner
                .launch(&market, swap_authority.as_deref(), &prices)
                .await?;
        }
    }
    Ok(())
}
