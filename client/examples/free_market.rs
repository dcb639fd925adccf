//! Frees a locked market. The wallet at `ANCHOR_WALLET` must be the market's swap authority.

use anyhow::Context;
use solana_sdk::signature::Signer;
use token_mill_client::{
    actions::{
        FreeMarketParams,
        TokenMillAction,
    },
    config::{
        parse_pubkey,
        read_keypair_file,
        SubmitterConfig,
    },
    print_kv,
    submitter::TxSubmitter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SubmitterConfig::new(std::env::var("RPC_URL").unwrap_or_default())?;
    let wallet = read_keypair_file(std::env::var("ANCHOR_WALLET").context("ANCHOR_WALLET")?)?;
    let market = parse_pubkey("MARKET", &std::env::var("MARKET").unwrap_or_default())?;

    let signature = TxSubmitter::new(config)
        .submit(
            &TokenMillAction::FreeMarket(FreeMarketParams {
                market,
                swap_authority: wallet.pubkey(),
            }),
            &[&wallet],
        )
        .await?;
    print_kv!("Market freed", signature);

    Ok(())
}
