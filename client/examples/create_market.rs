//! Creates a market, locks it to a fresh swap authority and sets dummy prices.
//!
//! Reads `RPC_URL`, `TOKEN_MILL_CONFIG`, `QUOTE_TOKEN` and `ANCHOR_WALLET` from the environment.

use anyhow::Context;
use solana_sdk::signature::{
    Keypair,
    Signer,
};
use token_mill_client::{
    actions::{
        ActionContext,
        CreateMarketParams,
        LockMarketParams,
        SetMarketPricesParams,
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
use token_mill_interface::instructions::CreateMarketArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SubmitterConfig::new(std::env::var("RPC_URL").unwrap_or_default())?;
    let wallet = read_keypair_file(std::env::var("ANCHOR_WALLET").context("ANCHOR_WALLET")?)?;
    let token_mill_config = parse_pubkey(
        "TOKEN_MILL_CONFIG",
        &std::env::var("TOKEN_MILL_CONFIG").unwrap_or_default(),
    )?;
    let quote_token_mint = parse_pubkey(
        "QUOTE_TOKEN",
        &std::env::var("QUOTE_TOKEN").unwrap_or_default(),
    )?;

    let submitter = TxSubmitter::new(config);
    let base_token = Keypair::new();
    let create = CreateMarketParams {
        config: token_mill_config,
        base_token_mint: base_token.pubkey(),
        quote_token_mint,
        creator: wallet.pubkey(),
        args: CreateMarketArgs {
            name: "Test Market".to_string(),
            symbol: "TM".to_string(),
            uri: String::new(),
            // 1 billion tokens with 6 decimals.
            total_supply: 1_000_000_000_000_000,
            creator_fee_share: 8_000,
            staking_fee_share: 0,
        },
    };
    let market = create.market(&ActionContext::default());

    submitter
        .submit(
            &TokenMillAction::CreateMarket(create),
            &[&wallet, &base_token],
        )
        .await?;
    print_kv!("Market created", market);

    let swap_authority = Keypair::new().pubkey();
    submitter
        .submit(
            &TokenMillAction::LockMarket(LockMarketParams {
                market,
                swap_authority,
                creator: wallet.pubkey(),
            }),
            &[&wallet],
        )
        .await?;
    print_kv!("Market locked", swap_authority);

    submitter
        .submit(
            &TokenMillAction::SetMarketPrices(SetMarketPricesParams {
                market,
                creator: wallet.pubkey(),
                bid_prices: std::array::from_fn(|i| i as u64 * 900_000),
                ask_prices: std::array::from_fn(|i| i as u64 * 1_000_000),
            }),
            &[&wallet],
        )
        .await?;
    print_kv!("Prices set", market);

    Ok(())
}
