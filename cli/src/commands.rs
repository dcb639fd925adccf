//! One function per subcommand. Each submits its actions strictly in order and stops at the first
//! failure.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use token_mill_client::{
    actions::{
        CreateMarketParams,
        FreeMarketParams,
        LockMarketParams,
        SetMarketPricesParams,
        TokenMillAction,
    },
    config::{
        parse_pubkey,
        ConfigError,
    },
    error::SubmitError,
    print_kv,
    submitter::{
        SignatureState,
        TxSubmitter,
    },
    LogColor,
};
use token_mill_interface::instructions::CreateMarketArgs;
use tokio::sync::watch;

use crate::{
    cli::{
        MarketArgs,
        PriceArgs,
    },
    load_env::{
        prices,
        required_pubkey,
    },
};

const BID_PRICE_STEP: u64 = 900_000;
const ASK_PRICE_STEP: u64 = 1_000_000;

/// Starts listening for Ctrl-C right away. The receiver flips to `true` on the first interrupt.
fn listen_for_interrupt() -> watch::Receiver<bool> {
    let (sender, receiver) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = sender.send(true);
        }
    });
    receiver
}

/// Resolves once `interrupt` flips. Never resolves if the listener couldn't be installed.
async fn interrupted(mut interrupt: watch::Receiver<bool>) {
    if interrupt.wait_for(|interrupted| *interrupted).await.is_err() {
        std::future::pending::<()>().await
    }
}

pub struct Runner {
    submitter: TxSubmitter,
    wallet: Keypair,
    interrupt: watch::Receiver<bool>,
}

impl Runner {
    /// Installs the Ctrl-C handler, so an interrupt during any later send ends in
    /// [`SubmitError::Ambiguous`]. Must be called inside the runtime.
    pub fn new(submitter: TxSubmitter, wallet: Keypair) -> Self {
        Self {
            submitter,
            wallet,
            interrupt: listen_for_interrupt(),
        }
    }

    async fn submit(
        &self,
        action: &TokenMillAction,
        extra_signers: &[&dyn Signer],
    ) -> Result<Signature, SubmitError> {
        let signers: Vec<&dyn Signer> = std::iter::once(&self.wallet as &dyn Signer)
            .chain(extra_signers.iter().copied())
            .collect();
        self.submitter
            .submit_with_cancel(action, &signers, interrupted(self.interrupt.clone()))
            .await
    }

    pub async fn create_market(&self, args: &MarketArgs) -> Result<Pubkey, SubmitError> {
        let config = required_pubkey("TOKEN_MILL_CONFIG", args.config.as_deref())?;
        let quote_token_mint = required_pubkey("QUOTE_TOKEN", args.quote_token.as_deref())?;

        let base_token = Keypair::new();
        let params = CreateMarketParams {
            config,
            base_token_mint: base_token.pubkey(),
            quote_token_mint,
            creator: self.wallet.pubkey(),
            args: CreateMarketArgs {
                name: args.name.clone(),
                symbol: args.symbol.clone(),
                uri: args.uri.clone(),
                total_supply: args.total_supply,
                creator_fee_share: args.creator_fee_share,
                staking_fee_share: args.staking_fee_share,
            },
        };
        let market = params.market(self.submitter.action_context());

        let signature = self
            .submit(&TokenMillAction::CreateMarket(params), &[&base_token])
            .await?;
        print_kv!("Market created", market, LogColor::Highlight);
        print_kv!("signature", signature);
        Ok(market)
    }

    pub async fn lock_market(
        &self,
        market: Pubkey,
        swap_authority: Option<&str>,
    ) -> Result<Pubkey, SubmitError> {
        let swap_authority = match swap_authority {
            Some(value) => parse_pubkey("swap_authority", value)?,
            None => Keypair::new().pubkey(),
        };

        let signature = self
            .submit(
                &TokenMillAction::LockMarket(LockMarketParams {
                    market,
                    swap_authority,
                    creator: self.wallet.pubkey(),
                }),
                &[],
            )
            .await?;
        print_kv!("Market locked", swap_authority, LogColor::Highlight);
        print_kv!("signature", signature);
        Ok(swap_authority)
    }

    pub async fn set_prices(&self, market: Pubkey, args: &PriceArgs) -> Result<(), SubmitError> {
        let bid_prices = prices("bid_prices", &args.bid_prices, BID_PRICE_STEP)?;
        let ask_prices = prices("ask_prices", &args.ask_prices, ASK_PRICE_STEP)?;

        let signature = self
            .submit(
                &TokenMillAction::SetMarketPrices(SetMarketPricesParams {
                    market,
                    creator: self.wallet.pubkey(),
                    bid_prices,
                    ask_prices,
                }),
                &[],
            )
            .await?;
        print_kv!("Prices set", market, LogColor::Highlight);
        print_kv!("signature", signature);
        Ok(())
    }

    pub async fn free_market(&self, market: Pubkey) -> Result<(), SubmitError> {
        let signature = self
            .submit(
                &TokenMillAction::FreeMarket(FreeMarketParams {
                    market,
                    swap_authority: self.wallet.pubkey(),
                }),
                &[],
            )
            .await?;
        print_kv!("Market freed", market, LogColor::Highlight);
        print_kv!("signature", signature);
        Ok(())
    }

    /// Create, lock, then price. Price arguments are validated before anything is sent so that a
    /// typo can't leave a half-launched market behind.
    pub async fn launch(
        &self,
        market_args: &MarketArgs,
        swap_authority: Option<&str>,
        price_args: &PriceArgs,
    ) -> Result<Pubkey, SubmitError> {
        prices("bid_prices", &price_args.bid_prices, BID_PRICE_STEP)?;
        prices("ask_prices", &price_args.ask_prices, ASK_PRICE_STEP)?;
        if let Some(value) = swap_authority {
            parse_pubkey("swap_authority", value)?;
        }

        let market = self.create_market(market_args).await?;
        self.lock_market(market, swap_authority).await?;
        self.set_prices(market, price_args).await?;
        Ok(market)
    }
}

pub async fn status(
    submitter: &TxSubmitter,
    signature: &str,
) -> Result<SignatureState, SubmitError> {
    let signature: Signature = signature.parse().map_err(|_| ConfigError::Invalid {
        name: "signature",
        reason: format!("`{signature}` is not a valid signature"),
    })?;
    let state = submitter.reconcile(&signature).await?;
    print_kv!(signature, format!("{state:?}"), LogColor::Highlight);
    Ok(state)
}
