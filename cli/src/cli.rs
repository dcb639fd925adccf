use clap::{
    Args,
    Parser,
    Subcommand,
};

#[derive(Parser, Debug)]
#[command(name = "token-mill", version, about = "Submit Token Mill transactions")]
pub struct Cli {
    /// JSON-RPC endpoint transactions are sent to.
    #[arg(long, env = "RPC_URL", global = true)]
    pub rpc_url: Option<String>,

    /// Path of the fee payer's keypair file (default: ~/.config/solana/id.json).
    #[arg(long, env = "ANCHOR_WALLET", global = true)]
    pub wallet: Option<String>,

    /// processed, confirmed or finalized.
    #[arg(long, env = "COMMITMENT", global = true, default_value = "confirmed")]
    pub commitment: String,

    /// Overrides the Token Mill program id, e.g. for a local deployment.
    #[arg(long, env = "TOKEN_MILL_PROGRAM_ID", global = true)]
    pub program_id: Option<String>,

    /// Seconds to wait for each transaction to reach the commitment.
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long, global = true)]
    pub compute_unit_limit: Option<u32>,

    /// Priority fee in micro-lamports per compute unit. Needs `--compute-unit-limit`.
    #[arg(long, global = true, requires = "compute_unit_limit")]
    pub compute_unit_price: Option<u64>,

    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Only print the resulting identifiers.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a market and its base token. Prints the market address.
    CreateMarket(MarketArgs),

    /// Lock a market so that only the swap authority can swap on it.
    LockMarket {
        #[arg(long, env = "MARKET")]
        market: Option<String>,
        /// Defaults to a fresh, throwaway address.
        #[arg(long)]
        swap_authority: Option<String>,
    },

    /// Set a market's bid and ask prices.
    SetPrices {
        #[arg(long, env = "MARKET")]
        market: Option<String>,
        #[command(flatten)]
        prices: PriceArgs,
    },

    /// Free a locked market. The wallet must be the market's swap authority.
    FreeMarket {
        #[arg(long, env = "MARKET")]
        market: Option<String>,
    },

    /// Create, lock and price a market, one confirmed transaction after another.
    Launch {
        #[command(flatten)]
        market: MarketArgs,
        /// Defaults to a fresh, throwaway address.
        #[arg(long)]
        swap_authority: Option<String>,
        #[command(flatten)]
        prices: PriceArgs,
    },

    /// Query the state of a previously submitted transaction.
    Status { signature: String },
}

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Token Mill config account.
    #[arg(long, env = "TOKEN_MILL_CONFIG")]
    pub config: Option<String>,

    /// Quote token mint. Only wSOL is currently supported.
    #[arg(long, env = "QUOTE_TOKEN")]
    pub quote_token: Option<String>,

    #[arg(long, default_value = "Test Market")]
    pub name: String,

    #[arg(long, default_value = "TM")]
    pub symbol: String,

    #[arg(long, default_value = "")]
    pub uri: String,

    /// Total supply in base atoms. The default is 1 billion tokens with 6 decimals.
    #[arg(long, default_value_t = 1_000_000_000_000_000)]
    pub total_supply: u64,

    /// Basis points. Must sum with the staking share to 8000.
    #[arg(long, default_value_t = 8_000)]
    pub creator_fee_share: u16,

    /// Basis points.
    #[arg(long, default_value_t = 0)]
    pub staking_fee_share: u16,
}

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// 11 comma-separated bid prices. Defaults to a dummy curve.
    #[arg(long, value_delimiter = ',')]
    pub bid_prices: Vec<u64>,

    /// 11 comma-separated ask prices. Defaults to a dummy curve.
    #[arg(long, value_delimiter = ',')]
    pub ask_prices: Vec<u64>,
}
