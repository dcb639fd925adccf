//! Program ids used by Token Mill instructions.

use solana_pubkey::Pubkey;

/// The Token Mill program, deployed at the same address on mainnet and devnet.
pub const TOKEN_MILL_ID: Pubkey =
    Pubkey::from_str_const("JoeaRXgtME3jAoz5WuFXGEndfv4NPH9nBxsLq44hk9J");
/// The wrapper example program that swaps on locked markets through a PDA swap authority.
pub const WRAPPER_ID: Pubkey =
    Pubkey::from_str_const("GyXseHdafYkKMCQmS6dJN1KNWe3Zok9pSGm7wjiYK9ob");

/// The System program.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");
/// The SPL Token program.
pub const SPL_TOKEN_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
/// The SPL Token 2022 program. Base tokens created by Token Mill are Token 2022 mints.
pub const SPL_TOKEN_2022_ID: Pubkey =
    Pubkey::from_str_const("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
/// The SPL Associated Token Account program.
pub const SPL_ASSOCIATED_TOKEN_ACCOUNT_ID: Pubkey =
    Pubkey::from_str_const("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
/// Wrapped SOL, currently the only quote token Token Mill accepts.
pub const WSOL_MINT: Pubkey = Pubkey::from_str_const("So11111111111111111111111111111111111111112");

/// Known Token Mill config accounts. They store default market parameters and are created by
/// the program admins.
pub mod config {
    use solana_pubkey::Pubkey;

    pub const MAINNET: Pubkey =
        Pubkey::from_str_const("EVEVHBNUQ1gVG3LEMuJJov563CghdPdBB5nXNDHpHEA1");
    pub const DEVNET: Pubkey =
        Pubkey::from_str_const("8924mCgUTs7DE9UzNmN6bNFAdKmviqqe22Cx2C1abbPf");
}
