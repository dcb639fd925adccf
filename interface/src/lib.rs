//! Instruction interface for the Token Mill program and the wrapper example program built on
//! top of it.
//!
//! Everything here is pure: program ids, PDA seeds, instruction discriminators, borsh argument
//! layouts and account-meta builders. Nothing in this crate talks to the network.

pub mod error;
pub mod instructions;
pub mod pack;
pub mod program;
pub mod seeds;
pub mod wrapper;

/// Number of price points on each side of a market's curve.
pub const PRICES_LENGTH: usize = 11;

/// 100% expressed in basis points.
pub const MAX_BPS: u16 = 10_000;

/// Required sum of the creator and staking fee shares, in basis points. The remaining 20% is the
/// protocol fee. The program enforces this; clients only document it.
pub const FEE_SHARE_TOTAL: u16 = 8_000;
