//! PDA seeds. Changing any of these changes every derived address, so they must match the
//! deployed programs byte for byte.

/// `[MARKET_SEED, base_mint]` under the Token Mill program.
pub const MARKET_SEED: &[u8] = b"market";
/// `[QUOTE_TOKEN_BADGE_SEED, config, quote_mint]` under the Token Mill program.
pub const QUOTE_TOKEN_BADGE_SEED: &[u8] = b"quote_token_badge";
/// `[SWAP_AUTHORITY_BADGE_SEED, market, swap_authority]` under the Token Mill program.
pub const SWAP_AUTHORITY_BADGE_SEED: &[u8] = b"swap_authority_badge";
/// Anchor's `#[event_cpi]` authority, `[EVENT_AUTHORITY_SEED]` under the emitting program.
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

/// `[WRAPPER_AUTHORITY_SEED]` under the wrapper program.
pub const WRAPPER_AUTHORITY_SEED: &[u8] = b"wrapper_authority";
/// `[WRAPPER_SWAP_AUTHORITY_SEED]` under the wrapper program. This PDA signs the CPIs into
/// Token Mill and acts as the locked markets' swap authority.
pub const WRAPPER_SWAP_AUTHORITY_SEED: &[u8] = b"wrapper_swap_authority";
