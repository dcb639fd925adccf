//! PDA helpers for deriving Token Mill and wrapper program addresses.
//!
//! All of these are pure: the same inputs always produce the same address, and none of them
//! touch the network.

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account_interface::address::get_associated_token_address_with_program_id;
use token_mill_interface::{
    program::SPL_TOKEN_2022_ID,
    seeds::{
        EVENT_AUTHORITY_SEED,
        MARKET_SEED,
        QUOTE_TOKEN_BADGE_SEED,
        SWAP_AUTHORITY_BADGE_SEED,
        WRAPPER_AUTHORITY_SEED,
        WRAPPER_SWAP_AUTHORITY_SEED,
    },
};

/// The market account is derived from its base token mint.
pub fn find_market_address(program_id: &Pubkey, base_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MARKET_SEED, base_mint.as_ref()], program_id)
}

/// The badge marking `quote_mint` as a supported quote token under `config`.
pub fn find_quote_token_badge_address(
    program_id: &Pubkey,
    config: &Pubkey,
    quote_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[QUOTE_TOKEN_BADGE_SEED, config.as_ref(), quote_mint.as_ref()],
        program_id,
    )
}

/// The badge created when `market` is locked to `swap_authority`.
pub fn find_swap_authority_badge_address(
    program_id: &Pubkey,
    market: &Pubkey,
    swap_authority: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SWAP_AUTHORITY_BADGE_SEED,
            market.as_ref(),
            swap_authority.as_ref(),
        ],
        program_id,
    )
}

/// The `#[event_cpi]` authority of an Anchor program.
pub fn find_event_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], program_id)
}

pub fn find_wrapper_authority_address(wrapper_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WRAPPER_AUTHORITY_SEED], wrapper_program_id)
}

pub fn find_wrapper_swap_authority_address(wrapper_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WRAPPER_SWAP_AUTHORITY_SEED], wrapper_program_id)
}

/// The market's base token account. Base mints are Token 2022 mints and the market is a PDA, so
/// the associated token account is off-curve-owned.
pub fn market_base_token_ata(market: &Pubkey, base_mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(market, base_mint, &SPL_TOKEN_2022_ID)
}

/// The associated token account of `owner` for a mint owned by `token_program`.
pub fn associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}

#[cfg(test)]
mod tests {
    use token_mill_interface::program::{
        SPL_TOKEN_ID,
        TOKEN_MILL_ID,
        WRAPPER_ID,
    };

    use super::*;

    #[test]
    fn derivations_are_deterministic() {
        let base_mint = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let quote_mint = Pubkey::new_unique();
        let swap_authority = Pubkey::new_unique();

        for _ in 0..3 {
            assert_eq!(
                find_market_address(&TOKEN_MILL_ID, &base_mint),
                find_market_address(&TOKEN_MILL_ID, &base_mint)
            );
            assert_eq!(
                find_quote_token_badge_address(&TOKEN_MILL_ID, &config, &quote_mint),
                find_quote_token_badge_address(&TOKEN_MILL_ID, &config, &quote_mint)
            );
        }

        let (market, _) = find_market_address(&TOKEN_MILL_ID, &base_mint);
        assert_eq!(
            find_swap_authority_badge_address(&TOKEN_MILL_ID, &market, &swap_authority),
            find_swap_authority_badge_address(&TOKEN_MILL_ID, &market, &swap_authority)
        );
        assert_eq!(
            market_base_token_ata(&market, &base_mint),
            market_base_token_ata(&market, &base_mint)
        );
    }

    #[test]
    fn derivations_depend_on_every_input() {
        let base_mint = Pubkey::new_unique();
        let (market, _) = find_market_address(&TOKEN_MILL_ID, &base_mint);

        assert_ne!(market, find_market_address(&TOKEN_MILL_ID, &Pubkey::new_unique()).0);
        assert_ne!(market, find_market_address(&WRAPPER_ID, &base_mint).0);
        assert_ne!(
            find_swap_authority_badge_address(&TOKEN_MILL_ID, &market, &Pubkey::new_unique()),
            find_swap_authority_badge_address(&TOKEN_MILL_ID, &market, &Pubkey::new_unique())
        );
        assert_ne!(
            find_event_authority_address(&TOKEN_MILL_ID),
            find_event_authority_address(&WRAPPER_ID)
        );
        assert_ne!(
            find_wrapper_authority_address(&WRAPPER_ID),
            find_wrapper_swap_authority_address(&WRAPPER_ID)
        );
        assert_ne!(
            market_base_token_ata(&market, &base_mint),
            associated_token_address(&market, &base_mint, &SPL_TOKEN_ID)
        );
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (market, _) = find_market_address(&TOKEN_MILL_ID, &Pubkey::new_unique());
        assert!(!market.is_on_curve());
    }
}
