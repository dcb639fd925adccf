use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::{
    instructions::TokenMillInstruction,
    pack::pack_instruction_data,
    program::TOKEN_MILL_ID,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum SwapType {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum SwapAmountType {
    ExactInput,
    ExactOutput,
}

#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct SwapArgs {
    pub swap_type: SwapType,
    pub swap_amount_type: SwapAmountType,
    pub amount: u64,
    /// Minimum output for exact-input swaps, maximum input for exact-output swaps.
    pub other_amount_threshold: u64,
}

/// Swaps on a locked market. Both the market's swap authority and the user must sign.
///
/// ### Accounts
///   0. `[READ]` Token Mill config
///   1. `[WRITE]` Market PDA
///   2. `[READ]` Swap authority badge PDA
///   3. `[READ]` Base token mint
///   4. `[READ]` Quote token mint
///   5. `[WRITE]` Market base token associated token account
///   6. `[WRITE]` Market quote token associated token account
///   7. `[WRITE]` User base token account
///   8. `[WRITE]` User quote token account
///   9. `[WRITE]` Protocol quote token associated token account
///  10. `[WRITE]` Referral token account, or the Token Mill program id when absent
///  11. `[SIGNER]` Swap authority
///  12. `[SIGNER]` User
///  13. `[READ]` Base token program
///  14. `[READ]` Quote token program
///  15. `[READ]` Event authority PDA
///  16. `[READ]` Token Mill program
pub struct PermissionedSwap {
    pub config: Pubkey,
    pub market: Pubkey,
    pub swap_authority_badge: Pubkey,
    pub base_token_mint: Pubkey,
    pub quote_token_mint: Pubkey,
    pub market_base_token_ata: Pubkey,
    pub market_quote_token_ata: Pubkey,
    pub user_base_token_account: Pubkey,
    pub user_quote_token_account: Pubkey,
    pub protocol_quote_token_ata: Pubkey,
    pub referral_token_account: Option<Pubkey>,
    pub swap_authority: Pubkey,
    pub user: Pubkey,
    pub base_token_program: Pubkey,
    pub quote_token_program: Pubkey,
    pub event_authority: Pubkey,
    pub args: SwapArgs,
}

impl PermissionedSwap {
    pub fn create_account_metas(&self, program_id: &Pubkey) -> [AccountMeta; 17] {
        // Anchor encodes a missing optional account as the program id.
        let referral = match self.referral_token_account {
            Some(referral) => AccountMeta::new(referral, false),
            None => AccountMeta::new_readonly(*program_id, false),
        };

        [
            AccountMeta::new_readonly(self.config, false),
            AccountMeta::new(self.market, false),
            AccountMeta::new_readonly(self.swap_authority_badge, false),
            AccountMeta::new_readonly(self.base_token_mint, false),
            AccountMeta::new_readonly(self.quote_token_mint, false),
            AccountMeta::new(self.market_base_token_ata, false),
            AccountMeta::new(self.market_quote_token_ata, false),
            AccountMeta::new(self.user_base_token_account, false),
            AccountMeta::new(self.user_quote_token_account, false),
            AccountMeta::new(self.protocol_quote_token_ata, false),
            referral,
            AccountMeta::new_readonly(self.swap_authority, true),
            AccountMeta::new_readonly(self.user, true),
            AccountMeta::new_readonly(self.base_token_program, false),
            AccountMeta::new_readonly(self.quote_token_program, false),
            AccountMeta::new_readonly(self.event_authority, false),
            AccountMeta::new_readonly(*program_id, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &TokenMillInstruction::PermissionedSwap.discriminator(),
            &self.args,
        )
    }

    pub fn instruction(&self) -> Instruction {
        self.instruction_with_program_id(&TOKEN_MILL_ID)
    }

    pub fn instruction_with_program_id(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.create_account_metas(program_id).to_vec(),
            data: self.pack_instruction_data(),
        }
    }
}
