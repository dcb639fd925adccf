use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::{
    instructions::SwapArgs,
    pack::pack_instruction_data,
    program::WRAPPER_ID,
    wrapper::WrapperInstruction,
};

/// Swaps on a market locked to the wrapper's swap authority PDA. The wrapper signs the
/// `permissioned_swap` CPI with that PDA, so only the user signs the outer transaction.
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
///  10. `[READ]` Wrapper swap authority PDA
///  11. `[SIGNER]` User
///  12. `[READ]` Token Mill program
///  13. `[READ]` Base token program
///  14. `[READ]` Quote token program
///  15. `[READ]` Event authority PDA
///  16. `[READ]` Wrapper program
pub struct SimpleWrappedSwap {
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
    pub wrapper_swap_authority: Pubkey,
    pub user: Pubkey,
    pub token_mill_program: Pubkey,
    pub base_token_program: Pubkey,
    pub quote_token_program: Pubkey,
    pub event_authority: Pubkey,
    pub args: SwapArgs,
}

impl SimpleWrappedSwap {
    pub fn create_account_metas(&self) -> [AccountMeta; 17] {
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
            AccountMeta::new_readonly(self.wrapper_swap_authority, false),
            AccountMeta::new_readonly(self.user, true),
            AccountMeta::new_readonly(self.token_mill_program, false),
            AccountMeta::new_readonly(self.base_token_program, false),
            AccountMeta::new_readonly(self.quote_token_program, false),
            AccountMeta::new_readonly(self.event_authority, false),
            AccountMeta::new_readonly(WRAPPER_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &WrapperInstruction::SimpleWrappedSwap.discriminator(),
            &self.args,
        )
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: WRAPPER_ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }
}
