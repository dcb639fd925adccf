use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::{
    pack::pack_instruction_data,
    program::WRAPPER_ID,
    wrapper::WrapperInstruction,
};

/// Frees a market locked to the wrapper once the market's quote reserve reaches the graduation
/// threshold. The wrapper checks the threshold on chain and signs `free_market` with its swap
/// authority PDA. Anyone can send it.
///
/// ### Accounts
///   0. `[WRITE]` Market PDA
///   1. `[READ]` Swap authority badge PDA
///   2. `[READ]` Quote token mint
///   3. `[WRITE]` Market quote token associated token account
///   4. `[READ]` Wrapper swap authority PDA
///   5. `[SIGNER]` Signer
///   6. `[READ]` Token Mill program
///   7. `[READ]` Quote token program
///   8. `[READ]` Event authority PDA
///   9. `[READ]` Wrapper program
pub struct Graduate {
    pub market: Pubkey,
    pub swap_authority_badge: Pubkey,
    pub quote_token_mint: Pubkey,
    pub market_quote_token_ata: Pubkey,
    pub wrapper_swap_authority: Pubkey,
    pub signer: Pubkey,
    pub token_mill_program: Pubkey,
    pub quote_token_program: Pubkey,
    pub event_authority: Pubkey,
}

impl Graduate {
    pub fn create_account_metas(&self) -> [AccountMeta; 10] {
        [
            AccountMeta::new(self.market, false),
            AccountMeta::new_readonly(self.swap_authority_badge, false),
            AccountMeta::new_readonly(self.quote_token_mint, false),
            AccountMeta::new(self.market_quote_token_ata, false),
            AccountMeta::new_readonly(self.wrapper_swap_authority, false),
            AccountMeta::new_readonly(self.signer, true),
            AccountMeta::new_readonly(self.token_mill_program, false),
            AccountMeta::new_readonly(self.quote_token_program, false),
            AccountMeta::new_readonly(self.event_authority, false),
            AccountMeta::new_readonly(WRAPPER_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(&WrapperInstruction::Graduate.discriminator(), &())
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: WRAPPER_ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }
}
