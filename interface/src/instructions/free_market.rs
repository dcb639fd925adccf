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

/// Frees a locked market so that anyone can swap on it again. Only the market's swap authority
/// can free it.
///
/// ### Accounts
///   0. `[WRITE]` Market PDA
///   1. `[WRITE]` Swap authority badge PDA (closed)
///   2. `[SIGNER]` Swap authority
///   3. `[READ]` Event authority PDA
///   4. `[READ]` Token Mill program
pub struct FreeMarket {
    pub market: Pubkey,
    pub swap_authority_badge: Pubkey,
    pub swap_authority: Pubkey,
    pub event_authority: Pubkey,
}

impl FreeMarket {
    pub fn create_account_metas(&self, program_id: &Pubkey) -> [AccountMeta; 5] {
        [
            AccountMeta::new(self.market, false),
            AccountMeta::new(self.swap_authority_badge, false),
            AccountMeta::new_readonly(self.swap_authority, true),
            AccountMeta::new_readonly(self.event_authority, false),
            AccountMeta::new_readonly(*program_id, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(&TokenMillInstruction::FreeMarket.discriminator(), &())
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
