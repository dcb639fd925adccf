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

/// Creates the wrapper authority PDA, storing its bump.
///
/// ### Accounts
///   0. `[WRITE]` Wrapper authority PDA
///   1. `[WRITE, SIGNER]` Payer
///   2. `[READ]` System program
pub struct InitializeWrapperAuthority {
    pub wrapper_authority: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl InitializeWrapperAuthority {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.wrapper_authority, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &WrapperInstruction::InitializeWrapperAuthority.discriminator(),
            &(),
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
