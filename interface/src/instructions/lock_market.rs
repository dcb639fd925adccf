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

#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct LockMarketArgs {
    /// The only account allowed to swap once the market is locked.
    pub swap_authority: [u8; 32],
}

/// Locks a market so that only `swap_authority` can swap on it. This is usually a PDA of a
/// program built on top of Token Mill.
///
/// The swap authority is unique and immutable, and can only be set right after market creation,
/// before any tokens have been bought.
///
/// ### Accounts
///   0. `[WRITE]` Market PDA
///   1. `[WRITE]` Swap authority badge PDA (created)
///   2. `[WRITE, SIGNER]` Creator
///   3. `[READ]` System program
pub struct LockMarket {
    pub market: Pubkey,
    pub swap_authority_badge: Pubkey,
    pub creator: Pubkey,
    pub system_program: Pubkey,
    pub swap_authority: Pubkey,
}

impl LockMarket {
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::new(self.market, false),
            AccountMeta::new(self.swap_authority_badge, false),
            AccountMeta::new(self.creator, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &TokenMillInstruction::LockMarket.discriminator(),
            &LockMarketArgs {
                swap_authority: self.swap_authority.to_bytes(),
            },
        )
    }

    pub fn instruction(&self) -> Instruction {
        self.instruction_with_program_id(&TOKEN_MILL_ID)
    }

    pub fn instruction_with_program_id(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }
}
