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
    PRICES_LENGTH,
};

/// The market's bid and ask curves. Both are fixed-size arrays, so they're encoded without a
/// length prefix.
#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct SetMarketPricesArgs {
    pub bid_prices: [u64; PRICES_LENGTH],
    pub ask_prices: [u64; PRICES_LENGTH],
}

/// Configures the curve used by the market. The market can't be traded until its prices are set.
///
/// ### Accounts
///   0. `[WRITE]` Market PDA
///   1. `[SIGNER]` Creator
pub struct SetMarketPrices {
    pub market: Pubkey,
    pub creator: Pubkey,
    pub args: SetMarketPricesArgs,
}

impl SetMarketPrices {
    pub fn create_account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::new(self.market, false),
            AccountMeta::new_readonly(self.creator, true),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &TokenMillInstruction::SetMarketPrices.discriminator(),
            &self.args,
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
