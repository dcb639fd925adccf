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

/// Arguments of `create_market`, in declaration order.
#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct CreateMarketArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Total base token supply in base atoms. The whole supply is minted to the market.
    pub total_supply: u64,
    /// Creator fee share in basis points.
    pub creator_fee_share: u16,
    /// Staking fee share in basis points. Must sum with the creator share to
    /// [`crate::FEE_SHARE_TOTAL`], which the program checks.
    pub staking_fee_share: u16,
}

/// Creates a market and its Token 2022 base mint. The whole supply is minted to the market's
/// base token associated token account.
///
/// The creator gets admin rights over the market: changing the fee repartition, claiming
/// creator fees, locking the market and setting its prices.
///
/// ### Accounts
///   0. `[READ]` Token Mill config
///   1. `[WRITE]` Market PDA
///   2. `[WRITE, SIGNER]` Base token mint (fresh keypair)
///   3. `[WRITE]` Market base token associated token account
///   4. `[READ]` Quote token badge PDA
///   5. `[READ]` Quote token mint
///   6. `[WRITE, SIGNER]` Creator
///   7. `[READ]` System program
///   8. `[READ]` Base token program (Token 2022)
///   9. `[READ]` Associated token program
///  10. `[READ]` Event authority PDA
///  11. `[READ]` Token Mill program
pub struct CreateMarket {
    pub config: Pubkey,
    pub market: Pubkey,
    pub base_token_mint: Pubkey,
    pub market_base_token_ata: Pubkey,
    pub quote_token_badge: Pubkey,
    pub quote_token_mint: Pubkey,
    pub creator: Pubkey,
    pub system_program: Pubkey,
    pub base_token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub event_authority: Pubkey,
    pub args: CreateMarketArgs,
}

impl CreateMarket {
    pub fn create_account_metas(&self, program_id: &Pubkey) -> [AccountMeta; 12] {
        [
            AccountMeta::new_readonly(self.config, false),
            AccountMeta::new(self.market, false),
            AccountMeta::new(self.base_token_mint, true),
            AccountMeta::new(self.market_base_token_ata, false),
            AccountMeta::new_readonly(self.quote_token_badge, false),
            AccountMeta::new_readonly(self.quote_token_mint, false),
            AccountMeta::new(self.creator, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.base_token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.event_authority, false),
            AccountMeta::new_readonly(*program_id, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_instruction_data(
            &TokenMillInstruction::CreateMarket.discriminator(),
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
