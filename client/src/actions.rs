//! Tagged descriptors for every action the submitter can perform. Each descriptor resolves its
//! derived addresses locally and produces the instructions to sign, without touching the network.

use solana_instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use token_mill_interface::{
    instructions::{
        CreateMarket,
        CreateMarketArgs,
        FreeMarket,
        LockMarket,
        PermissionedSwap,
        SetMarketPrices,
        SetMarketPricesArgs,
        SwapArgs,
        TokenMillInstruction,
    },
    program::{
        SPL_ASSOCIATED_TOKEN_ACCOUNT_ID,
        SPL_TOKEN_2022_ID,
        SYSTEM_PROGRAM_ID,
        TOKEN_MILL_ID,
        WRAPPER_ID,
    },
    wrapper::{
        Graduate,
        InitializeWrapperAuthority,
        SimpleWrappedSwap,
        WrapperInstruction,
    },
    PRICES_LENGTH,
};

use crate::pda::{
    associated_token_address,
    find_event_authority_address,
    find_market_address,
    find_quote_token_badge_address,
    find_swap_authority_badge_address,
    find_wrapper_authority_address,
    find_wrapper_swap_authority_address,
    market_base_token_ata,
};

/// The Token Mill program actions are built against. Defaults to the deployed program id. Wrapper
/// actions always target the deployed wrapper, which CPIs into this program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionContext {
    pub program_id: Pubkey,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            program_id: TOKEN_MILL_ID,
        }
    }
}

impl ActionContext {
    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self { program_id }
    }
}

/// A built request: the instruction name for reporting and the instructions to sign, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRequest {
    pub name: &'static str,
    pub instructions: Vec<Instruction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateMarketParams {
    /// The Token Mill config holding the default market parameters.
    pub config: Pubkey,
    /// A fresh keypair's address. The keypair must be in the signer set.
    pub base_token_mint: Pubkey,
    pub quote_token_mint: Pubkey,
    pub creator: Pubkey,
    pub args: CreateMarketArgs,
}

impl CreateMarketParams {
    /// The market PDA the action creates.
    pub fn market(&self, ctx: &ActionContext) -> Pubkey {
        find_market_address(&ctx.program_id, &self.base_token_mint).0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LockMarketParams {
    pub market: Pubkey,
    pub swap_authority: Pubkey,
    pub creator: Pubkey,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetMarketPricesParams {
    pub market: Pubkey,
    pub creator: Pubkey,
    pub bid_prices: [u64; PRICES_LENGTH],
    pub ask_prices: [u64; PRICES_LENGTH],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FreeMarketParams {
    pub market: Pubkey,
    /// Must sign.
    pub swap_authority: Pubkey,
}

/// Accounts and amounts shared by every swap flavor. Token accounts are the canonical associated
/// token accounts of their owners.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapParams {
    pub config: Pubkey,
    pub market: Pubkey,
    pub base_token_mint: Pubkey,
    pub quote_token_mint: Pubkey,
    /// Owner program of the quote mint, usually the SPL token program for wSOL.
    pub quote_token_program: Pubkey,
    /// The protocol fee recipient stored in the config.
    pub protocol_fee_recipient: Pubkey,
    pub user: Pubkey,
    pub args: SwapArgs,
}

impl SwapParams {
    fn market_quote_token_ata(&self) -> Pubkey {
        associated_token_address(
            &self.market,
            &self.quote_token_mint,
            &self.quote_token_program,
        )
    }

    fn user_base_token_account(&self) -> Pubkey {
        associated_token_address(&self.user, &self.base_token_mint, &SPL_TOKEN_2022_ID)
    }

    fn user_quote_token_account(&self) -> Pubkey {
        associated_token_address(
            &self.user,
            &self.quote_token_mint,
            &self.quote_token_program,
        )
    }

    fn protocol_quote_token_ata(&self) -> Pubkey {
        associated_token_address(
            &self.protocol_fee_recipient,
            &self.quote_token_mint,
            &self.quote_token_program,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PermissionedSwapParams {
    pub swap: SwapParams,
    /// The authority the market is locked to. Must sign.
    pub swap_authority: Pubkey,
    pub referral_token_account: Option<Pubkey>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraduateParams {
    pub market: Pubkey,
    pub quote_token_mint: Pubkey,
    pub quote_token_program: Pubkey,
    pub signer: Pubkey,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenMillAction {
    CreateMarket(CreateMarketParams),
    LockMarket(LockMarketParams),
    SetMarketPrices(SetMarketPricesParams),
    FreeMarket(FreeMarketParams),
    PermissionedSwap(PermissionedSwapParams),
    InitializeWrapperAuthority { payer: Pubkey },
    SimpleWrappedSwap(SwapParams),
    Graduate(GraduateParams),
}

impl TokenMillAction {
    /// The on-chain instruction name, e.g. `create_market`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateMarket(_) => TokenMillInstruction::CreateMarket.into(),
            Self::LockMarket(_) => TokenMillInstruction::LockMarket.into(),
            Self::SetMarketPrices(_) => TokenMillInstruction::SetMarketPrices.into(),
            Self::FreeMarket(_) => TokenMillInstruction::FreeMarket.into(),
            Self::PermissionedSwap(_) => TokenMillInstruction::PermissionedSwap.into(),
            Self::InitializeWrapperAuthority { .. } => {
                WrapperInstruction::InitializeWrapperAuthority.into()
            }
            Self::SimpleWrappedSwap(_) => WrapperInstruction::SimpleWrappedSwap.into(),
            Self::Graduate(_) => WrapperInstruction::Graduate.into(),
        }
    }

    pub fn request(&self, ctx: &ActionContext) -> ActionRequest {
        ActionRequest {
            name: self.name(),
            instructions: vec![self.instruction(ctx)],
        }
    }

    fn instruction(&self, ctx: &ActionContext) -> Instruction {
        let program_id = &ctx.program_id;
        match self {
            Self::CreateMarket(params) => {
                let market = params.market(ctx);
                CreateMarket {
                    config: params.config,
                    market,
                    base_token_mint: params.base_token_mint,
                    market_base_token_ata: market_base_token_ata(
                        &market,
                        &params.base_token_mint,
                    ),
                    quote_token_badge: find_quote_token_badge_address(
                        program_id,
                        &params.config,
                        &params.quote_token_mint,
                    )
                    .0,
                    quote_token_mint: params.quote_token_mint,
                    creator: params.creator,
                    system_program: SYSTEM_PROGRAM_ID,
                    base_token_program: SPL_TOKEN_2022_ID,
                    associated_token_program: SPL_ASSOCIATED_TOKEN_ACCOUNT_ID,
                    event_authority: find_event_authority_address(program_id).0,
                    args: params.args.clone(),
                }
                .instruction_with_program_id(program_id)
            }
            Self::LockMarket(params) => LockMarket {
                market: params.market,
                swap_authority_badge: find_swap_authority_badge_address(
                    program_id,
                    &params.market,
                    &params.swap_authority,
                )
                .0,
                creator: params.creator,
                system_program: SYSTEM_PROGRAM_ID,
                swap_authority: params.swap_authority,
            }
            .instruction_with_program_id(program_id),
            Self::SetMarketPrices(params) => SetMarketPrices {
                market: params.market,
                creator: params.creator,
                args: SetMarketPricesArgs {
                    bid_prices: params.bid_prices,
                    ask_prices: params.ask_prices,
                },
            }
            .instruction_with_program_id(program_id),
            Self::FreeMarket(params) => FreeMarket {
                market: params.market,
                swap_authority_badge: find_swap_authority_badge_address(
                    program_id,
                    &params.market,
                    &params.swap_authority,
                )
                .0,
                swap_authority: params.swap_authority,
                event_authority: find_event_authority_address(program_id).0,
            }
            .instruction_with_program_id(program_id),
            Self::PermissionedSwap(params) => {
                let swap = &params.swap;
                PermissionedSwap {
                    config: swap.config,
                    market: swap.market,
                    swap_authority_badge: find_swap_authority_badge_address(
                        program_id,
                        &swap.market,
                        &params.swap_authority,
                    )
                    .0,
                    base_token_mint: swap.base_token_mint,
                    quote_token_mint: swap.quote_token_mint,
                    market_base_token_ata: market_base_token_ata(
                        &swap.market,
                        &swap.base_token_mint,
                    ),
                    market_quote_token_ata: swap.market_quote_token_ata(),
                    user_base_token_account: swap.user_base_token_account(),
                    user_quote_token_account: swap.user_quote_token_account(),
                    protocol_quote_token_ata: swap.protocol_quote_token_ata(),
                    referral_token_account: params.referral_token_account,
                    swap_authority: params.swap_authority,
                    user: swap.user,
                    base_token_program: SPL_TOKEN_2022_ID,
                    quote_token_program: swap.quote_token_program,
                    event_authority: find_event_authority_address(program_id).0,
                    args: swap.args.clone(),
                }
                .instruction_with_program_id(program_id)
            }
            Self::InitializeWrapperAuthority { payer } => InitializeWrapperAuthority {
                wrapper_authority: find_wrapper_authority_address(&WRAPPER_ID).0,
                payer: *payer,
                system_program: SYSTEM_PROGRAM_ID,
            }
            .instruction(),
            Self::SimpleWrappedSwap(swap) => {
                let wrapper_swap_authority =
                    find_wrapper_swap_authority_address(&WRAPPER_ID).0;
                SimpleWrappedSwap {
                    config: swap.config,
                    market: swap.market,
                    swap_authority_badge: find_swap_authority_badge_address(
                        program_id,
                        &swap.market,
                        &wrapper_swap_authority,
                    )
                    .0,
                    base_token_mint: swap.base_token_mint,
                    quote_token_mint: swap.quote_token_mint,
                    market_base_token_ata: market_base_token_ata(
                        &swap.market,
                        &swap.base_token_mint,
                    ),
                    market_quote_token_ata: swap.market_quote_token_ata(),
                    user_base_token_account: swap.user_base_token_account(),
                    user_quote_token_account: swap.user_quote_token_account(),
                    protocol_quote_token_ata: swap.protocol_quote_token_ata(),
                    wrapper_swap_authority,
                    user: swap.user,
                    token_mill_program: *program_id,
                    base_token_program: SPL_TOKEN_2022_ID,
                    quote_token_program: swap.quote_token_program,
                    event_authority: find_event_authority_address(&WRAPPER_ID).0,
                    args: swap.args.clone(),
                }
                .instruction()
            }
            Self::Graduate(params) => {
                let wrapper_swap_authority =
                    find_wrapper_swap_authority_address(&WRAPPER_ID).0;
                Graduate {
                    market: params.market,
                    swap_authority_badge: find_swap_authority_badge_address(
                        program_id,
                        &params.market,
                        &wrapper_swap_authority,
                    )
                    .0,
                    quote_token_mint: params.quote_token_mint,
                    market_quote_token_ata: associated_token_address(
                        &params.market,
                        &params.quote_token_mint,
                        &params.quote_token_program,
                    ),
                    wrapper_swap_authority,
                    signer: params.signer,
                    token_mill_program: *program_id,
                    quote_token_program: params.quote_token_program,
                    event_authority: find_event_authority_address(&WRAPPER_ID).0,
                }
                .instruction()
            }
        }
    }
}
