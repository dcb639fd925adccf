//! An in-memory cluster running a fake Token Mill program, used as the submitter's endpoint in
//! integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;
use token_mill_client::{
    config::SubmitterConfig,
    endpoint::{
        Endpoint,
        SendOptions,
        SignatureStatus,
    },
    error::SubmitError,
    pda::find_swap_authority_badge_address,
    submitter::TxSubmitter,
};
use token_mill_interface::{
    instructions::{
        CreateMarketArgs,
        LockMarketArgs,
        SetMarketPricesArgs,
        TokenMillInstruction,
    },
    pack::{
        split_discriminator,
        unpack_args,
    },
    program::TOKEN_MILL_ID,
    FEE_SHARE_TOTAL,
};

pub const INVALID_FEE_SHARES: u32 = 6000;
pub const MARKET_ALREADY_EXISTS: u32 = 6001;
pub const UNAUTHORIZED: u32 = 6002;
pub const MARKET_ALREADY_LOCKED: u32 = 6003;
pub const MARKET_NOT_LOCKED: u32 = 6004;
pub const INVALID_SWAP_AUTHORITY: u32 = 6005;
pub const UNKNOWN_MARKET: u32 = 6006;
pub const INVALID_INSTRUCTION_DATA: u32 = 6007;

/// Blocks a blockhash stays valid for, as on a real cluster.
pub const BLOCKHASH_LIFETIME: u64 = 150;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeMarket {
    pub creator: Pubkey,
    pub swap_authority: Option<Pubkey>,
    pub bid_prices: Option<Vec<u64>>,
    pub swapped: bool,
}

/// How a transaction accepted by `send_transaction` behaves afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delivery {
    /// Executes and reaches the commitment after `confirm_after` status queries.
    Land { confirm_after: u32 },
    /// Accepted by the endpoint but never lands.
    Drop,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Calls {
    pub latest_blockhash: u32,
    pub send_transaction: u32,
    pub signature_status: u32,
    pub block_height: u32,
}

impl Calls {
    pub fn total(&self) -> u32 {
        self.latest_blockhash + self.send_transaction + self.signature_status + self.block_height
    }
}

struct Landed {
    slot: u64,
    err: Option<TransactionError>,
    queries_left: u32,
}

struct ClusterState {
    block_height: u64,
    blockhash_lifetime: u64,
    delivery: Delivery,
    send_failure: Option<String>,
    markets: HashMap<Pubkey, FakeMarket>,
    statuses: HashMap<Signature, Landed>,
    calls: Calls,
}

pub struct FakeCluster {
    state: Mutex<ClusterState>,
}

impl Default for FakeCluster {
    fn default() -> Self {
        Self {
            state: Mutex::new(ClusterState {
                block_height: 1,
                blockhash_lifetime: BLOCKHASH_LIFETIME,
                delivery: Delivery::Land { confirm_after: 0 },
                send_failure: None,
                markets: HashMap::new(),
                statuses: HashMap::new(),
                calls: Calls::default(),
            }),
        }
    }
}

impl FakeCluster {
    pub fn with_delivery(self, delivery: Delivery) -> Self {
        self.state.lock().unwrap().delivery = delivery;
        self
    }

    pub fn with_blockhash_lifetime(self, blocks: u64) -> Self {
        self.state.lock().unwrap().blockhash_lifetime = blocks;
        self
    }

    /// Every send fails as if the endpoint were unreachable.
    pub fn with_send_failure(self, message: &str) -> Self {
        self.state.lock().unwrap().send_failure = Some(message.to_string());
        self
    }

    pub fn set_delivery(&self, delivery: Delivery) {
        self.state.lock().unwrap().delivery = delivery;
    }

    pub fn calls(&self) -> Calls {
        self.state.lock().unwrap().calls
    }

    pub fn market(&self, market: &Pubkey) -> Option<FakeMarket> {
        self.state.lock().unwrap().markets.get(market).cloned()
    }
}

#[async_trait]
impl Endpoint for FakeCluster {
    async fn latest_blockhash(&self) -> Result<(Hash, u64), SubmitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.latest_blockhash += 1;
        Ok((Hash::new_unique(), state.block_height + state.blockhash_lifetime))
    }

    async fn send_transaction(
        &self,
        transaction: &Transaction,
        options: &SendOptions,
    ) -> Result<Signature, SubmitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.send_transaction += 1;
        if let Some(message) = &state.send_failure {
            return Err(SubmitError::transport(message));
        }

        let signature = transaction.signatures[0];
        if transaction.verify().is_err() {
            return Err(SubmitError::Rejected {
                signature: None,
                error: TransactionError::SignatureFailure,
                logs: vec![],
            });
        }

        let Delivery::Land { confirm_after } = state.delivery else {
            return Ok(signature);
        };

        let slot = state.block_height;
        match execute(&state.markets, transaction) {
            Ok(markets) => {
                state.markets = markets;
                state.statuses.insert(
                    signature,
                    Landed {
                        slot,
                        err: None,
                        queries_left: confirm_after,
                    },
                );
            }
            Err((error, logs)) if !options.skip_preflight => {
                return Err(SubmitError::Rejected {
                    signature: None,
                    error,
                    logs,
                });
            }
            Err((error, _)) => {
                state.statuses.insert(
                    signature,
                    Landed {
                        slot,
                        err: Some(error),
                        queries_left: confirm_after,
                    },
                );
            }
        }
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureStatus>, SubmitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.signature_status += 1;
        Ok(state.statuses.get_mut(signature).map(|landed| {
            let satisfies_commitment = landed.queries_left == 0;
            landed.queries_left = landed.queries_left.saturating_sub(1);
            SignatureStatus {
                slot: landed.slot,
                err: landed.err.clone(),
                satisfies_commitment,
            }
        }))
    }

    async fn block_height(&self) -> Result<u64, SubmitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.block_height += 1;
        state.block_height += 1;
        Ok(state.block_height)
    }
}

type Execution = Result<HashMap<Pubkey, FakeMarket>, (TransactionError, Vec<String>)>;

/// Runs every Token Mill instruction of `transaction` against a copy of `markets`. Other programs'
/// instructions are no-ops. Either every instruction succeeds or nothing changes.
fn execute(markets: &HashMap<Pubkey, FakeMarket>, transaction: &Transaction) -> Execution {
    let message = &transaction.message;
    let mut markets = markets.clone();

    for (index, instruction) in message.instructions.iter().enumerate() {
        let program_id = message.account_keys[instruction.program_id_index as usize];
        if program_id != TOKEN_MILL_ID {
            continue;
        }
        let accounts: Vec<Pubkey> = instruction
            .accounts
            .iter()
            .map(|i| message.account_keys[*i as usize])
            .collect();

        process(&mut markets, &accounts, &instruction.data).map_err(|code| {
            (
                TransactionError::InstructionError(index as u8, InstructionError::Custom(code)),
                vec![
                    format!("Program {TOKEN_MILL_ID} invoke [1]"),
                    format!("Program log: AnchorError occurred. Error Code: {code}."),
                    format!("Program {TOKEN_MILL_ID} failed: custom program error: {code:#x}"),
                ],
            )
        })?;
    }
    Ok(markets)
}

fn process(
    markets: &mut HashMap<Pubkey, FakeMarket>,
    accounts: &[Pubkey],
    data: &[u8],
) -> Result<(), u32> {
    let tag = TokenMillInstruction::try_from(data).map_err(|_| INVALID_INSTRUCTION_DATA)?;
    let (_, args) = split_discriminator(data).map_err(|_| INVALID_INSTRUCTION_DATA)?;

    match tag {
        TokenMillInstruction::CreateMarket => {
            let args: CreateMarketArgs = unpack_args(args).map_err(|_| INVALID_INSTRUCTION_DATA)?;
            if args.creator_fee_share.checked_add(args.staking_fee_share)
                != Some(FEE_SHARE_TOTAL)
            {
                return Err(INVALID_FEE_SHARES);
            }
            let (market, creator) = (accounts[1], accounts[6]);
            if markets.contains_key(&market) {
                return Err(MARKET_ALREADY_EXISTS);
            }
            markets.insert(
                market,
                FakeMarket {
                    creator,
                    ..Default::default()
                },
            );
        }
        TokenMillInstruction::LockMarket => {
            let args: LockMarketArgs = unpack_args(args).map_err(|_| INVALID_INSTRUCTION_DATA)?;
            let swap_authority = Pubkey::new_from_array(args.swap_authority);
            let (market_key, badge, creator) = (accounts[0], accounts[1], accounts[2]);
            let market = markets.get_mut(&market_key).ok_or(UNKNOWN_MARKET)?;
            if market.creator != creator {
                return Err(UNAUTHORIZED);
            }
            if market.swap_authority.is_some() || market.swapped {
                return Err(MARKET_ALREADY_LOCKED);
            }
            let (expected_badge, _) =
                find_swap_authority_badge_address(&TOKEN_MILL_ID, &market_key, &swap_authority);
            if badge != expected_badge {
                return Err(INVALID_SWAP_AUTHORITY);
            }
            market.swap_authority = Some(swap_authority);
        }
        TokenMillInstruction::SetMarketPrices => {
            let args: SetMarketPricesArgs =
                unpack_args(args).map_err(|_| INVALID_INSTRUCTION_DATA)?;
            let market = markets.get_mut(&accounts[0]).ok_or(UNKNOWN_MARKET)?;
            if market.creator != accounts[1] {
                return Err(UNAUTHORIZED);
            }
            market.bid_prices = Some(args.bid_prices.to_vec());
        }
        TokenMillInstruction::FreeMarket => {
            let market = markets.get_mut(&accounts[0]).ok_or(UNKNOWN_MARKET)?;
            match market.swap_authority {
                None => return Err(MARKET_NOT_LOCKED),
                Some(authority) if authority != accounts[2] => return Err(INVALID_SWAP_AUTHORITY),
                Some(_) => market.swap_authority = None,
            }
        }
        TokenMillInstruction::PermissionedSwap => {
            let market = markets.get_mut(&accounts[1]).ok_or(UNKNOWN_MARKET)?;
            match market.swap_authority {
                Some(authority) if authority == accounts[11] => market.swapped = true,
                _ => return Err(INVALID_SWAP_AUTHORITY),
            }
        }
    }
    Ok(())
}

pub fn quiet_config() -> SubmitterConfig {
    SubmitterConfig::default()
        .with_debug_logs(false)
        .with_poll_interval(Duration::from_millis(1))
        .with_confirm_timeout(Duration::from_secs(5))
}

pub fn submitter(cluster: FakeCluster) -> TxSubmitter<FakeCluster> {
    TxSubmitter::with_endpoint(cluster, quiet_config())
}

pub fn keypairs<const N: usize>() -> [Keypair; N] {
    std::array::from_fn(|_| Keypair::new())
}

pub fn signers<const N: usize>(keypairs: [&Keypair; N]) -> [&dyn Signer; N] {
    keypairs.map(|keypair| keypair as &dyn Signer)
}
