mod common;

use std::time::Duration;

use common::{
    keypairs,
    quiet_config,
    signers,
    submitter,
    Delivery,
    FakeCluster,
    UNKNOWN_MARKET,
};
use solana_instruction_error::InstructionError;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use solana_transaction_error::TransactionError;
use token_mill_client::{
    actions::{
        CreateMarketParams,
        FreeMarketParams,
        LockMarketParams,
        TokenMillAction,
    },
    config::SubmitterConfig,
    error::SubmitError,
    submitter::{
        SignatureState,
        TxSubmitter,
    },
};
use token_mill_interface::instructions::CreateMarketArgs;

fn free_market(swap_authority: &Keypair) -> TokenMillAction {
    TokenMillAction::FreeMarket(FreeMarketParams {
        market: Pubkey::new_unique(),
        swap_authority: swap_authority.pubkey(),
    })
}

fn lock_market(creator: &Keypair) -> TokenMillAction {
    TokenMillAction::LockMarket(LockMarketParams {
        market: Pubkey::new_unique(),
        swap_authority: Pubkey::new_unique(),
        creator: creator.pubkey(),
    })
}

/// Transactions are accepted by the endpoint but never land.
fn dropped_submitter() -> TxSubmitter<FakeCluster> {
    submitter(FakeCluster::default().with_delivery(Delivery::Drop))
}

#[tokio::test]
async fn missing_signer_fails_before_any_network_call() {
    let submitter = submitter(FakeCluster::default());
    let [payer, swap_authority] = keypairs();

    let result = submitter
        .submit(&free_market(&swap_authority), &signers([&payer]))
        .await;

    match result {
        Err(SubmitError::Malformed { reason }) => {
            assert!(reason.contains(&swap_authority.pubkey().to_string()));
        }
        other => panic!("expected a malformed request, got {other:?}"),
    }
    assert_eq!(submitter.endpoint().calls().total(), 0);
}

#[tokio::test]
async fn empty_signer_set_is_malformed() {
    let submitter = submitter(FakeCluster::default());
    let [creator] = keypairs();

    let result = submitter.submit(&lock_market(&creator), &[]).await;
    assert!(matches!(result, Err(SubmitError::Malformed { .. })));
    assert_eq!(submitter.endpoint().calls().total(), 0);
}

#[tokio::test]
async fn repeated_signers_are_accepted() -> anyhow::Result<()> {
    let submitter = submitter(FakeCluster::default());
    let [creator, base_mint] = keypairs();
    let action = TokenMillAction::CreateMarket(CreateMarketParams {
        config: Pubkey::new_unique(),
        base_token_mint: base_mint.pubkey(),
        quote_token_mint: Pubkey::new_unique(),
        creator: creator.pubkey(),
        args: CreateMarketArgs {
            name: "Test Market".to_string(),
            symbol: "TM".to_string(),
            uri: String::new(),
            total_supply: 1_000_000,
            creator_fee_share: 8_000,
            staking_fee_share: 0,
        },
    });

    submitter
        .submit(&action, &signers([&creator, &creator, &base_mint]))
        .await?;
    assert_eq!(submitter.endpoint().calls().send_transaction, 1);
    Ok(())
}

#[tokio::test]
async fn confirming_twice_returns_the_same_signature() -> anyhow::Result<()> {
    let submitter = submitter(FakeCluster::default());
    let [creator, base_mint] = keypairs();
    let action = TokenMillAction::CreateMarket(CreateMarketParams {
        config: Pubkey::new_unique(),
        base_token_mint: base_mint.pubkey(),
        quote_token_mint: Pubkey::new_unique(),
        creator: creator.pubkey(),
        args: CreateMarketArgs {
            name: "Test Market".to_string(),
            symbol: "TM".to_string(),
            uri: String::new(),
            total_supply: 1_000_000,
            creator_fee_share: 4_000,
            staking_fee_share: 4_000,
        },
    });

    let signature = submitter
        .submit(&action, &signers([&creator, &base_mint]))
        .await?;
    assert_eq!(submitter.confirm(signature).await?, signature);
    assert_eq!(submitter.confirm(signature).await?, signature);
    assert_eq!(
        submitter.reconcile(&signature).await?,
        SignatureState::Confirmed
    );
    assert_eq!(submitter.endpoint().calls().send_transaction, 1);
    Ok(())
}

#[tokio::test]
async fn waits_until_the_commitment_is_reached() -> anyhow::Result<()> {
    let submitter = submitter(
        FakeCluster::default().with_delivery(Delivery::Land { confirm_after: 3 }),
    );
    let [creator, base_mint] = keypairs();
    let action = TokenMillAction::CreateMarket(CreateMarketParams {
        config: Pubkey::new_unique(),
        base_token_mint: base_mint.pubkey(),
        quote_token_mint: Pubkey::new_unique(),
        creator: creator.pubkey(),
        args: CreateMarketArgs {
            name: String::new(),
            symbol: String::new(),
            uri: String::new(),
            total_supply: 1,
            creator_fee_share: 0,
            staking_fee_share: 8_000,
        },
    });

    submitter
        .submit(&action, &signers([&creator, &base_mint]))
        .await?;
    assert_eq!(submitter.endpoint().calls().signature_status, 4);
    Ok(())
}

#[tokio::test]
async fn cancellation_after_send_is_ambiguous() {
    let submitter = dropped_submitter();
    let [creator] = keypairs();

    let result = submitter
        .submit_with_cancel(
            &lock_market(&creator),
            &signers([&creator]),
            tokio::time::sleep(Duration::from_millis(20)),
        )
        .await;

    match result {
        Err(SubmitError::Ambiguous { signature, .. }) => {
            assert_ne!(signature, Signature::default());
            assert_eq!(
                submitter.reconcile(&signature).await.unwrap(),
                SignatureState::NotFound
            );
        }
        other => panic!("expected an ambiguous outcome, got {other:?}"),
    }
    assert_eq!(submitter.endpoint().calls().send_transaction, 1);
}

#[tokio::test]
async fn confirmation_timeout_is_ambiguous() {
    let submitter = TxSubmitter::with_endpoint(
        FakeCluster::default().with_delivery(Delivery::Drop),
        quiet_config().with_confirm_timeout(Duration::from_millis(30)),
    );
    let [creator] = keypairs();

    let result = submitter
        .submit(&lock_market(&creator), &signers([&creator]))
        .await;
    assert!(
        matches!(result, Err(SubmitError::Ambiguous { .. })),
        "{result:?}"
    );
}

#[tokio::test]
async fn expired_blockhash_is_rejected() {
    let submitter = submitter(
        FakeCluster::default()
            .with_delivery(Delivery::Drop)
            .with_blockhash_lifetime(3),
    );
    let [creator] = keypairs();

    let result = submitter
        .submit(&lock_market(&creator), &signers([&creator]))
        .await;

    match result {
        Err(SubmitError::Rejected {
            signature, error, ..
        }) => {
            assert!(signature.is_some());
            assert_eq!(error, TransactionError::BlockhashNotFound);
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let submitter = submitter(FakeCluster::default().with_send_failure("connection refused"));
    let [creator] = keypairs();

    let result = submitter
        .submit(&lock_market(&creator), &signers([&creator]))
        .await;
    assert_eq!(
        result,
        Err(SubmitError::Transport {
            message: "connection refused".to_string()
        })
    );
    assert_eq!(result.unwrap_err().exit_code(), 3);
}

#[tokio::test]
async fn on_chain_failure_without_preflight_is_rejected_with_its_signature() {
    let config = SubmitterConfig {
        skip_preflight: true,
        ..quiet_config()
    };
    let submitter = TxSubmitter::with_endpoint(FakeCluster::default(), config);
    let [swap_authority] = keypairs();

    let result = submitter
        .submit(&free_market(&swap_authority), &signers([&swap_authority]))
        .await;

    let (signature, error) = match result {
        Err(SubmitError::Rejected {
            signature: Some(signature),
            error,
            ..
        }) => (signature, error),
        other => panic!("expected an on-chain rejection, got {other:?}"),
    };
    assert_eq!(
        error,
        TransactionError::InstructionError(0, InstructionError::Custom(UNKNOWN_MARKET))
    );
    assert_eq!(
        submitter.reconcile(&signature).await.unwrap(),
        SignatureState::Failed(error)
    );
}
