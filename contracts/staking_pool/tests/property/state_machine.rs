#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the StakingPool contract.
//!
//! These tests model the contract as a state machine and verify that
//! arbitrary sequences of operations always produce internally consistent
//! state.
//!
//! Invariants tested:
//! - The contract's token holdings always equal `stake_balance + reward_balance`
//! - No value is created or destroyed: the total supply across the contract
//!   and all stakers is constant
//! - `claimed` and `last_updated` are monotone per staker
//! - Staked balances never go negative

use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOURLY_DIVISOR: i128 = 1_000;
const REWARD_FUNDING: i128 = 1_000_000_000;
const STAKER_FUNDING: i128 = 1_000_000;

/// One step of the generated operation sequence. `staker` indexes into the
/// fixed set of test accounts; `dt` advances the ledger clock first.
#[derive(Clone, Debug)]
enum Action {
    Deposit { staker: usize, amount: i128 },
    Withdraw { staker: usize, amount: i128 },
    Claim { staker: usize },
    Compound { staker: usize },
}

fn action_strategy(n_stakers: usize) -> impl Strategy<Value = (u32, Action)> {
    let staker = 0..n_stakers;
    (
        0u32..=7_200,
        prop_oneof![
            (staker.clone(), 1i128..=200_000).prop_map(|(s, a)| Action::Deposit {
                staker: s,
                amount: a
            }),
            (staker.clone(), 1i128..=250_000).prop_map(|(s, a)| Action::Withdraw {
                staker: s,
                amount: a
            }),
            staker.clone().prop_map(|s| Action::Claim { staker: s }),
            staker.prop_map(|s| Action::Compound { staker: s }),
        ],
    )
}

fn setup(
    n_stakers: usize,
) -> (
    Env,
    StakingPoolContractClient<'static>,
    Address,
    Vec<Address>,
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token_id = token.address();

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);
    client.initialize(&token_id, &HOURLY_DIVISOR);

    let sac = StellarAssetClient::new(&env, &token_id);
    sac.mock_all_auths().mint(&contract_id, &REWARD_FUNDING);

    let stakers: Vec<Address> = (0..n_stakers)
        .map(|_| {
            let staker = Address::generate(&env);
            sac.mint(&staker, &STAKER_FUNDING);
            staker
        })
        .collect();

    (env, client, token_id, stakers)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Arbitrary interleavings of deposit/withdraw/claim/compound across two
    /// stakers, with the clock advancing between steps, must keep the pool
    /// internally consistent and conserve the total token supply.
    #[test]
    fn prop_pool_stays_consistent(
        steps in prop::collection::vec(action_strategy(2), 0..25)
    ) {
        let (env, client, token_id, stakers) = setup(2);
        let token = TokenClient::new(&env, &token_id);

        let initial_supply = REWARD_FUNDING + STAKER_FUNDING * stakers.len() as i128;

        let mut now = 0u64;
        let mut claimed_floor = vec![0i128; stakers.len()];
        let mut updated_floor = vec![0u64; stakers.len()];

        for (dt, action) in steps {
            now += dt as u64;
            env.ledger().set_timestamp(now);

            // Failed calls (insufficient funds, exhausted pool) are part of
            // the model; they must simply leave no trace.
            match action {
                Action::Deposit { staker, amount } => {
                    let _ = client.try_deposit(&stakers[staker], &amount);
                }
                Action::Withdraw { staker, amount } => {
                    let _ = client.try_withdraw(&stakers[staker], &amount);
                }
                Action::Claim { staker } => {
                    let _ = client.try_claim(&stakers[staker]);
                }
                Action::Compound { staker } => {
                    let _ = client.try_compound(&stakers[staker]);
                }
            }

            // Holdings always split exactly into stake + reward pool.
            let held = token.balance(&client.address);
            prop_assert_eq!(held, client.stake_balance() + client.reward_balance());
            prop_assert!(client.reward_balance() >= 0);

            // No value created or destroyed anywhere in the system.
            let circulating: i128 = stakers.iter().map(|s| token.balance(s)).sum();
            prop_assert_eq!(held + circulating, initial_supply);

            // Per-staker monotonicity.
            for (i, staker) in stakers.iter().enumerate() {
                let claimed = client.claimed(staker);
                let updated = client.last_updated(staker);
                prop_assert!(claimed >= claimed_floor[i]);
                prop_assert!(updated >= updated_floor[i]);
                prop_assert!(client.balance_of(staker) >= 0);
                claimed_floor[i] = claimed;
                updated_floor[i] = updated;
            }
        }

        // The aggregate is exactly the sum of the per-staker balances.
        let sum: i128 = stakers.iter().map(|s| client.balance_of(s)).sum();
        prop_assert_eq!(sum, client.stake_balance());
    }

    /// A second `initialize` call must always fail, whatever the rate.
    #[test]
    fn prop_double_initialize_always_fails(rate in 1i128..=1_000_000) {
        let (env, client, _token_id, _stakers) = setup(1);

        let other_token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        prop_assert!(client.try_initialize(&other_token, &rate).is_err());
    }
}
