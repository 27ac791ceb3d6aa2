#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
    Claim,
    Compound,
    Advance { dt: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token_id = token.address();

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);
    let _ = client.try_initialize(&token_id, &1_000i128);

    // Fund the reward pool and a handful of users so deposits and claims
    // can actually succeed instead of bouncing off the token contract.
    let sac = StellarAssetClient::new(&env, &token_id);
    sac.mint(&contract_id, &1_000_000_000i128);

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        sac.mint(&user, &1_000_000i128);
        users.push(user);
    }

    // Call functions with arbitrary parameters to find unhandled panics
    // (e.g., overflow from missing math protection).
    let mut now = 0u64;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_deposit(caller, &(amount as i128));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &(amount as i128));
            }
            FuzzAction::Claim => {
                let _ = client.try_claim(caller);
            }
            FuzzAction::Compound => {
                let _ = client.try_compound(caller);
            }
            FuzzAction::Advance { dt } => {
                now = now.saturating_add(dt as u64);
                env.ledger().set_timestamp(now);
            }
        }
    }
});
