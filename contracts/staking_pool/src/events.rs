#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub token: Address,
    pub hourly_divisor: i128,
    pub timestamp: u64,
}

/// Fired when a staker deposits into the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a staker claims accrued rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a staker compounds accrued rewards into their stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a staker withdraws principal.
///
/// `compounded` carries the reward folded into the stake during the
/// settlement that precedes every withdrawal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub staker: Address,
    pub amount: i128,
    pub compounded: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, token: Address, hourly_divisor: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            token,
            hourly_divisor,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_claim(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIM"), staker.clone()),
        ClaimEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_compound(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("COMPOUND"), staker.clone()),
        CompoundEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdraw(env: &Env, staker: Address, amount: i128, compounded: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        WithdrawEvent {
            staker,
            amount,
            compounded,
            timestamp: env.ledger().timestamp(),
        },
    );
}
