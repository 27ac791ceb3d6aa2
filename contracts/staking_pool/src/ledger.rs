use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Per-staker records live in persistent storage under (prefix, address).
const ACCOUNT: Symbol = symbol_short!("ACCT");

/// One staker's ledger entry.
///
/// Created lazily on first deposit and never deleted: a balance that
/// returns to zero keeps its record so `claimed` history and the last
/// settlement timestamp stay reconstructable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    /// Amount currently staked. Never negative.
    pub balance: i128,
    /// Ledger timestamp (seconds) of the last settlement. Non-decreasing.
    pub last_updated: u64,
    /// Cumulative rewards ever credited via claim or compound. Only grows.
    pub claimed: i128,
}

impl Account {
    fn empty() -> Self {
        Account {
            balance: 0,
            last_updated: 0,
            claimed: 0,
        }
    }
}

/// Load a staker's record, or the empty record if none exists yet.
pub fn get_account(env: &Env, staker: &Address) -> Account {
    env.storage()
        .persistent()
        .get(&(ACCOUNT, staker.clone()))
        .unwrap_or_else(Account::empty)
}

pub fn store_account(env: &Env, staker: &Address, account: &Account) {
    env.storage()
        .persistent()
        .set(&(ACCOUNT, staker.clone()), account);
}
