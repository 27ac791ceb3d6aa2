#![no_std]

pub mod accrual;
pub mod events;
pub mod ledger;

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol};

use ledger::Account;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");
const RATE_DIV: Symbol = symbol_short!("RATE_DIV");
const STAKE_BAL: Symbol = symbol_short!("STK_BAL");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InvalidRate = 4,
    InsufficientStake = 5,
    RewardPoolExhausted = 6,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Snapshot of a staker's position returned by `get_position`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Position {
    pub balance: i128,
    pub pending: i128,
    pub claimed: i128,
    pub last_updated: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPoolContract;

#[contractimpl]
impl StakingPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `token`          – SAC address of the token staked *and* paid out.
    /// * `hourly_divisor` – rate quote: each hour a stake earns
    ///   `balance / hourly_divisor` (1000 ⇒ 0.1 %/hour).
    ///
    /// The rate is immutable after this call and the contract has no
    /// privileged operations. The reward pool is funded by transferring
    /// tokens directly to the contract address; there is no `fund` entry
    /// point.
    pub fn initialize(env: Env, token: Address, hourly_divisor: i128) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if hourly_divisor <= 0 {
            return Err(ContractError::InvalidRate);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&TOKEN, &token);
        // Only the per-second divisor is stored; the hourly quote is
        // recovered exactly on read.
        env.storage()
            .instance()
            .set(&RATE_DIV, &accrual::rate_divisor(hourly_divisor));
        // STAKE_BAL starts at zero; unwrap_or(0) handles the absent key.

        events::publish_initialized(&env, token, hourly_divisor);

        Ok(())
    }

    // ── Deposit ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens into the pool.
    ///
    /// Any reward accrued since the staker's last settlement is compounded
    /// into the stake first, so a repeat deposit never discards accrual.
    /// The token pull fails (and the whole call rolls back) if the staker
    /// lacks balance or authorization on the token contract.
    pub fn deposit(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut account = ledger::get_account(&env, &staker);

        // 1. Settle: fold outstanding rewards into the stake.
        Self::settle_into_stake(&env, &mut account)?;

        // 2. Pull tokens from the staker into the contract.
        let token_id = Self::token_id(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        // 3. Credit the stake and the pool aggregate, stamp the settlement.
        account.balance = account.balance.saturating_add(amount);
        account.last_updated = now;
        ledger::store_account(&env, &staker, &account);

        let new_total = Self::stake_balance_raw(&env).saturating_add(amount);
        Self::set_stake_balance(&env, new_total);

        events::publish_deposit(&env, staker, amount, new_total);

        Ok(())
    }

    // ── Claim ───────────────────────────────────────────────────────────────

    /// Pay out all reward accrued since the staker's last settlement.
    ///
    /// Fails with `RewardPoolExhausted` if the pool cannot cover the full
    /// amount; rewards are never partially paid. The staked balance is
    /// untouched. Returns the amount paid out.
    pub fn claim(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut account = ledger::get_account(&env, &staker);

        let reward = Self::pending_for(&env, &account, now);
        if reward > 0 {
            Self::require_reward_coverage(&env, reward)?;

            let token_id = Self::token_id(&env)?;
            token::Client::new(&env, &token_id).transfer(
                &env.current_contract_address(),
                &staker,
                &reward,
            );
        }

        account.claimed = account.claimed.saturating_add(reward);
        account.last_updated = now;
        ledger::store_account(&env, &staker, &account);

        events::publish_claim(&env, staker, reward);

        Ok(reward)
    }

    // ── Compound ────────────────────────────────────────────────────────────

    /// Convert accrued reward into additional staked principal.
    ///
    /// Pure bookkeeping: value moves from the reward pool into the stake
    /// pool with no external transfer, so the contract's token holdings are
    /// unchanged. Returns the compounded amount.
    pub fn compound(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut account = ledger::get_account(&env, &staker);

        let reward = Self::settle_into_stake(&env, &mut account)?;

        account.last_updated = now;
        ledger::store_account(&env, &staker, &account);

        events::publish_compound(&env, staker, reward);

        Ok(reward)
    }

    // ── Withdraw ────────────────────────────────────────────────────────────

    /// Withdraw `amount` tokens of staked principal.
    ///
    /// Outstanding rewards compound first; the balance check runs against
    /// the post-compound balance, so an amount only covered once rewards
    /// fold in is accepted. Fails with `InsufficientStake` otherwise, with
    /// no state mutated.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut account = ledger::get_account(&env, &staker);

        // 1. Settle: compound outstanding rewards before the balance check.
        let compounded = Self::settle_into_stake(&env, &mut account)?;

        if amount > account.balance {
            return Err(ContractError::InsufficientStake);
        }

        // 2. Debit the stake and the pool aggregate, stamp the settlement.
        account.balance = account.balance.saturating_sub(amount);
        account.last_updated = now;
        ledger::store_account(&env, &staker, &account);

        let new_total = Self::stake_balance_raw(&env).saturating_sub(amount);
        Self::set_stake_balance(&env, new_total);

        // 3. Return tokens to the staker.
        let token_id = Self::token_id(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::publish_withdraw(&env, staker, amount, compounded);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the staker's current staked balance.
    pub fn balance_of(env: Env, staker: Address) -> i128 {
        ledger::get_account(&env, &staker).balance
    }

    /// Return the sum of all currently staked tokens.
    pub fn stake_balance(env: Env) -> i128 {
        Self::stake_balance_raw(&env)
    }

    /// Return the tokens currently available for reward payouts.
    ///
    /// Derived, not stored: the contract's token holdings minus the staked
    /// principal. Tokens transferred directly to the contract address are
    /// recognised as reward funding through this view.
    pub fn reward_balance(env: Env) -> Result<i128, ContractError> {
        let token_id = Self::token_id(&env)?;
        let held = token::Client::new(&env, &token_id).balance(&env.current_contract_address());
        Ok(held.saturating_sub(Self::stake_balance_raw(&env)))
    }

    /// Return the cumulative rewards ever credited to the staker.
    pub fn claimed(env: Env, staker: Address) -> i128 {
        ledger::get_account(&env, &staker).claimed
    }

    /// Return the timestamp of the staker's last settlement.
    pub fn last_updated(env: Env, staker: Address) -> u64 {
        ledger::get_account(&env, &staker).last_updated
    }

    /// Return real-time pending rewards for a staker without mutating state.
    pub fn rewards(env: Env, staker: Address) -> i128 {
        let account = ledger::get_account(&env, &staker);
        Self::pending_for(&env, &account, env.ledger().timestamp())
    }

    /// Return the combined position for a staker in one storage pass.
    pub fn get_position(env: Env, staker: Address) -> Position {
        let account = ledger::get_account(&env, &staker);
        let pending = Self::pending_for(&env, &account, env.ledger().timestamp());

        Position {
            balance: account.balance,
            pending,
            claimed: account.claimed,
            last_updated: account.last_updated,
        }
    }

    /// Return the staked/reward token address.
    pub fn token(env: Env) -> Result<Address, ContractError> {
        Self::token_id(&env)
    }

    /// Return the canonical per-second rate divisor.
    pub fn rate_divisor(env: Env) -> i128 {
        env.storage().instance().get(&RATE_DIV).unwrap_or(0)
    }

    /// Return the rate as the hourly-divisor quote it was constructed with.
    pub fn hourly_divisor(env: Env) -> i128 {
        accrual::hourly_divisor(Self::rate_divisor(env))
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn token_id(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn stake_balance_raw(env: &Env) -> i128 {
        env.storage().instance().get(&STAKE_BAL).unwrap_or(0)
    }

    fn set_stake_balance(env: &Env, total: i128) {
        env.storage().instance().set(&STAKE_BAL, &total);
    }

    /// Reward accrued by `account` between its last settlement and `now`.
    fn pending_for(env: &Env, account: &Account, now: u64) -> i128 {
        let rate_divisor: i128 = env.storage().instance().get(&RATE_DIV).unwrap_or(0);
        let elapsed = now.saturating_sub(account.last_updated);
        accrual::pending_reward(account.balance, elapsed, rate_divisor)
    }

    /// Guard: the reward pool must cover `amount` in full.
    fn require_reward_coverage(env: &Env, amount: i128) -> Result<(), ContractError> {
        let token_id = Self::token_id(env)?;
        let held = token::Client::new(env, &token_id).balance(&env.current_contract_address());
        let available = held.saturating_sub(Self::stake_balance_raw(env));
        if amount > available {
            return Err(ContractError::RewardPoolExhausted);
        }
        Ok(())
    }

    /// Settlement primitive shared by compound, withdraw, and deposit.
    ///
    /// Folds the account's pending reward into its staked balance and the
    /// pool aggregate, crediting `claimed`. The caller stamps
    /// `last_updated` exactly once, after all balance adjustments, so a
    /// single call never double-counts the interval it observed.
    fn settle_into_stake(env: &Env, account: &mut Account) -> Result<i128, ContractError> {
        let now = env.ledger().timestamp();
        let pending = Self::pending_for(env, account, now);

        if pending > 0 {
            Self::require_reward_coverage(env, pending)?;

            account.balance = account.balance.saturating_add(pending);
            account.claimed = account.claimed.saturating_add(pending);
            Self::set_stake_balance(env, Self::stake_balance_raw(env).saturating_add(pending));
        }

        Ok(pending)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
