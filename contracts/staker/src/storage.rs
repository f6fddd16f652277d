//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type             | Description                          |
//! |-------------------|------------------|--------------------------------------|
//! | `Config`          | `CampaignConfig` | Immutable campaign parameters        |
//! | `TotalStaked`     | `i128`           | Pool total, sum of all balances      |
//! | `Executed`        | `bool`           | One-shot finalization marker         |
//! | `WithdrawEnabled` | `bool`           | Set when execution missed threshold  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type   | Description                       |
//! |--------------------|--------|-----------------------------------|
//! | `Balance(address)` | `i128` | Amount staked by one participant  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. A zero balance is stored as an absent entry.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::CampaignConfig;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    TotalStaked,
    Executed,
    WithdrawEnabled,
    Balance(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn save_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Panics if the constructor never ran, which the host rules out.
pub fn load_config(env: &Env) -> CampaignConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("campaign not configured")
}

pub fn total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn set_total_staked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &total);
    bump_instance(env);
}

pub fn is_executed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Executed)
        .unwrap_or(false)
}

pub fn set_executed(env: &Env, executed: bool) {
    env.storage().instance().set(&DataKey::Executed, &executed);
    bump_instance(env);
}

pub fn is_withdraw_enabled(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::WithdrawEnabled)
        .unwrap_or(false)
}

pub fn enable_withdraw(env: &Env) {
    env.storage().instance().set(&DataKey::WithdrawEnabled, &true);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn balance_of(env: &Env, staker: &Address) -> i128 {
    let key = DataKey::Balance(staker.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, staker: &Address, balance: i128) {
    let key = DataKey::Balance(staker.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}
