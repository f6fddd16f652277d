//! Instance-tier state of the target: the completion flag and the running
//! total of forwarded funds. Role entries live in [`crate::rbac`].

use soroban_sdk::{contracttype, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Completed,
    TotalReceived,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_completed(env: &Env) -> bool {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Completed)
        .unwrap_or(false)
}

pub fn set_completed(env: &Env) {
    env.storage().instance().set(&DataKey::Completed, &true);
    bump_instance(env);
}

pub fn total_received(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalReceived)
        .unwrap_or(0)
}

/// Adds `amount` to the running total and returns the new total.
pub fn add_received(env: &Env, amount: i128) -> i128 {
    let total = total_received(env) + amount;
    env.storage().instance().set(&DataKey::TotalReceived, &total);
    total
}
