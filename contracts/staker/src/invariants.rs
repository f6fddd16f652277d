#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address};

use crate::StakerClient;

/// Pool total equals the sum of every participant's balance.
pub fn assert_pool_matches_ledger(client: &StakerClient, stakers: &[Address]) {
    let sum: i128 = stakers.iter().map(|s| client.balance_of(s)).sum();
    assert_eq!(
        client.total_staked(),
        sum,
        "pool total {} differs from ledger sum {}",
        client.total_staked(),
        sum
    );
}

/// The escrow holds at least the tokens its ledger says it holds.
pub fn assert_pool_backed(client: &StakerClient, token: &token::Client) {
    let held = token.balance(&client.address);
    let total = client.total_staked();
    assert!(
        held >= total,
        "escrow holds {} tokens but owes {}",
        held,
        total
    );
}

/// A stake of `amount` grows the balance by exactly `amount`.
pub fn assert_stake_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "stake invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// Execution either forwarded the pool or opened withdrawals, never both
/// and never neither.
pub fn assert_single_outcome(client: &StakerClient) {
    if client.executed() {
        assert!(
            client.withdraw_enabled() != client.beneficiary_completed(),
            "executed campaign must be exactly one of forwarded / refundable"
        );
    } else {
        assert!(
            !client.withdraw_enabled(),
            "withdrawals open before execution"
        );
    }
}

/// Snapshot of every piece of observable escrow state.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub total_staked: i128,
    pub balances: std::vec::Vec<i128>,
    pub executed: bool,
    pub withdraw_enabled: bool,
    pub escrow_tokens: i128,
}

pub fn snapshot(client: &StakerClient, token: &token::Client, stakers: &[Address]) -> Snapshot {
    Snapshot {
        total_staked: client.total_staked(),
        balances: stakers.iter().map(|s| client.balance_of(s)).collect(),
        executed: client.executed(),
        withdraw_enabled: client.withdraw_enabled(),
        escrow_tokens: token.balance(&client.address),
    }
}
