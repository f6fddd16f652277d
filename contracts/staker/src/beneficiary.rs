//! Client for the beneficiary target.
//!
//! Only the entry points the escrow calls are declared here; the target's
//! role management is driven by the deployer, never by the escrow.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "BeneficiaryClient")]
pub trait Beneficiary {
    /// Record that `staker` forwarded `amount`. Fails unless `staker` holds
    /// the target's staking role.
    fn complete(env: Env, staker: Address, amount: i128);

    fn completed(env: Env) -> bool;
}
