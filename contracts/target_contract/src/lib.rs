//! # Target Contract
//!
//! Beneficiary side of the staking escrow. It receives the pooled funds of a
//! successful campaign and records that the campaign completed.
//!
//! | Phase      | Entry Point(s)                                  |
//! |------------|-------------------------------------------------|
//! | Bootstrap  | `__constructor`                                 |
//! | Role admin | `grant_role`, `revoke_role`                     |
//! | Funding    | [`TargetContract::complete`]                    |
//! | Queries    | `has_role`, `completed`, `total_received`       |
//!
//! Only addresses holding [`Role::Staking`] may call `complete`. The role is
//! granted by an [`Role::Admin`] holder after the escrow has been deployed.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

mod events;
pub mod rbac;
mod storage;


pub use events::{CampaignCompleted, RoleRevoked, RoleSet};
pub use rbac::Role;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized    = 1,
    AlreadyCompleted = 2,
    InvalidAmount    = 3,
}

#[contract]
pub struct TargetContract;

#[contractimpl]
impl TargetContract {
    /// Deploy the target and make `admin` its first `Admin`.
    pub fn __constructor(env: Env, admin: Address) {
        rbac::init_admin(&env, &admin);
    }

    /// Grant `role` to `account`. `caller` must hold `Admin`.
    pub fn grant_role(env: Env, caller: Address, account: Address, role: Role) -> Result<(), Error> {
        rbac::grant_role(&env, &caller, &account, role)
    }

    /// Revoke `role` from `account`. `caller` must hold `Admin`.
    pub fn revoke_role(env: Env, caller: Address, account: Address, role: Role) -> Result<(), Error> {
        rbac::revoke_role(&env, &caller, &account, role)
    }

    /// Return `true` if `account` holds `role`.
    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        rbac::has_role(&env, &account, role)
    }

    /// Accept the pooled funds of a successful campaign.
    ///
    /// The escrow transfers `amount` to this contract and then calls
    /// `complete` in the same invocation. `staker` must authorize and hold
    /// the `Staking` role. A target completes at most once.
    pub fn complete(env: Env, staker: Address, amount: i128) -> Result<(), Error> {
        staker.require_auth();
        rbac::require_role(&env, &staker, Role::Staking)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::is_completed(&env) {
            return Err(Error::AlreadyCompleted);
        }

        storage::set_completed(&env);
        let total = storage::add_received(&env, amount);

        events::emit_completed(&env, staker, amount, total);
        Ok(())
    }

    /// `true` once a staking escrow has forwarded its pool.
    pub fn completed(env: Env) -> bool {
        storage::is_completed(&env)
    }

    /// Total amount ever forwarded through `complete`.
    pub fn total_received(env: Env) -> i128 {
        storage::total_received(&env)
    }
}
