//! Events published by the target contract.
//!
//! | Topic         | Data                 |
//! |---------------|----------------------|
//! | `role_set`    | [`RoleSet`]          |
//! | `role_del`    | [`RoleRevoked`]      |
//! | `completed`   | [`CampaignCompleted`]|

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleSet {
    pub account: Address,
    pub role: Role,
    pub granted_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevoked {
    pub account: Address,
    pub role: Role,
    pub revoked_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCompleted {
    pub staker: Address,
    pub amount: i128,
    pub total_received: i128,
}

pub fn emit_role_set(env: &Env, account: Address, role: Role, granted_by: Address) {
    env.events().publish(
        (symbol_short!("role_set"),),
        RoleSet { account, role, granted_by },
    );
}

pub fn emit_role_revoked(env: &Env, account: Address, role: Role, revoked_by: Address) {
    env.events().publish(
        (symbol_short!("role_del"),),
        RoleRevoked { account, role, revoked_by },
    );
}

pub fn emit_completed(env: &Env, staker: Address, amount: i128, total_received: i128) {
    env.events().publish(
        (symbol_short!("completed"),),
        CampaignCompleted { staker, amount, total_received },
    );
}
