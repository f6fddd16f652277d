//! # Role-Based Access Control
//!
//! Roles are stored per `(account, role)` pair, so an account may hold several
//! roles at once.
//!
//! | Role      | May                                            |
//! |-----------|------------------------------------------------|
//! | `Admin`   | grant and revoke any role                      |
//! | `Staking` | forward a campaign pool through `complete`     |
//!
//! The first `Admin` is set by the constructor. There is no implicit
//! super-admin: an admin that revokes its own `Admin` role cannot get it back.

use soroban_sdk::{contracttype, Address, Env};

use crate::{events, Error};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;
const ROLE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const ROLE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Staking,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RbacKey {
    Role(Address, Role),
}

pub fn init_admin(env: &Env, admin: &Address) {
    let key = RbacKey::Role(admin.clone(), Role::Admin);
    env.storage().persistent().set(&key, &true);
    bump(env, &key);
}

pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    let key = RbacKey::Role(account.clone(), role);
    let held = env.storage().persistent().has(&key);
    if held {
        bump(env, &key);
    }
    held
}

pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), Error> {
    if has_role(env, account, role) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

/// Granting a role the account already holds is a no-op and emits nothing.
pub fn grant_role(env: &Env, caller: &Address, account: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    require_role(env, caller, Role::Admin)?;

    if has_role(env, account, role) {
        return Ok(());
    }

    let key = RbacKey::Role(account.clone(), role);
    env.storage().persistent().set(&key, &true);
    bump(env, &key);

    events::emit_role_set(env, account.clone(), role, caller.clone());
    Ok(())
}

pub fn revoke_role(env: &Env, caller: &Address, account: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    require_role(env, caller, Role::Admin)?;

    let key = RbacKey::Role(account.clone(), role);
    if !env.storage().persistent().has(&key) {
        return Ok(());
    }
    env.storage().persistent().remove(&key);

    events::emit_role_revoked(env, account.clone(), role, caller.clone());
    Ok(())
}

fn bump(env: &Env, key: &RbacKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ROLE_LIFETIME_THRESHOLD, ROLE_BUMP_AMOUNT);
}
