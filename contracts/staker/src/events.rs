//! Events published by the staking escrow.
//!
//! | Topic       | Data          | When                                  |
//! |-------------|---------------|---------------------------------------|
//! | `staked`    | [`Staked`]    | every successful `stake`              |
//! | `executed`  | [`Executed`]  | the single successful `execute`       |
//! | `withdrawn` | [`Withdrawn`] | every non-zero refund from `withdraw` |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Staked {
    pub staker: Address,
    pub amount: i128,
    /// Staker's balance after this stake.
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executed {
    pub caller: Address,
    /// Pool total at finalization.
    pub total: i128,
    /// `true` if the pool went to the beneficiary.
    pub forwarded: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub staker: Address,
    pub amount: i128,
}

pub fn emit_staked(env: &Env, staker: Address, amount: i128, balance: i128) {
    env.events().publish(
        (symbol_short!("staked"),),
        Staked { staker, amount, balance },
    );
}

pub fn emit_executed(env: &Env, caller: Address, total: i128, forwarded: bool) {
    env.events().publish(
        (symbol_short!("executed"),),
        Executed { caller, total, forwarded },
    );
}

pub fn emit_withdrawn(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"),),
        Withdrawn { staker, amount },
    );
}
