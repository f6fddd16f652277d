//! # Staker Contract
//!
//! Deadline-gated crowdfunding escrow. Participants stake tokens before the
//! deadline. Once the deadline passes anyone may call `execute`:
//!
//! - pool total `>= threshold`: the whole pool is forwarded to the
//!   beneficiary target and the campaign is complete;
//! - pool total `< threshold`: no funds move and every participant may
//!   `withdraw` exactly what they staked.
//!
//! | Phase        | Entry Point(s)                                         |
//! |--------------|--------------------------------------------------------|
//! | Bootstrap    | `__constructor`                                        |
//! | Funding      | [`Staker::stake`]                                      |
//! | Finalization | [`Staker::execute`]                                    |
//! | Refunds      | [`Staker::withdraw`]                                   |
//! | Queries      | `beneficiary`, `token`, `threshold`, `deadline`, `time_left`, `balance_of`, `total_staked`, `executed`, `withdraw_enabled`, `status`, `config`, `beneficiary_completed` |
//!
//! The beneficiary must have granted this contract its staking role before
//! a successful `execute`; without it `execute` fails with
//! [`Error::TransferRejected`] and the campaign stays executable.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env};

mod beneficiary;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use beneficiary::{Beneficiary, BeneficiaryClient};
pub use events::{Executed, Staked, Withdrawn};
pub use types::{CampaignConfig, CampaignStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    DeadlinePassed   = 1,
    TooEarly         = 2,
    AlreadyExecuted  = 3,
    /// Withdraw is disabled until `execute` runs and the threshold was not met.
    WithdrawDisabled = 4,
    TransferRejected = 5,
    InvalidAmount    = 6,
    Overflow         = 7,
}

#[contract]
pub struct Staker;

#[contractimpl]
impl Staker {
    /// Create the campaign. All four parameters are fixed for the lifetime
    /// of the contract; the deployer is responsible for choosing a deadline
    /// far enough in the future and a positive threshold.
    pub fn __constructor(env: Env, beneficiary: Address, token: Address, threshold: i128, deadline: u64) {
        storage::save_config(
            &env,
            &CampaignConfig {
                beneficiary,
                token,
                threshold,
                deadline,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────

    /// Lock `amount` tokens from `staker` into the pool.
    ///
    /// Returns the staker's balance after the stake.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<i128, Error> {
        staker.require_auth();

        let config = storage::load_config(&env);
        if env.ledger().timestamp() >= config.deadline {
            return Err(Error::DeadlinePassed);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance = storage::balance_of(&env, &staker)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let total = storage::total_staked(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        token::Client::new(&env, &config.token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        storage::set_balance(&env, &staker, balance);
        storage::set_total_staked(&env, total);

        events::emit_staked(&env, staker, amount, balance);
        Ok(balance)
    }

    /// Finalize the campaign. Callable by anyone once the deadline passed,
    /// and succeeds at most once.
    ///
    /// Returns `true` if the pool was forwarded to the beneficiary, `false`
    /// if the threshold was missed and withdrawals are now open.
    pub fn execute(env: Env, caller: Address) -> Result<bool, Error> {
        caller.require_auth();

        let config = storage::load_config(&env);
        if env.ledger().timestamp() < config.deadline {
            return Err(Error::TooEarly);
        }
        if storage::is_executed(&env) {
            return Err(Error::AlreadyExecuted);
        }

        // Marker is committed before any outgoing call and restored if the
        // beneficiary rejects the pool.
        storage::set_executed(&env, true);

        // An empty pool never forwards, even against a non-positive threshold.
        let total = storage::total_staked(&env);
        let forwarded = total > 0 && total >= config.threshold;

        if forwarded {
            if let Err(err) = forward_pool(&env, &config, total) {
                storage::set_executed(&env, false);
                return Err(err);
            }
            storage::set_total_staked(&env, 0);
        } else {
            storage::enable_withdraw(&env);
        }

        events::emit_executed(&env, caller, total, forwarded);
        Ok(forwarded)
    }

    /// Refund the caller's whole stake after a campaign that missed its
    /// threshold.
    ///
    /// A caller with nothing staked (or already refunded) gets `0` back and
    /// no transfer is made.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, Error> {
        staker.require_auth();

        if !storage::is_withdraw_enabled(&env) {
            return Err(Error::WithdrawDisabled);
        }

        let amount = storage::balance_of(&env, &staker);
        if amount == 0 {
            return Ok(0);
        }

        // Ledger is settled before the tokens leave.
        storage::set_balance(&env, &staker, 0);
        let total = storage::total_staked(&env)
            .checked_sub(amount)
            .ok_or(Error::Overflow)?;
        storage::set_total_staked(&env, total);

        let config = storage::load_config(&env);
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::emit_withdrawn(&env, staker, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn config(env: Env) -> CampaignConfig {
        storage::load_config(&env)
    }

    pub fn beneficiary(env: Env) -> Address {
        storage::load_config(&env).beneficiary
    }

    pub fn token(env: Env) -> Address {
        storage::load_config(&env).token
    }

    pub fn threshold(env: Env) -> i128 {
        storage::load_config(&env).threshold
    }

    pub fn deadline(env: Env) -> u64 {
        storage::load_config(&env).deadline
    }

    /// Seconds until the deadline, `0` once it has passed.
    pub fn time_left(env: Env) -> u64 {
        storage::load_config(&env)
            .deadline
            .saturating_sub(env.ledger().timestamp())
    }

    /// Amount currently staked by `staker`.
    ///
    /// After a successful execution the entries are kept as a record of each
    /// contribution even though the pool itself has been forwarded.
    pub fn balance_of(env: Env, staker: Address) -> i128 {
        storage::balance_of(&env, &staker)
    }

    pub fn total_staked(env: Env) -> i128 {
        storage::total_staked(&env)
    }

    pub fn executed(env: Env) -> bool {
        storage::is_executed(&env)
    }

    pub fn withdraw_enabled(env: Env) -> bool {
        storage::is_withdraw_enabled(&env)
    }

    pub fn status(env: Env) -> CampaignStatus {
        let config = storage::load_config(&env);
        if env.ledger().timestamp() < config.deadline {
            CampaignStatus::Open
        } else if !storage::is_executed(&env) {
            CampaignStatus::AwaitingExecution
        } else if storage::is_withdraw_enabled(&env) {
            CampaignStatus::OpenForWithdrawal
        } else {
            CampaignStatus::Completed
        }
    }

    /// Whether the beneficiary reports completion.
    pub fn beneficiary_completed(env: Env) -> bool {
        let config = storage::load_config(&env);
        BeneficiaryClient::new(&env, &config.beneficiary).completed()
    }
}

/// Move the whole pool to the beneficiary and notify it.
///
/// Both calls go through `try_*` so a rejecting token or target surfaces as
/// [`Error::TransferRejected`]; the host discards the partial transfer when
/// `execute` returns the error.
fn forward_pool(env: &Env, config: &CampaignConfig, total: i128) -> Result<(), Error> {
    let escrow = env.current_contract_address();

    match token::Client::new(env, &config.token).try_transfer(&escrow, &config.beneficiary, &total) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferRejected),
    }

    match BeneficiaryClient::new(env, &config.beneficiary).try_complete(&escrow, &total) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferRejected),
    }
}
