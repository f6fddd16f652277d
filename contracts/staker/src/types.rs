//! # Types
//!
//! Shared data structures of the staking escrow.
//!
//! ### Campaign lifecycle
//!
//! [`CampaignStatus`] is derived on every read from the deadline, the
//! executed marker and the withdrawal flag; it is never stored.
//!
//! ```text
//! Open ──► AwaitingExecution ──► Completed
//!                    └─────────► OpenForWithdrawal
//! ```
//!
//! `Completed` is terminal. `OpenForWithdrawal` stays open indefinitely so
//! every participant can reclaim their stake.

use soroban_sdk::{contracttype, Address};

/// Lifecycle status of the campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Before the deadline; accepting stakes.
    Open,
    /// Deadline passed; waiting for someone to call `execute`.
    AwaitingExecution,
    /// Threshold met; pool forwarded to the beneficiary.
    Completed,
    /// Threshold missed; participants may withdraw.
    OpenForWithdrawal,
}

/// Campaign parameters, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Target contract that receives the pool on success.
    pub beneficiary: Address,
    /// Token in which stakes are made and refunded.
    pub token: Address,
    /// Minimum pool total for the campaign to succeed.
    pub threshold: i128,
    /// Ledger timestamp at which staking stops and execution opens.
    pub deadline: u64,
}
