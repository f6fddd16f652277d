//! Staker deployer.
//!
//! Host-side collaborator of the staking escrow: it reads the campaign
//! configuration, resolves the deadline, deploys the escrow against its
//! beneficiary target and makes sure the escrow holds the target's staking
//! role before reporting the deployment as done.

pub mod amount;
pub mod config;
pub mod deadline;
pub mod deploy;
pub mod errors;
