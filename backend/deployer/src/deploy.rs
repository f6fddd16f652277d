//! Escrow deployment and role wiring.
//!
//! Deployment is complete only once the target reports that the new escrow
//! holds [`Role::Staking`]; before that the escrow cannot forward a pool.

use std::path::Path;

use chrono::DateTime;
use serde::Serialize;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};
use staker::Staker;
use target_contract::{Role, TargetContract, TargetContractClient};
use tracing::{info, warn};

use crate::amount::{format_units, TOKEN_DECIMALS};
use crate::config::Config;
use crate::deadline::{resolve_deadline, DeadlineSource, ResolvedDeadline};
use crate::errors::{DeployError, Result};

/// Capability the deployer needs from the beneficiary target.
pub trait RoleRegistry {
    fn has_staking_role(&self, account: &Address) -> bool;

    /// Ask the target to grant the staking role. Returns once the grant is
    /// committed.
    fn grant_staking_role(&self, admin: &Address, account: &Address) -> Result<()>;
}

impl RoleRegistry for TargetContractClient<'_> {
    fn has_staking_role(&self, account: &Address) -> bool {
        self.has_role(account, &Role::Staking)
    }

    fn grant_staking_role(&self, admin: &Address, account: &Address) -> Result<()> {
        match self.try_grant_role(admin, account, &Role::Staking) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(DeployError::RoleGrant(format!("{e:?}"))),
            Err(Ok(e)) => Err(DeployError::RoleGrant(format!("target rejected grant: {e:?}"))),
            Err(Err(e)) => Err(DeployError::RoleGrant(format!("invocation failed: {e:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGrant {
    AlreadyHeld,
    Granted,
}

/// Make sure `staker` holds the staking role, granting it if needed.
///
/// After a grant the role is queried again; a grant that is not visible on
/// the target is an error.
pub fn ensure_staking_role<R>(registry: &R, admin: &Address, staker: &Address) -> Result<RoleGrant>
where
    R: RoleRegistry + ?Sized,
{
    if registry.has_staking_role(staker) {
        info!("Staker contract already holds the staking role");
        return Ok(RoleGrant::AlreadyHeld);
    }

    info!("Granting staking role to staker contract");
    registry.grant_staking_role(admin, staker)?;

    if !registry.has_staking_role(staker) {
        return Err(DeployError::RoleGrant(
            "grant was accepted but the role is not held".to_string(),
        ));
    }
    info!("Granted staking role to staker contract");
    Ok(RoleGrant::Granted)
}

/// Record of a finished deployment, written out as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    pub staker: String,
    pub target: String,
    pub token: String,
    /// Threshold as a decimal token amount.
    pub threshold: String,
    pub threshold_units: i128,
    pub deadline: u64,
    pub deadline_utc: Option<String>,
    pub deadline_source: DeadlineSource,
    pub role: RoleGrant,
}

impl Deployment {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Deploy a staker for `target` and wire its staking role.
pub fn deploy_staker(
    env: &Env,
    admin: &Address,
    target: &TargetContractClient,
    token: &Address,
    threshold: i128,
    deadline: ResolvedDeadline,
) -> Result<(Address, Deployment)> {
    let staker_id = env.register(
        Staker,
        (target.address.clone(), token.clone(), threshold, deadline.timestamp),
    );
    info!(
        staker = %address_text(&staker_id),
        threshold = %format_units(threshold, TOKEN_DECIMALS),
        deadline = deadline.timestamp,
        "Deployed Staker"
    );

    let role = ensure_staking_role(target, admin, &staker_id)?;

    let deployment = Deployment {
        staker: address_text(&staker_id),
        target: address_text(&target.address),
        token: address_text(token),
        threshold: format_units(threshold, TOKEN_DECIMALS),
        threshold_units: threshold,
        deadline: deadline.timestamp,
        deadline_utc: i64::try_from(deadline.timestamp)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.to_rfc3339()),
        deadline_source: deadline.source,
        role,
    };
    Ok((staker_id, deployment))
}

/// Deploy the whole system into a fresh sandbox ledger whose clock reads
/// `now`: a stellar asset token, the target and the staker.
pub fn deploy_sandbox(config: &Config, now: u64) -> Result<(Env, Deployment)> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(now);

    let deployer = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(deployer.clone())
        .address();
    let target_id = env.register(TargetContract, (deployer.clone(),));
    let target = TargetContractClient::new(&env, &target_id);
    info!(target = %address_text(&target_id), "Deployed TargetContract");

    let deadline = resolve_deadline(env.ledger().timestamp(), config.date, config.seconds_from_now);
    if deadline.source == DeadlineSource::Default {
        warn!("Defaulting to contract deadline of 1 week from now");
    }

    let (_, deployment) = deploy_staker(&env, &deployer, &target, &token, config.threshold, deadline)?;
    Ok((env, deployment))
}

/// Strkey of an address, copied out of the host string.
fn address_text(address: &Address) -> String {
    let strkey = address.to_string();
    let mut bytes = vec![0u8; strkey.len() as usize];
    strkey.copy_into_slice(&mut bytes);
    String::from_utf8_lossy(&bytes).into_owned()
}
