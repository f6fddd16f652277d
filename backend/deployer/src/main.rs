//! Staker deployer entry point.
//!
//! Deploys the token, target and staker into a sandbox ledger whose clock is
//! set to the current wall-clock time, then prints the deployment record as
//! JSON (or writes it to `DEPLOYMENT_FILE`).

use tracing::info;
use tracing_subscriber::EnvFilter;

use deployer::config::Config;
use deployer::deploy;

fn main() -> anyhow::Result<()> {
    // Load optional .env file (ignored if missing) before anything reads the environment.
    let _ = dotenvy::dotenv();

    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let now = u64::try_from(chrono::Utc::now().timestamp())?;

    let (_env, deployment) = deploy::deploy_sandbox(&config, now)?;

    match &config.deployment_file {
        Some(path) => {
            deployment.write_to(path)?;
            info!("Deployment record written to {}", path.display());
        }
        None => println!("{}", deployment.to_json()?),
    }

    Ok(())
}
