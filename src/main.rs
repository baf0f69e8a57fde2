use anyhow::Result;
use goose::prelude::*;

mod config;
mod report;
mod scenarios;

use config::profiles;
use config::ScenarioConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let verbose = std::env::var_os("DEPOY_LOADTEST_VERBOSE").is_some();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Scenario shape comes from the environment; goose owns the CLI
    // (host, user count, hatch rate, run time and friends).
    let config = ScenarioConfig::from_env()?;
    let profile = profiles::get_load_profile(&config.profile);

    tracing::info!("depoy Gateway Load Test Starting...");
    tracing::info!("Path: {}", config.path);
    tracing::info!(
        "Wait Time: {:?} - {:?} per iteration",
        config.wait_min,
        config.wait_max
    );
    tracing::info!(
        "Profile: {} ({} users, {}/sec hatch rate, {}s run time)",
        profile.name,
        profile.users,
        profile.hatch_rate,
        profile.run_time
    );
    tracing::warn!(
        "NOTE: Ensure the gateway is reachable at {} (override with --host)",
        profile.host
    );

    let attack = GooseAttack::initialize()?
        .register_scenario(scenarios::website::scenario(&config)?);
    let attack = profile.apply(attack)?;

    let metrics = attack.execute().await?;

    report::print_final_report(&metrics);

    tracing::info!("Load test complete");

    Ok(())
}
