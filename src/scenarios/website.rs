//! Website user scenario - one GET against the gateway per iteration
//!
//! Each simulated user repeatedly issues a single HTTP GET to the
//! configured path, then thinks for a uniform random delay drawn from the
//! configured wait-time bounds. Success and failure accounting is goose's:
//! any non-2xx response is recorded as a failure.

use std::sync::Arc;

use goose::goose::TransactionFunction;
use goose::prelude::*;

use crate::config::ScenarioConfig;

/// Build the `WebsiteUser` scenario from its configuration.
///
/// Pure declaration: no request is issued until goose drives the scenario.
pub fn scenario(config: &ScenarioConfig) -> Result<Scenario, GooseError> {
    let scenario = scenario!("WebsiteUser")
        .set_wait_time(config.wait_min, config.wait_max)?
        .set_weight(config.weight)?
        .register_transaction(index_transaction(&config.path));

    Ok(scenario)
}

/// The single transaction each iteration runs: GET the configured path.
///
/// The path is only known at startup, so this is a goose closure
/// transaction rather than a plain `transaction!` function.
fn index_transaction(path: &str) -> Transaction {
    let path = path.to_owned();
    let index: TransactionFunction = Arc::new(move |user| {
        let path = path.clone();
        Box::pin(async move {
            let _goose_metrics = user.get(&path).await?;

            Ok(())
        })
    });

    Transaction::new(index).set_name("index")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_scenario_shape() {
        let scenario = scenario(&ScenarioConfig::default()).unwrap();

        assert_eq!(scenario.name, "WebsiteUser");
        assert_eq!(scenario.transactions.len(), 1);
        assert_eq!(scenario.transactions[0].name, "index");
        assert_eq!(scenario.weight, 1);
    }

    #[test]
    fn test_default_wait_time_is_one_to_two_seconds() {
        let scenario = scenario(&ScenarioConfig::default()).unwrap();

        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_secs(1), Duration::from_secs(2)))
        );
    }

    #[test]
    fn test_configured_bounds_and_weight_are_applied() {
        let config = ScenarioConfig {
            wait_min: Duration::from_millis(500),
            wait_max: Duration::from_secs(3),
            weight: 4,
            ..ScenarioConfig::default()
        };

        let scenario = scenario(&config).unwrap();

        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_millis(500), Duration::from_secs(3)))
        );
        assert_eq!(scenario.weight, 4);
    }
}
