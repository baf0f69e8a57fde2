//! Named load profiles mapped onto goose defaults.
//!
//! A profile only supplies defaults: goose's own command line flags
//! (`--host`, `-u`, `-r`, `-t`, ...) still win at launch time.

use goose::prelude::*;

pub const DEFAULT_PROFILE: &str = "baseline";

/// The depoy gateway's default listen address.
const DEFAULT_HOST: &str = "http://localhost:8080";

/// A bundle of goose defaults selected by name.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProfile {
    pub name: &'static str,
    pub host: &'static str,
    pub users: usize,
    pub hatch_rate: &'static str,
    pub run_time: usize,
    pub co_mitigation: bool,
}

impl LoadProfile {
    /// Apply the profile to a goose attack as overridable defaults. The
    /// built-in metrics printout is suppressed in favor of our own report.
    pub fn apply(&self, attack: GooseAttack) -> Result<GooseAttack, GooseError> {
        let attack = attack
            .set_default(GooseDefault::Host, self.host)?
            .set_default(GooseDefault::Users, self.users)?
            .set_default(GooseDefault::HatchRate, self.hatch_rate)?
            .set_default(GooseDefault::RunTime, self.run_time)?
            .set_default(GooseDefault::NoPrintMetrics, true)?;

        let attack = if self.co_mitigation {
            attack.set_default(
                GooseDefault::CoordinatedOmissionMitigation,
                GooseCoordinatedOmissionMitigation::Average,
            )?
        } else {
            attack
        };

        Ok(*attack)
    }
}

/// Get a load profile by name
pub fn get_load_profile(profile: &str) -> LoadProfile {
    match profile {
        "dev" => development_profile(),
        "baseline" => baseline_profile(),
        "stress" => stress_profile(),
        _ => {
            tracing::warn!(
                "Unknown profile '{}', using '{}' profile",
                profile,
                DEFAULT_PROFILE
            );
            baseline_profile()
        }
    }
}

/// Development profile for testing and debugging
///
/// A single simulated user for 30 seconds.
pub fn development_profile() -> LoadProfile {
    LoadProfile {
        name: "dev",
        host: DEFAULT_HOST,
        users: 1,
        hatch_rate: "1",
        run_time: 30,
        co_mitigation: false,
    }
}

/// Baseline profile for everyday load tests
///
/// 10 simulated users hatched at 2/sec for one minute.
pub fn baseline_profile() -> LoadProfile {
    LoadProfile {
        name: "baseline",
        host: DEFAULT_HOST,
        users: 10,
        hatch_rate: "2",
        run_time: 60,
        co_mitigation: false,
    }
}

/// Stress profile for sustained high load
///
/// 100 simulated users hatched at 10/sec for five minutes, with
/// coordinated omission mitigation enabled.
pub fn stress_profile() -> LoadProfile {
    LoadProfile {
        name: "stress",
        host: DEFAULT_HOST,
        users: 100,
        hatch_rate: "10",
        run_time: 300,
        co_mitigation: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_by_name() {
        assert_eq!(get_load_profile("dev"), development_profile());
        assert_eq!(get_load_profile("baseline"), baseline_profile());
        assert_eq!(get_load_profile("stress"), stress_profile());
    }

    #[test]
    fn test_unknown_profile_falls_back_to_baseline() {
        assert_eq!(get_load_profile("warp-speed"), baseline_profile());
    }

    #[test]
    fn test_default_profile_resolves() {
        assert_eq!(get_load_profile(DEFAULT_PROFILE).name, DEFAULT_PROFILE);
    }

    #[test]
    fn test_every_profile_targets_the_gateway() {
        for profile in [development_profile(), baseline_profile(), stress_profile()] {
            assert_eq!(profile.host, "http://localhost:8080");
            assert!(profile.users >= 1);
            assert!(profile.run_time > 0);
        }
    }
}
