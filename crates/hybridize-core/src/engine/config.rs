use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What to do when atom `i` lists atom `j` as a partner but `j` does not list `i`.
///
/// The emitted bonds are the same under every policy: an asymmetric declaration whose
/// lower-indexed endpoint does not list the other endpoint is dropped. The policy only
/// decides whether that is silent, logged, or fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsymmetryPolicy {
    Ignore,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid asymmetric bond policy '{0}' (expected 'ignore', 'warn' or 'error')")]
pub struct ParseAsymmetryPolicyError(String);

impl FromStr for AsymmetryPolicy {
    type Err = ParseAsymmetryPolicyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseAsymmetryPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for AsymmetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportConfig {
    pub asymmetric_bonds: AsymmetryPolicy,
    /// Reject inputs with fewer `CONECT` records than atoms instead of treating the
    /// unmatched atoms as unbonded.
    pub require_complete_connectivity: bool,
}

#[derive(Default)]
pub struct ImportConfigBuilder {
    asymmetric_bonds: Option<AsymmetryPolicy>,
    require_complete_connectivity: Option<bool>,
}

impl ImportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asymmetric_bonds(mut self, policy: AsymmetryPolicy) -> Self {
        self.asymmetric_bonds = Some(policy);
        self
    }
    pub fn require_complete_connectivity(mut self, require: bool) -> Self {
        self.require_complete_connectivity = Some(require);
        self
    }

    pub fn build(self) -> ImportConfig {
        ImportConfig {
            asymmetric_bonds: self.asymmetric_bonds.unwrap_or_default(),
            require_complete_connectivity: self.require_complete_connectivity.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_warn_and_lenient_connectivity() {
        let config = ImportConfigBuilder::new().build();
        assert_eq!(config.asymmetric_bonds, AsymmetryPolicy::Warn);
        assert!(!config.require_complete_connectivity);
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ImportConfigBuilder::new()
            .asymmetric_bonds(AsymmetryPolicy::Error)
            .require_complete_connectivity(true)
            .build();
        assert_eq!(config.asymmetric_bonds, AsymmetryPolicy::Error);
        assert!(config.require_complete_connectivity);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("IGNORE".parse(), Ok(AsymmetryPolicy::Ignore));
        assert_eq!("warn".parse(), Ok(AsymmetryPolicy::Warn));
        assert_eq!("Error".parse(), Ok(AsymmetryPolicy::Error));
        assert_eq!(
            "drop".parse::<AsymmetryPolicy>(),
            Err(ParseAsymmetryPolicyError("drop".into()))
        );
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in [
            AsymmetryPolicy::Ignore,
            AsymmetryPolicy::Warn,
            AsymmetryPolicy::Error,
        ] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }
}
