//! Resolved image records and pull policies

use common::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container runtime instruction for when to fetch an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PullPolicy {
    #[default]
    Always,
    IfNotPresent,
    Never,
}

impl PullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullPolicy::Always => "Always",
            PullPolicy::IfNotPresent => "IfNotPresent",
            PullPolicy::Never => "Never",
        }
    }
}

impl fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullPolicy {
    type Err = ConfigurationError;

    /// Exact, case-sensitive match on the container-spec spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Always" => Ok(PullPolicy::Always),
            "IfNotPresent" => Ok(PullPolicy::IfNotPresent),
            "Never" => Ok(PullPolicy::Never),
            other => Err(ConfigurationError::invalid_value(
                "pull_policy",
                other,
                "expected one of Always, IfNotPresent, Never",
            )),
        }
    }
}

/// Image reference and pull policy for one component
///
/// The pull policy is carried as the raw string that was resolved; use
/// [`ImageDetails::parsed_pull_policy`] to check it against the known values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    pub name: String,
    pub pull_policy: String,
}

impl ImageDetails {
    pub fn new(name: impl Into<String>, pull_policy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pull_policy: pull_policy.into(),
        }
    }

    pub fn parsed_pull_policy(&self) -> Result<PullPolicy, ConfigurationError> {
        self.pull_policy.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_always() {
        assert_eq!(PullPolicy::default(), PullPolicy::Always);
        assert_eq!(PullPolicy::default().to_string(), "Always");
    }

    #[test]
    fn test_parse_known_policies() {
        assert_eq!("Always".parse::<PullPolicy>().unwrap(), PullPolicy::Always);
        assert_eq!(
            "IfNotPresent".parse::<PullPolicy>().unwrap(),
            PullPolicy::IfNotPresent
        );
        assert_eq!("Never".parse::<PullPolicy>().unwrap(), PullPolicy::Never);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("always".parse::<PullPolicy>().is_err());
        assert!("".parse::<PullPolicy>().is_err());
    }

    #[test]
    fn test_details_keep_unknown_policy_verbatim() {
        let details = ImageDetails::new("quay.io/skupper/skupper-router:main", "Sometimes");

        assert_eq!(details.pull_policy, "Sometimes");
        match details.parsed_pull_policy().unwrap_err() {
            ConfigurationError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "pull_policy");
                assert_eq!(value, "Sometimes");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_details_wire_shape() {
        let details = ImageDetails::new("registry/router:1", "IfNotPresent");
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "registry/router:1", "pullPolicy": "IfNotPresent"})
        );
    }
}
