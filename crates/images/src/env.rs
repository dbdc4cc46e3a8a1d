//! Environment lookup providers and environment variable records
//!
//! The resolver never touches `std::env` directly. It reads through an
//! [`EnvSource`], so callers can hand it the real process environment, a
//! captured snapshot, or a fixed map in tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::component::OVERRIDE_TABLE;
use crate::constants::IMAGE_REGISTRY_ENV_KEY;

/// Read-only key lookup over some environment
pub trait EnvSource {
    /// Raw value for `key`, or `None` when unset
    fn lookup(&self, key: &str) -> Option<String>;

    /// Value for `key`, treating an empty string as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.lookup(key).filter(|value| !value.is_empty())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The live process environment
///
/// Values that are not valid UTF-8 are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An owned, immutable set of environment values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Snapshot the process values of every key the resolver consults
    pub fn from_process() -> Self {
        let keys = OVERRIDE_TABLE
            .iter()
            .flat_map(|row| [row.image_env_key, row.pull_policy_env_key])
            .chain(std::iter::once(IMAGE_REGISTRY_ENV_KEY));

        keys.filter_map(|key| ProcessEnv.lookup(key).map(|value| (key, value)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// A single environment variable for a spawned workload's container spec
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
