//! System components and their static override table

use common::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::*;

/// A system component whose image is resolved from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    Router,
    ServiceController,
    ConfigSync,
    FlowCollector,
}

/// Environment keys and default image name for one component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOverrideKeys {
    pub component: Component,
    /// Variable holding a full image reference override
    pub image_env_key: &'static str,
    /// Variable holding a pull policy override
    pub pull_policy_env_key: &'static str,
    /// Image name appended to the registry when no override is set
    pub default_image_name: &'static str,
}

/// The override table, in `Component::ALL` order
pub static OVERRIDE_TABLE: [ImageOverrideKeys; 4] = [
    ImageOverrideKeys {
        component: Component::Router,
        image_env_key: ROUTER_IMAGE_ENV_KEY,
        pull_policy_env_key: ROUTER_PULL_POLICY_ENV_KEY,
        default_image_name: ROUTER_IMAGE_NAME,
    },
    ImageOverrideKeys {
        component: Component::ServiceController,
        image_env_key: SERVICE_CONTROLLER_IMAGE_ENV_KEY,
        pull_policy_env_key: SERVICE_CONTROLLER_PULL_POLICY_ENV_KEY,
        default_image_name: SERVICE_CONTROLLER_IMAGE_NAME,
    },
    ImageOverrideKeys {
        component: Component::ConfigSync,
        image_env_key: CONFIG_SYNC_IMAGE_ENV_KEY,
        pull_policy_env_key: CONFIG_SYNC_PULL_POLICY_ENV_KEY,
        default_image_name: CONFIG_SYNC_IMAGE_NAME,
    },
    ImageOverrideKeys {
        component: Component::FlowCollector,
        image_env_key: FLOW_COLLECTOR_IMAGE_ENV_KEY,
        pull_policy_env_key: FLOW_COLLECTOR_PULL_POLICY_ENV_KEY,
        default_image_name: FLOW_COLLECTOR_IMAGE_NAME,
    },
];

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Router,
        Component::ServiceController,
        Component::ConfigSync,
        Component::FlowCollector,
    ];

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Router => "router",
            Component::ServiceController => "service-controller",
            Component::ConfigSync => "config-sync",
            Component::FlowCollector => "flow-collector",
        }
    }

    /// This component's row of the override table
    pub fn overrides(&self) -> &'static ImageOverrideKeys {
        let index = match self {
            Component::Router => 0,
            Component::ServiceController => 1,
            Component::ConfigSync => 2,
            Component::FlowCollector => 3,
        };
        &OVERRIDE_TABLE[index]
    }

    pub fn image_env_key(&self) -> &'static str {
        self.overrides().image_env_key
    }

    pub fn pull_policy_env_key(&self) -> &'static str {
        self.overrides().pull_policy_env_key
    }

    pub fn default_image_name(&self) -> &'static str {
        self.overrides().default_image_name
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|component| component.as_str() == s)
            .ok_or_else(|| {
                ConfigurationError::invalid_value(
                    "component",
                    s,
                    "expected one of router, service-controller, config-sync, flow-collector",
                )
            })
    }
}
