//! Fallback registry and image names
//!
//! `ImageDefaults::default()` holds the compiled-in constants. Operators may
//! pin different fallbacks in a TOML file:
//!
//! ```toml
//! registry = "registry.internal/skupper"
//! router = "skupper-router:2.5.0"
//! ```
//!
//! Fields left out of the file keep their compiled values. Environment
//! overrides are not read here; the resolver applies them on every call.

use common::config::{loader, ConfigLoader, LoadOptions};
use common::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::component::Component;
use crate::constants::*;

/// Fallback values used when no environment override applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    /// Registry prefix joined with each default image name
    pub registry: String,

    pub router: String,
    pub service_controller: String,
    pub config_sync: String,
    pub flow_collector: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            registry: DEFAULT_IMAGE_REGISTRY.to_string(),
            router: ROUTER_IMAGE_NAME.to_string(),
            service_controller: SERVICE_CONTROLLER_IMAGE_NAME.to_string(),
            config_sync: CONFIG_SYNC_IMAGE_NAME.to_string(),
            flow_collector: FLOW_COLLECTOR_IMAGE_NAME.to_string(),
        }
    }
}

impl ImageDefaults {
    /// Default image name (without registry) for `component`
    pub fn image_name(&self, component: Component) -> &str {
        match component {
            Component::Router => &self.router,
            Component::ServiceController => &self.service_controller,
            Component::ConfigSync => &self.config_sync,
            Component::FlowCollector => &self.flow_collector,
        }
    }

    /// Reject values that would produce an unusable image reference
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_field("registry", &self.registry)?;
        for component in Component::ALL {
            check_field(component.as_str(), self.image_name(component))?;
        }
        Ok(())
    }
}

fn check_field(key: &str, value: &str) -> Result<(), ConfigurationError> {
    if value.is_empty() {
        return Err(ConfigurationError::missing_required(key));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigurationError::validation_failed(format!(
            "{key} must not contain whitespace: {value:?}"
        )));
    }
    Ok(())
}

impl ConfigLoader<ImageDefaults> for ImageDefaults {
    fn load(path_override: Option<PathBuf>) -> Result<ImageDefaults, ConfigurationError> {
        let defaults: ImageDefaults = loader::load_config_with_options(LoadOptions {
            config_path: path_override,
            env_prefix: None,
            require_file: false,
        })?;
        defaults.validate()?;
        debug!(?defaults, "Image defaults loaded");
        Ok(defaults)
    }

    fn load_from_file(path: &Path) -> Result<ImageDefaults, ConfigurationError> {
        let defaults: ImageDefaults = loader::load_from_file(path)?;
        defaults.validate()?;
        debug!(?defaults, path = %path.display(), "Image defaults loaded from file");
        Ok(defaults)
    }
}
