//! Environment keys and compiled-in image defaults
//!
//! The environment variable names are the contract with the deployment
//! environment and must not change.

/// Router image override
pub const ROUTER_IMAGE_ENV_KEY: &str = "QDROUTERD_IMAGE";
/// Service controller image override
pub const SERVICE_CONTROLLER_IMAGE_ENV_KEY: &str = "SKUPPER_SERVICE_CONTROLLER_IMAGE";
/// Config sync image override
pub const CONFIG_SYNC_IMAGE_ENV_KEY: &str = "SKUPPER_CONFIG_SYNC_IMAGE";
/// Flow collector image override
pub const FLOW_COLLECTOR_IMAGE_ENV_KEY: &str = "SKUPPER_FLOW_COLLECTOR_IMAGE";

/// Router pull policy override
pub const ROUTER_PULL_POLICY_ENV_KEY: &str = "QDROUTERD_IMAGE_PULL_POLICY";
/// Service controller pull policy override
pub const SERVICE_CONTROLLER_PULL_POLICY_ENV_KEY: &str =
    "SKUPPER_SERVICE_CONTROLLER_IMAGE_PULL_POLICY";
/// Config sync pull policy override
pub const CONFIG_SYNC_PULL_POLICY_ENV_KEY: &str = "SKUPPER_CONFIG_SYNC_IMAGE_PULL_POLICY";
/// Flow collector pull policy override
pub const FLOW_COLLECTOR_PULL_POLICY_ENV_KEY: &str = "SKUPPER_FLOW_COLLECTOR_IMAGE_PULL_POLICY";

/// Registry prefix override shared by every component
pub const IMAGE_REGISTRY_ENV_KEY: &str = "SKUPPER_IMAGE_REGISTRY";

/// Registry used when `SKUPPER_IMAGE_REGISTRY` is unset or empty
pub const DEFAULT_IMAGE_REGISTRY: &str = "quay.io/skupper";

/// Router image name under the registry
pub const ROUTER_IMAGE_NAME: &str = "skupper-router:main";
/// Service controller image name under the registry
pub const SERVICE_CONTROLLER_IMAGE_NAME: &str = "service-controller:main";
/// Config sync image name under the registry
pub const CONFIG_SYNC_IMAGE_NAME: &str = "config-sync:main";
/// Flow collector image name under the registry
pub const FLOW_COLLECTOR_IMAGE_NAME: &str = "flow-collector:main";
