//! Image configuration resolver
//!
//! Every lookup follows the same rule: a non-empty environment override wins,
//! anything else falls back to the defaults. Resolution cannot fail and
//! performs no validation; consumers decide whether a value is acceptable.

use tracing::debug;

use crate::component::Component;
use crate::constants::{IMAGE_REGISTRY_ENV_KEY, ROUTER_IMAGE_ENV_KEY, ROUTER_PULL_POLICY_ENV_KEY};
use crate::defaults::ImageDefaults;
use crate::env::{EnvSource, EnvVar, ProcessEnv};
use crate::types::{ImageDetails, PullPolicy};

/// Resolves component images and pull policies against an environment
#[derive(Debug, Clone, Default)]
pub struct ImageResolver<E = ProcessEnv> {
    env: E,
    defaults: ImageDefaults,
}

impl<E: EnvSource> ImageResolver<E> {
    /// Resolver using the compiled-in defaults
    pub fn new(env: E) -> Self {
        Self::with_defaults(env, ImageDefaults::default())
    }

    pub fn with_defaults(env: E, defaults: ImageDefaults) -> Self {
        Self { env, defaults }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn defaults(&self) -> &ImageDefaults {
        &self.defaults
    }

    /// `SKUPPER_IMAGE_REGISTRY`, or the default registry
    pub fn image_registry(&self) -> String {
        match self.env.non_empty(IMAGE_REGISTRY_ENV_KEY) {
            Some(registry) => {
                debug!(env_key = IMAGE_REGISTRY_ENV_KEY, %registry, "Using image registry override");
                registry
            }
            None => self.defaults.registry.clone(),
        }
    }

    /// Full image reference for `component`
    ///
    /// An override is returned verbatim, registry included. Otherwise the
    /// resolved registry and default image name are joined with `/`.
    pub fn image_name(&self, component: Component) -> String {
        let env_key = component.image_env_key();
        match self.env.non_empty(env_key) {
            Some(image) => {
                debug!(%component, env_key, %image, "Using image override");
                image
            }
            None => {
                let image = format!(
                    "{}/{}",
                    self.image_registry(),
                    self.defaults.image_name(component)
                );
                debug!(%component, %image, "Using default image");
                image
            }
        }
    }

    /// Pull policy for `component`, `Always` unless overridden
    pub fn image_pull_policy(&self, component: Component) -> String {
        let env_key = component.pull_policy_env_key();
        match self.env.non_empty(env_key) {
            Some(policy) => {
                debug!(%component, env_key, %policy, "Using pull policy override");
                policy
            }
            None => PullPolicy::Always.as_str().to_string(),
        }
    }

    pub fn image_details(&self, component: Component) -> ImageDetails {
        ImageDetails {
            name: self.image_name(component),
            pull_policy: self.image_pull_policy(component),
        }
    }

    /// Details for every component, in `Component::ALL` order
    pub fn all_image_details(&self) -> Vec<(Component, ImageDetails)> {
        Component::ALL
            .into_iter()
            .map(|component| (component, self.image_details(component)))
            .collect()
    }

    pub fn router_image_name(&self) -> String {
        self.image_name(Component::Router)
    }

    pub fn router_image_pull_policy(&self) -> String {
        self.image_pull_policy(Component::Router)
    }

    pub fn router_image_details(&self) -> ImageDetails {
        self.image_details(Component::Router)
    }

    pub fn service_controller_image_name(&self) -> String {
        self.image_name(Component::ServiceController)
    }

    pub fn service_controller_image_pull_policy(&self) -> String {
        self.image_pull_policy(Component::ServiceController)
    }

    pub fn service_controller_image_details(&self) -> ImageDetails {
        self.image_details(Component::ServiceController)
    }

    pub fn config_sync_image_name(&self) -> String {
        self.image_name(Component::ConfigSync)
    }

    pub fn config_sync_image_pull_policy(&self) -> String {
        self.image_pull_policy(Component::ConfigSync)
    }

    pub fn config_sync_image_details(&self) -> ImageDetails {
        self.image_details(Component::ConfigSync)
    }

    pub fn flow_collector_image_name(&self) -> String {
        self.image_name(Component::FlowCollector)
    }

    pub fn flow_collector_image_pull_policy(&self) -> String {
        self.image_pull_policy(Component::FlowCollector)
    }

    pub fn flow_collector_image_details(&self) -> ImageDetails {
        self.image_details(Component::FlowCollector)
    }

    /// Copy `env` and append the router overrides that are set
    ///
    /// `QDROUTERD_IMAGE` is appended before `QDROUTERD_IMAGE_PULL_POLICY`;
    /// each only when non-empty. Existing entries keep their order. Only the
    /// router's overrides are forwarded, since it is the image re-templated
    /// into spawned workloads.
    pub fn add_router_image_override_to_env(&self, env: &[EnvVar]) -> Vec<EnvVar> {
        let mut result = env.to_vec();
        for key in [ROUTER_IMAGE_ENV_KEY, ROUTER_PULL_POLICY_ENV_KEY] {
            if let Some(value) = self.env.non_empty(key) {
                debug!(env_key = key, %value, "Forwarding router override");
                result.push(EnvVar::new(key, value));
            }
        }
        result
    }
}

fn process() -> ImageResolver<ProcessEnv> {
    ImageResolver::new(ProcessEnv)
}

/// Registry prefix from the process environment
pub fn image_registry() -> String {
    process().image_registry()
}

pub fn router_image_name() -> String {
    process().router_image_name()
}

pub fn router_image_pull_policy() -> String {
    process().router_image_pull_policy()
}

pub fn router_image_details() -> ImageDetails {
    process().router_image_details()
}

pub fn service_controller_image_name() -> String {
    process().service_controller_image_name()
}

pub fn service_controller_image_pull_policy() -> String {
    process().service_controller_image_pull_policy()
}

pub fn service_controller_image_details() -> ImageDetails {
    process().service_controller_image_details()
}

pub fn config_sync_image_name() -> String {
    process().config_sync_image_name()
}

pub fn config_sync_image_pull_policy() -> String {
    process().config_sync_image_pull_policy()
}

pub fn config_sync_image_details() -> ImageDetails {
    process().config_sync_image_details()
}

pub fn flow_collector_image_name() -> String {
    process().flow_collector_image_name()
}

pub fn flow_collector_image_pull_policy() -> String {
    process().flow_collector_image_pull_policy()
}

pub fn flow_collector_image_details() -> ImageDetails {
    process().flow_collector_image_details()
}

/// Router overrides from the process environment appended to a copy of `env`
pub fn add_router_image_override_to_env(env: &[EnvVar]) -> Vec<EnvVar> {
    process().add_router_image_override_to_env(env)
}
