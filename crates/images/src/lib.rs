//! # Skupper Images
//!
//! Resolves the container image reference and pull policy for each Skupper
//! system component: the router, service controller, config sync, and flow
//! collector.
//!
//! Each value comes from a per-component environment variable when it is set
//! and non-empty, and otherwise from a default. Default images are
//! `<registry>/<name>`, where the registry itself can be overridden through
//! `SKUPPER_IMAGE_REGISTRY`.
//!
//! | Component | Image override | Pull-policy override |
//! |---|---|---|
//! | router | `QDROUTERD_IMAGE` | `QDROUTERD_IMAGE_PULL_POLICY` |
//! | service-controller | `SKUPPER_SERVICE_CONTROLLER_IMAGE` | `SKUPPER_SERVICE_CONTROLLER_IMAGE_PULL_POLICY` |
//! | config-sync | `SKUPPER_CONFIG_SYNC_IMAGE` | `SKUPPER_CONFIG_SYNC_IMAGE_PULL_POLICY` |
//! | flow-collector | `SKUPPER_FLOW_COLLECTOR_IMAGE` | `SKUPPER_FLOW_COLLECTOR_IMAGE_PULL_POLICY` |
//!
//! ## Example
//! ```rust
//! use images::{ImageResolver, MapEnv};
//!
//! let env = MapEnv::new().with("SKUPPER_IMAGE_REGISTRY", "quay.io/foo");
//! let resolver = ImageResolver::new(env);
//!
//! assert_eq!(resolver.router_image_name(), "quay.io/foo/skupper-router:main");
//! assert_eq!(resolver.router_image_pull_policy(), "Always");
//! ```
//!
//! The free functions (`router_image_name()` and friends) resolve against the
//! live process environment.

pub mod component;
pub mod constants;
pub mod defaults;
pub mod env;
pub mod resolver;
pub mod types;

// Re-exports
pub use component::{Component, ImageOverrideKeys, OVERRIDE_TABLE};
pub use constants::*;
pub use defaults::ImageDefaults;
pub use env::{EnvSource, EnvVar, MapEnv, ProcessEnv};
pub use resolver::*;
pub use types::{ImageDetails, PullPolicy};
