//! # Common Skupper
//!
//! Shared error definitions and configuration loading for the Skupper image
//! tooling workspace. Crates that resolve or consume component images depend
//! on this for a single error taxonomy and a single way of reading files.
//!
//! ## Key Features
//! - `ConfigurationError` with the `SkupperError` marker trait
//! - Figment-based layered configuration loading (defaults, TOML file, env)
//! - `ConfigLoader` trait for configuration types that know how to load themselves

pub mod config;
pub mod error;

// Re-export commonly used types at the crate root for convenience
pub use config::*;
pub use error::*;

/// Version of the common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
