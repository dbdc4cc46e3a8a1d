//! Integration tests resolving against the real process environment

use images::*;
use serial_test::serial;
use std::env;

/// Clears every resolver key for the duration of a test and restores the
/// original values on drop
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn clean() -> Self {
        let keys = OVERRIDE_TABLE
            .iter()
            .flat_map(|row| [row.image_env_key, row.pull_policy_env_key])
            .chain(std::iter::once(IMAGE_REGISTRY_ENV_KEY));

        let saved = keys
            .map(|key| {
                let original = env::var(key).ok();
                env::remove_var(key);
                (key, original)
            })
            .collect();

        Self { saved }
    }

    fn set(&self, key: &str, value: &str) {
        env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in &self.saved {
            match original {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_defaults_from_clean_environment() {
    let _guard = EnvGuard::clean();

    assert_eq!(image_registry(), DEFAULT_IMAGE_REGISTRY);
    assert_eq!(router_image_name(), "quay.io/skupper/skupper-router:main");
    assert_eq!(
        service_controller_image_name(),
        "quay.io/skupper/service-controller:main"
    );
    assert_eq!(config_sync_image_name(), "quay.io/skupper/config-sync:main");
    assert_eq!(
        flow_collector_image_name(),
        "quay.io/skupper/flow-collector:main"
    );

    assert_eq!(router_image_pull_policy(), "Always");
    assert_eq!(service_controller_image_pull_policy(), "Always");
    assert_eq!(config_sync_image_pull_policy(), "Always");
    assert_eq!(flow_collector_image_pull_policy(), "Always");
}

#[test]
#[serial]
fn test_registry_override() {
    let guard = EnvGuard::clean();
    guard.set(IMAGE_REGISTRY_ENV_KEY, "quay.io/foo");

    assert_eq!(image_registry(), "quay.io/foo");
    assert_eq!(router_image_name(), "quay.io/foo/skupper-router:main");
}

#[test]
#[serial]
fn test_router_image_override_wins_over_registry() {
    let guard = EnvGuard::clean();
    guard.set(IMAGE_REGISTRY_ENV_KEY, "quay.io/foo");
    guard.set(ROUTER_IMAGE_ENV_KEY, "myrepo/custom:tag");

    assert_eq!(router_image_name(), "myrepo/custom:tag");
    assert_eq!(
        router_image_details(),
        ImageDetails::new("myrepo/custom:tag", "Always")
    );
}

#[test]
#[serial]
fn test_component_details_from_environment() {
    let guard = EnvGuard::clean();
    guard.set(SERVICE_CONTROLLER_IMAGE_ENV_KEY, "example/sc:1");
    guard.set(SERVICE_CONTROLLER_PULL_POLICY_ENV_KEY, "IfNotPresent");
    guard.set(CONFIG_SYNC_PULL_POLICY_ENV_KEY, "Never");
    guard.set(FLOW_COLLECTOR_IMAGE_ENV_KEY, "example/fc:2");

    assert_eq!(
        service_controller_image_details(),
        ImageDetails::new("example/sc:1", "IfNotPresent")
    );
    assert_eq!(
        config_sync_image_details(),
        ImageDetails::new("quay.io/skupper/config-sync:main", "Never")
    );
    assert_eq!(
        flow_collector_image_details(),
        ImageDetails::new("example/fc:2", "Always")
    );
}

#[test]
#[serial]
fn test_empty_variables_are_unset() {
    let guard = EnvGuard::clean();
    guard.set(IMAGE_REGISTRY_ENV_KEY, "");
    guard.set(ROUTER_IMAGE_ENV_KEY, "");
    guard.set(ROUTER_PULL_POLICY_ENV_KEY, "");

    assert_eq!(
        router_image_details(),
        ImageDetails::new("quay.io/skupper/skupper-router:main", "Always")
    );
    assert!(add_router_image_override_to_env(&[]).is_empty());
}

#[test]
#[serial]
fn test_add_router_image_override_to_env() {
    let guard = EnvGuard::clean();
    let base = vec![EnvVar::new("SKUPPER_SITE_ID", "site-1")];

    assert_eq!(add_router_image_override_to_env(&base), base);

    guard.set(ROUTER_PULL_POLICY_ENV_KEY, "IfNotPresent");
    assert_eq!(
        add_router_image_override_to_env(&base),
        vec![
            EnvVar::new("SKUPPER_SITE_ID", "site-1"),
            EnvVar::new(ROUTER_PULL_POLICY_ENV_KEY, "IfNotPresent"),
        ]
    );

    guard.set(ROUTER_IMAGE_ENV_KEY, "myrepo/router:dev");
    assert_eq!(
        add_router_image_override_to_env(&base),
        vec![
            EnvVar::new("SKUPPER_SITE_ID", "site-1"),
            EnvVar::new(ROUTER_IMAGE_ENV_KEY, "myrepo/router:dev"),
            EnvVar::new(ROUTER_PULL_POLICY_ENV_KEY, "IfNotPresent"),
        ]
    );
    assert_eq!(base.len(), 1);
}

#[test]
#[serial]
fn test_snapshot_matches_live_resolution() {
    let guard = EnvGuard::clean();
    guard.set(IMAGE_REGISTRY_ENV_KEY, "registry.example");
    guard.set(CONFIG_SYNC_IMAGE_ENV_KEY, "cs:3");
    env::set_var("UNRELATED_SNAPSHOT_KEY", "x");

    let snapshot = MapEnv::from_process();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.lookup("UNRELATED_SNAPSHOT_KEY"), None);

    let live = ImageResolver::new(ProcessEnv).all_image_details();
    let captured = ImageResolver::new(snapshot).all_image_details();
    assert_eq!(live, captured);

    env::remove_var("UNRELATED_SNAPSHOT_KEY");
}

#[test]
#[serial]
fn test_repeated_calls_are_equal() {
    let guard = EnvGuard::clean();
    guard.set(FLOW_COLLECTOR_PULL_POLICY_ENV_KEY, "Never");

    assert_eq!(flow_collector_image_details(), flow_collector_image_details());
    assert_eq!(router_image_details(), router_image_details());
}
