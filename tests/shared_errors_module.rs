use menunav::config;
use menunav::orchestrator;
use menunav::services::FeatureGroup;
use menunav::shared;
use menunav::source;

#[test]
fn errors_are_exposed_via_shared_and_module_paths() {
    let shared_error = shared::errors::ConfigError::HomeDirectoryUnavailable;
    let config_error = config::ConfigError::HomeDirectoryUnavailable;
    assert_eq!(shared_error.to_string(), config_error.to_string());

    let probe = shared::errors::ProbeError::Unconfigured(FeatureGroup::Jobs);
    assert_eq!(
        probe.to_string(),
        "no discovery service configured for feature group `jobs`"
    );
}

#[test]
fn load_error_wraps_source_error_transparently() {
    let source_error = source::MenuSourceError::Unavailable("down".to_string());
    let message = source_error.to_string();
    let load_error: orchestrator::LoadError = source_error.into();
    assert_eq!(load_error.to_string(), message);
    assert!(matches!(
        load_error,
        shared::errors::LoadError::Source(shared::errors::MenuSourceError::Unavailable(_))
    ));
}
