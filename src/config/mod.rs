pub mod error;
pub mod load;
pub mod paths;
pub mod settings;
pub mod wiring;

pub use error::ConfigError;
pub use load::{load_global_settings, load_settings};
pub use paths::{
    config_path_from_env, default_global_config_path, CONFIG_PATH_ENV, GLOBAL_SETTINGS_FILE_NAME,
    GLOBAL_STATE_DIR,
};
pub use settings::{MenuSourceConfig, ServiceDiscoveryConfig, Settings, ViewsConfig};
pub use wiring::{build_detector, build_menu_source, build_orchestrator, build_view_registry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FeatureGroup;
    use std::path::PathBuf;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_yaml("{}").expect("parse settings");
        assert_eq!(settings, Settings::default());
        settings.validate().expect("defaults are valid");
    }

    #[test]
    fn remote_source_fills_endpoint_and_timeout() {
        let settings = Settings::from_yaml(
            r#"
menu_source:
  kind: remote
  base_url: http://gateway:9000
"#,
        )
        .expect("parse settings");
        match settings.menu_source {
            MenuSourceConfig::Remote {
                endpoint,
                timeout_seconds,
                token,
                ..
            } => {
                assert_eq!(endpoint, "/api/v1/menu/list");
                assert_eq!(timeout_seconds, 10);
                assert_eq!(token, None);
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn consul_services_default_per_group() {
        let settings = Settings::from_yaml(
            r#"
service_discovery:
  kind: consul
  services:
    jobs: jobs-v2
"#,
        )
        .expect("parse settings");
        match settings.service_discovery {
            ServiceDiscoveryConfig::Consul {
                address, services, ..
            } => {
                assert_eq!(address, "http://localhost:8500");
                assert_eq!(services[&FeatureGroup::Jobs], "jobs-v2");
                assert_eq!(services[&FeatureGroup::Resume], "resume-service");
            }
            other => panic!("unexpected discovery {other:?}"),
        }
    }

    #[test]
    fn relative_file_source_is_rejected() {
        let settings = Settings {
            menu_source: MenuSourceConfig::File {
                path: PathBuf::from("menus.yaml"),
            },
            ..Settings::default()
        };
        let err = settings.validate().expect_err("relative path");
        assert!(err.to_string().contains("absolute"));
    }
}
