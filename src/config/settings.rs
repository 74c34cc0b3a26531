use super::ConfigError;
use crate::routing::{BUILTIN_VIEWS, DEFAULT_FALLBACK_VIEW, DEFAULT_PARENT_ROUTE};
use crate::services::{FeatureGroup, DEFAULT_CONSUL_ADDRESS};
use crate::source::http::DEFAULT_MENU_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_menu_endpoint() -> String {
    DEFAULT_MENU_ENDPOINT.to_string()
}

fn default_consul_address() -> String {
    DEFAULT_CONSUL_ADDRESS.to_string()
}

fn default_available_groups() -> BTreeSet<FeatureGroup> {
    FeatureGroup::ALL.into_iter().collect()
}

fn default_discovery_services() -> BTreeMap<FeatureGroup, String> {
    FeatureGroup::ALL
        .into_iter()
        .map(|group| (group, group.default_service_name().to_string()))
        .collect()
}

fn default_view_modules() -> Vec<String> {
    BUILTIN_VIEWS.iter().map(|key| key.to_string()).collect()
}

fn default_fallback_view() -> String {
    DEFAULT_FALLBACK_VIEW.to_string()
}

fn default_parent_route() -> String {
    DEFAULT_PARENT_ROUTE.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuSourceConfig {
    /// Built-in demo records.
    #[default]
    Local,
    File {
        path: PathBuf,
    },
    Remote {
        base_url: String,
        #[serde(default = "default_menu_endpoint")]
        endpoint: String,
        #[serde(default)]
        token: Option<String>,
        #[serde(default = "default_timeout_seconds")]
        timeout_seconds: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceDiscoveryConfig {
    Static {
        #[serde(default = "default_available_groups")]
        available: BTreeSet<FeatureGroup>,
    },
    Consul {
        #[serde(default = "default_consul_address")]
        address: String,
        #[serde(default)]
        services: BTreeMap<FeatureGroup, String>,
        #[serde(default = "default_timeout_seconds")]
        timeout_seconds: u64,
    },
}

impl Default for ServiceDiscoveryConfig {
    fn default() -> Self {
        Self::Static {
            available: default_available_groups(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewsConfig {
    #[serde(default = "default_view_modules")]
    pub modules: Vec<String>,
    #[serde(default = "default_fallback_view")]
    pub fallback: String,
    #[serde(default = "default_parent_route")]
    pub parent_route: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            modules: default_view_modules(),
            fallback: default_fallback_view(),
            parent_route: default_parent_route(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub menu_source: MenuSourceConfig,
    #[serde(default)]
    pub service_discovery: ServiceDiscoveryConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        let mut settings: Settings = serde_yaml::from_str(raw)?;
        settings.fill_discovery_defaults();
        Ok(settings)
    }

    /// Consul groups without an explicit service name get the conventional one.
    fn fill_discovery_defaults(&mut self) {
        if let ServiceDiscoveryConfig::Consul { services, .. } = &mut self.service_discovery {
            for (group, name) in default_discovery_services() {
                services.entry(group).or_insert(name);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.views.fallback.trim().is_empty() {
            return Err(ConfigError::Settings(
                "views.fallback must not be empty".to_string(),
            ));
        }
        if self.views.parent_route.trim().is_empty() {
            return Err(ConfigError::Settings(
                "views.parent_route must not be empty".to_string(),
            ));
        }
        if let Some(log_path) = &self.log_path {
            if !log_path.is_absolute() {
                return Err(ConfigError::Settings(format!(
                    "log_path must be absolute: {}",
                    log_path.display()
                )));
            }
        }

        match &self.menu_source {
            MenuSourceConfig::Local => {}
            MenuSourceConfig::File { path } => {
                if !path.is_absolute() {
                    return Err(ConfigError::Settings(format!(
                        "menu_source.path must be absolute: {}",
                        path.display()
                    )));
                }
            }
            MenuSourceConfig::Remote {
                base_url,
                timeout_seconds,
                ..
            } => {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(ConfigError::Settings(format!(
                        "menu_source.base_url must start with http:// or https://: `{base_url}`"
                    )));
                }
                if *timeout_seconds == 0 {
                    return Err(ConfigError::Settings(
                        "menu_source.timeout_seconds must be greater than zero".to_string(),
                    ));
                }
            }
        }

        if let ServiceDiscoveryConfig::Consul {
            address,
            services,
            timeout_seconds,
        } = &self.service_discovery
        {
            if !(address.starts_with("http://") || address.starts_with("https://")) {
                return Err(ConfigError::Settings(format!(
                    "service_discovery.address must start with http:// or https://: `{address}`"
                )));
            }
            if *timeout_seconds == 0 {
                return Err(ConfigError::Settings(
                    "service_discovery.timeout_seconds must be greater than zero".to_string(),
                ));
            }
            if let Some((group, _)) = services.iter().find(|(_, name)| name.trim().is_empty()) {
                return Err(ConfigError::Settings(format!(
                    "service_discovery.services.{group} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
