use super::{MenuSourceConfig, ServiceDiscoveryConfig, Settings};
use crate::orchestrator::MenuOrchestrator;
use crate::routing::ViewRegistry;
use crate::services::{ConsulProbe, ServiceCombinationDetector, StaticProbe};
use crate::shared::logging::EventLog;
use crate::source::{FileMenuSource, HttpMenuSource, MenuSource, StaticMenuSource};
use std::sync::Arc;
use std::time::Duration;

pub fn build_menu_source(config: &MenuSourceConfig) -> Arc<dyn MenuSource> {
    match config {
        MenuSourceConfig::Local => Arc::new(StaticMenuSource::demo()),
        MenuSourceConfig::File { path } => Arc::new(FileMenuSource::new(path.clone())),
        MenuSourceConfig::Remote {
            base_url,
            endpoint,
            token,
            timeout_seconds,
        } => Arc::new(
            HttpMenuSource::new(base_url.clone(), Duration::from_secs(*timeout_seconds))
                .with_endpoint(endpoint.clone())
                .with_token(token.clone()),
        ),
    }
}

pub fn build_detector(config: &ServiceDiscoveryConfig) -> ServiceCombinationDetector {
    match config {
        ServiceDiscoveryConfig::Static { available } => {
            ServiceCombinationDetector::new(Arc::new(StaticProbe::new(available.iter().copied())))
        }
        ServiceDiscoveryConfig::Consul {
            address,
            services,
            timeout_seconds,
        } => ServiceCombinationDetector::new(Arc::new(ConsulProbe::new(
            address.clone(),
            services.clone(),
            Duration::from_secs(*timeout_seconds),
        ))),
    }
}

pub fn build_view_registry(settings: &Settings) -> ViewRegistry {
    ViewRegistry::new(settings.views.modules.iter(), settings.views.fallback.clone())
}

/// An idle orchestrator wired from validated settings; nothing is fetched until the first load.
pub fn build_orchestrator(settings: &Settings) -> MenuOrchestrator {
    let log = match &settings.log_path {
        Some(path) => EventLog::to_file(path.clone()),
        None => EventLog::disabled(),
    };
    MenuOrchestrator::new(
        build_menu_source(&settings.menu_source),
        build_detector(&settings.service_discovery),
        build_view_registry(settings),
    )
    .with_parent_route(settings.views.parent_route.clone())
    .with_event_log(log)
}
