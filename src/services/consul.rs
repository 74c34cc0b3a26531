use super::{FeatureGroup, ProbeError, ServiceProbe};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_CONSUL_ADDRESS: &str = "http://localhost:8500";

/// Health probe against a Consul agent: a feature group is available when its discovery
/// service has at least one passing instance.
#[derive(Clone)]
pub struct ConsulProbe {
    address: String,
    services: BTreeMap<FeatureGroup, String>,
    agent: ureq::Agent,
}

impl std::fmt::Debug for ConsulProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsulProbe")
            .field("address", &self.address)
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}

impl ConsulProbe {
    pub fn new(
        address: impl Into<String>,
        services: BTreeMap<FeatureGroup, String>,
        timeout: Duration,
    ) -> Self {
        Self {
            address: address.into(),
            services,
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    pub fn health_url(&self, service: &str) -> String {
        health_url(&self.address, service)
    }
}

pub fn health_url(address: &str, service: &str) -> String {
    format!(
        "{}/v1/health/service/{}?passing=true",
        address.trim_end_matches('/'),
        urlencoding::encode(service)
    )
}

impl ServiceProbe for ConsulProbe {
    fn probe(&self, group: FeatureGroup) -> Result<bool, ProbeError> {
        let service = self
            .services
            .get(&group)
            .ok_or(ProbeError::Unconfigured(group))?;
        let url = self.health_url(service);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| ProbeError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let instances = response
            .into_json::<Vec<serde_json::Value>>()
            .map_err(|e| ProbeError::Decode {
                url,
                reason: e.to_string(),
            })?;
        Ok(!instances.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_url_encodes_service_name() {
        assert_eq!(
            health_url("http://consul:8500/", "job service"),
            "http://consul:8500/v1/health/service/job%20service?passing=true"
        );
    }

    #[test]
    fn unconfigured_group_is_an_error_not_a_panic() {
        let probe = ConsulProbe::new(
            DEFAULT_CONSUL_ADDRESS,
            BTreeMap::new(),
            Duration::from_secs(1),
        );
        let err = probe.probe(FeatureGroup::Jobs).expect_err("unconfigured");
        assert!(err.to_string().contains("`jobs`"));
    }
}
