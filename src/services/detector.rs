use super::{FeatureGroup, ServiceCombinationState};
use crate::shared::logging::NavEvent;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("health probe request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("health probe response from {url} is invalid: {reason}")]
    Decode { url: String, reason: String },
    #[error("no discovery service configured for feature group `{0}`")]
    Unconfigured(FeatureGroup),
}

/// Answers whether one feature group is reachable.
pub trait ServiceProbe: Send + Sync {
    fn probe(&self, group: FeatureGroup) -> Result<bool, ProbeError>;
}

/// Fixed availability, used for local/offline operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProbe {
    available: BTreeSet<FeatureGroup>,
}

impl StaticProbe {
    pub fn new(available: impl IntoIterator<Item = FeatureGroup>) -> Self {
        Self {
            available: available.into_iter().collect(),
        }
    }

    pub fn all() -> Self {
        Self::new(FeatureGroup::ALL)
    }
}

impl ServiceProbe for StaticProbe {
    fn probe(&self, group: FeatureGroup) -> Result<bool, ProbeError> {
        Ok(self.available.contains(&group))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub state: ServiceCombinationState,
    pub events: Vec<NavEvent>,
}

/// Probes each configured feature group and classifies the result.
///
/// Detection is total: a failing probe counts as unavailable, so the worst outcome is the
/// `minimal` combination with no feature groups.
#[derive(Clone)]
pub struct ServiceCombinationDetector {
    probe: Arc<dyn ServiceProbe>,
    groups: Vec<FeatureGroup>,
}

impl std::fmt::Debug for ServiceCombinationDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCombinationDetector")
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

impl ServiceCombinationDetector {
    pub fn new(probe: Arc<dyn ServiceProbe>) -> Self {
        Self::with_groups(probe, FeatureGroup::ALL)
    }

    pub fn with_groups(
        probe: Arc<dyn ServiceProbe>,
        groups: impl IntoIterator<Item = FeatureGroup>,
    ) -> Self {
        let mut groups: Vec<FeatureGroup> = groups.into_iter().collect();
        groups.sort();
        groups.dedup();
        Self { probe, groups }
    }

    pub fn groups(&self) -> &[FeatureGroup] {
        &self.groups
    }

    pub fn detect(&self) -> ServiceCombinationState {
        self.detect_with_report().state
    }

    pub fn detect_with_report(&self) -> Detection {
        let mut events = Vec::new();
        let mut available = BTreeSet::new();
        for group in &self.groups {
            match self.probe.probe(*group) {
                Ok(true) => {
                    available.insert(*group);
                }
                Ok(false) => events.push(NavEvent::info(
                    "services.unavailable",
                    format!("feature group `{group}` is not reachable"),
                )),
                Err(err) => events.push(NavEvent::warn(
                    "services.probe_failed",
                    format!("feature group `{group}` treated as unavailable: {err}"),
                )),
            }
        }

        let state = ServiceCombinationState::from_available(available);
        let groups = state
            .available
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(",");
        events.push(NavEvent::info(
            "services.detected",
            format!(
                "service combination `{}` (groups: [{groups}])",
                state.combination_id()
            ),
        ));
        if let Some(tip) = state.tip() {
            events.push(NavEvent::info("services.tip", tip));
        }
        Detection { state, events }
    }
}
