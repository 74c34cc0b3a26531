use menunav::services::{
    combination_tip, FeatureGroup, ProbeError, ServiceCombination, ServiceCombinationDetector,
    ServiceProbe, StaticProbe,
};
use std::sync::Arc;

struct UnreachableProbe;

impl ServiceProbe for UnreachableProbe {
    fn probe(&self, _group: FeatureGroup) -> Result<bool, ProbeError> {
        Err(ProbeError::Request {
            url: "http://consul.invalid:8500".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

#[test]
fn failing_probes_classify_as_minimal() {
    let detector = ServiceCombinationDetector::new(Arc::new(UnreachableProbe));
    let detection = detector.detect_with_report();

    assert_eq!(detection.state.combination, ServiceCombination::Minimal);
    assert!(detection.state.available.is_empty());
    assert_eq!(
        detection
            .events
            .iter()
            .filter(|e| e.event == "services.probe_failed")
            .count(),
        3
    );
}

#[test]
fn partial_availability_maps_to_pair_combination() {
    let detector = ServiceCombinationDetector::new(Arc::new(StaticProbe::new([
        FeatureGroup::Company,
        FeatureGroup::Jobs,
    ])));
    let state = detector.detect();
    assert_eq!(state.combination_id(), "job_company");
    assert!(state.is_available(FeatureGroup::Jobs));
    assert!(!state.is_available(FeatureGroup::Resume));
    assert_eq!(state.tip(), Some("职位+企业模式"));
}

#[test]
fn all_groups_available_is_all_services() {
    let detector = ServiceCombinationDetector::new(Arc::new(StaticProbe::all()));
    assert_eq!(detector.detect().combination, ServiceCombination::AllServices);
}

#[test]
fn detector_only_probes_configured_groups() {
    let detector = ServiceCombinationDetector::with_groups(
        Arc::new(StaticProbe::all()),
        [FeatureGroup::Resume, FeatureGroup::Resume],
    );
    assert_eq!(detector.groups(), &[FeatureGroup::Resume]);
    assert_eq!(detector.detect().combination_id(), "resume_only");
}

#[test]
fn tip_lookup_is_total() {
    assert_eq!(
        combination_tip("minimal"),
        Some("基础模式：仅系统管理功能可用")
    );
    assert_eq!(combination_tip("unknown"), None);
    assert_eq!(combination_tip(""), None);
}

#[test]
fn combination_ids_round_trip_through_parse() {
    for combination in ServiceCombination::ALL {
        assert_eq!(
            ServiceCombination::parse(combination.as_str()),
            Ok(combination)
        );
    }
    assert!(ServiceCombination::parse("everything").is_err());
}
