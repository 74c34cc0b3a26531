pub mod combination;
pub mod consul;
pub mod detector;

pub use combination::{
    combination_tip, FeatureGroup, ServiceCombination, ServiceCombinationState,
};
pub use consul::{ConsulProbe, DEFAULT_CONSUL_ADDRESS};
pub use detector::{Detection, ProbeError, ServiceCombinationDetector, ServiceProbe, StaticProbe};
