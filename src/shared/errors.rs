pub use crate::config::ConfigError;
pub use crate::orchestrator::LoadError;
pub use crate::services::ProbeError;
pub use crate::source::MenuSourceError;
