use super::{config_path_from_env, default_global_config_path, ConfigError, Settings};
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let settings = Settings::from_path(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Settings from `MENUNAV_CONFIG`, else from the default location. Only a missing default
/// file falls back to built-in settings; an explicitly named file must exist.
pub fn load_global_settings() -> Result<Settings, ConfigError> {
    if let Some(path) = config_path_from_env() {
        return load_settings(&path);
    }
    let path = default_global_config_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_settings(&path)
}
