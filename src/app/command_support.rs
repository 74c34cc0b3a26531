use crate::app::cli::CliOptions;
use crate::config::{
    build_orchestrator, load_global_settings, load_settings as load_settings_file, ConfigError,
    Settings,
};
use crate::orchestrator::{LoadOutcome, MenuOrchestrator};
use std::path::Path;

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn load_settings(options: &CliOptions) -> Result<Settings, String> {
    match &options.config_path {
        Some(path) => load_settings_file(Path::new(path)).map_err(map_config_err),
        None => load_global_settings().map_err(map_config_err),
    }
}

/// Wires an orchestrator from settings and runs the first load.
pub fn loaded_orchestrator(
    options: &CliOptions,
) -> Result<(MenuOrchestrator, LoadOutcome), String> {
    let settings = load_settings(options)?;
    let orchestrator = build_orchestrator(&settings);
    let outcome = orchestrator.load_menu();
    Ok((orchestrator, outcome))
}

pub fn none_if_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "none".to_string(),
    }
}
