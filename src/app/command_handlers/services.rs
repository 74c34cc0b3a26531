use crate::app::cli::CliOptions;
use crate::app::command_support::{load_settings, none_if_empty};
use crate::config::build_detector;
use crate::services::FeatureGroup;

pub fn cmd_services(options: &CliOptions) -> Result<String, String> {
    let settings = load_settings(options)?;
    let state = build_detector(&settings.service_discovery).detect();
    let available = state
        .available
        .iter()
        .map(|group| group.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let mut lines = vec![
        format!("combination={}", state.combination_id()),
        format!("available={}", none_if_empty(Some(available.as_str()))),
    ];
    for group in FeatureGroup::ALL {
        lines.push(format!("{group}={}", state.is_available(group)));
    }
    lines.push(format!("tip={}", none_if_empty(state.tip())));
    Ok(lines.join("\n"))
}
