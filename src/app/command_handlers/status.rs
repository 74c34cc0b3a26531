use crate::app::cli::CliOptions;
use crate::app::command_support::{loaded_orchestrator, none_if_empty};
use crate::menu::forest_node_count;

pub fn cmd_status(options: &CliOptions) -> Result<String, String> {
    let (orchestrator, outcome) = loaded_orchestrator(options)?;
    let snapshot = orchestrator.snapshot();
    let lines = vec![
        format!("state={}", orchestrator.state()),
        format!("generation={}", snapshot.generation),
        format!("records={}", snapshot.records.len()),
        format!("tree_nodes={}", forest_node_count(&snapshot.tree)),
        format!("routes={}", snapshot.routes.len()),
        format!("fallback_routes={}", snapshot.routes.degraded_count()),
        format!("route_fingerprint={}", snapshot.routes.fingerprint()),
        format!("service_combination={}", snapshot.services.combination_id()),
        format!("notice={}", none_if_empty(snapshot.notice.as_deref())),
        format!("error={}", none_if_empty(outcome.error.as_deref())),
    ];
    Ok(lines.join("\n"))
}
