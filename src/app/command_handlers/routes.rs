use crate::app::cli::CliOptions;
use crate::app::command_support::loaded_orchestrator;

pub fn cmd_routes(options: &CliOptions) -> Result<String, String> {
    let (orchestrator, _) = loaded_orchestrator(options)?;
    let routes = orchestrator.routes();
    let mut lines = vec![
        format!("route_count={}", routes.len()),
        format!("fallback_count={}", routes.degraded_count()),
    ];
    for route in routes.iter() {
        let registration = &route.registration;
        lines.push(format!(
            "route name={} path={} parent={} view={}{}",
            registration.name,
            registration.path,
            route.parent,
            registration.view.key(),
            if registration.degraded {
                " fallback=true"
            } else {
                ""
            }
        ));
    }
    Ok(lines.join("\n"))
}
