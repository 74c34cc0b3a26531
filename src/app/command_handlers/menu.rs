use crate::app::cli::CliOptions;
use crate::app::command_support::loaded_orchestrator;
use crate::menu::{walk_forest, MenuTreeNode};

pub fn render_tree(roots: &[MenuTreeNode]) -> Vec<String> {
    let mut lines = Vec::new();
    walk_forest(roots, |node, depth| {
        let marker = if node.is_leaf() { "-" } else { "+" };
        lines.push(format!(
            "{}{marker} {} ({}) id={}",
            "  ".repeat(depth),
            node.title(),
            node.path(),
            node.id()
        ));
    });
    lines
}

pub fn cmd_tree(options: &CliOptions) -> Result<String, String> {
    let (orchestrator, outcome) = loaded_orchestrator(options)?;
    let mut lines = vec![format!("state={}", outcome.state)];
    if let Some(notice) = orchestrator.notice() {
        lines.push(format!("notice={notice}"));
    }
    lines.extend(render_tree(&orchestrator.visible_menu_tree()));
    Ok(lines.join("\n"))
}

pub fn cmd_breadcrumbs(options: &CliOptions, args: &[String]) -> Result<String, String> {
    let path = match args {
        [path] => path.as_str(),
        _ => return Err("usage: breadcrumbs <path>".to_string()),
    };
    let (orchestrator, _) = loaded_orchestrator(options)?;
    orchestrator.set_active_menu(path);
    let trail = orchestrator.update_breadcrumbs(path);
    let rendered = if trail.is_empty() {
        "none".to_string()
    } else {
        trail.join(" > ")
    };
    Ok([format!("path={path}"), format!("breadcrumbs={rendered}")].join("\n"))
}
