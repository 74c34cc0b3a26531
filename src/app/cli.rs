#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Tree,
    Routes,
    Breadcrumbs,
    Services,
    Status,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "tree" => CliVerb::Tree,
        "routes" => CliVerb::Routes,
        "breadcrumbs" => CliVerb::Breadcrumbs,
        "services" => CliVerb::Services,
        "status" => CliVerb::Status,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Usage: menunav [--config PATH] <command>".to_string(),
        String::new(),
        "Commands:".to_string(),
        "  tree                                 Print the visible menu tree".to_string(),
        "  routes                               List registered routes and their views"
            .to_string(),
        "  breadcrumbs <path>                   Print the breadcrumb trail for a menu path"
            .to_string(),
        "  services                             Show the detected service combination"
            .to_string(),
        "  status                               Show load state, counts and route fingerprint"
            .to_string(),
        "  help                                 Show this help".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}

/// Global options that precede the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<String>,
}

/// Splits leading `--config PATH` / `--config=PATH` from the command words.
pub fn split_global_options(args: &[String]) -> Result<(CliOptions, &[String]), String> {
    let mut options = CliOptions::default();
    let mut index = 0;
    while index < args.len() {
        let arg = args[index].as_str();
        if arg == "--config" {
            let value = args
                .get(index + 1)
                .ok_or_else(|| "--config requires a path".to_string())?;
            options.config_path = Some(value.clone());
            index += 2;
        } else if let Some(value) = arg.strip_prefix("--config=") {
            if value.is_empty() {
                return Err("--config requires a path".to_string());
            }
            options.config_path = Some(value.to_string());
            index += 1;
        } else {
            break;
        }
    }
    Ok((options, &args[index..]))
}
