use crate::app::cli::{help_text, parse_cli_verb, split_global_options, CliVerb};

pub mod menu;
pub mod routes;
pub mod services;
pub mod status;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let (options, rest) = split_global_options(&args)?;
    let Some(verb) = rest.first() else {
        return Ok(help_text());
    };

    match parse_cli_verb(verb.as_str()) {
        CliVerb::Tree => menu::cmd_tree(&options),
        CliVerb::Breadcrumbs => menu::cmd_breadcrumbs(&options, &rest[1..]),
        CliVerb::Routes => routes::cmd_routes(&options),
        CliVerb::Services => services::cmd_services(&options),
        CliVerb::Status => status::cmd_status(&options),
        CliVerb::Help => Ok(help_text()),
        CliVerb::Unknown => Err(format!("unknown command `{verb}`")),
    }
}
