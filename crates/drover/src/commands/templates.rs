use clap::ArgMatches;
use tracing::info;

use drover_core::TemplateRegistry;

use super::helpers::load_config_with_warning;
use crate::table::{Table, truncate};

pub(crate) fn handle_templates_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let registry = TemplateRegistry::from_config(&config);

    info!(event = "cli.templates_started");

    let mut table = Table::new(&["Extension", "Preview"]);
    for extension in registry.extensions() {
        let body = registry.resolve(Some(extension));
        let first_line = body.lines().next().unwrap_or("");
        table.add_row(vec![
            format!(".{extension}"),
            truncate(first_line, 48),
        ]);
    }
    print!("{}", table.render());

    info!(event = "cli.templates_completed");
    Ok(())
}
