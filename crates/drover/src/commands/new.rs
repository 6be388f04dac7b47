use clap::ArgMatches;
use tracing::{error, info};

use drover_core::TemplateRegistry;

use super::helpers::{load_config_with_warning, workspace_context};
use crate::color;

pub(crate) fn handle_new_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("File argument is required")?;
    let dir = matches.get_one::<String>("dir").map(|s| s.as_str());
    let content = matches.get_one::<String>("content").map(|s| s.as_str());
    let force = matches.get_flag("force");

    let config = load_config_with_warning();
    let registry = TemplateRegistry::from_config(&config);
    let ctx = workspace_context()?;

    info!(
        event = "cli.new_started",
        file = file,
        dir = ?dir,
        templated = content.is_none()
    );

    match ctx.scaffold_file(dir, file, content, &registry, force) {
        Ok(path) => {
            println!("{}", color::success("File created."));
            println!("  {} {}", color::muted("Path:"), path.display());
            if content.is_none() {
                let extension = file.rsplit('.').next().filter(|e| *e != file.as_str());
                match extension.and_then(|e| registry.get(&e.to_lowercase())) {
                    Some(_) => println!(
                        "  {} {}",
                        color::muted("Template:"),
                        extension.unwrap_or_default()
                    ),
                    None => println!("  {} generic", color::muted("Template:")),
                }
            }

            info!(event = "cli.new_completed", path = %path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(event = "cli.new_failed", file = file, error = %e);
            Err(e.into())
        }
    }
}
