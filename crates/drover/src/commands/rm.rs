use clap::ArgMatches;
use tracing::{error, info};

use drover_core::Prompter;

use super::helpers::workspace_context;
use crate::color;
use crate::prompt::StdinPrompter;

pub(crate) fn handle_rm_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Path argument is required")?;
    let assume_yes = matches.get_flag("yes");

    let ctx = workspace_context()?;

    info!(event = "cli.rm_started", path = path, assume_yes = assume_yes);

    if !assume_yes {
        let mut prompter = StdinPrompter;
        let question = format!("Delete '{}'? This cannot be undone.", path);
        if !prompter.confirm(&question) {
            println!("{}", color::muted("Aborted."));
            info!(event = "cli.rm_declined", path = path);
            return Ok(());
        }
    }

    match ctx.delete(path) {
        Ok(()) => {
            println!("{}", color::success("Deleted."));
            println!("  {} {}", color::muted("Entry:"), path);
            info!(event = "cli.rm_completed", path = path);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(event = "cli.rm_failed", path = path, error = %e);
            Err(e.into())
        }
    }
}
