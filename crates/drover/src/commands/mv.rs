use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::workspace_context;
use crate::color;

pub(crate) fn handle_mv_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let old = matches
        .get_one::<String>("old")
        .ok_or("Old name is required")?;
    let new = matches
        .get_one::<String>("new")
        .ok_or("New name is required")?;

    let ctx = workspace_context()?;

    info!(event = "cli.mv_started", old = old, new = new);

    match ctx.rename(old, new) {
        Ok(()) => {
            println!("{}", color::success("Renamed."));
            println!("  {} {} -> {}", color::muted("Entry:"), old, new);
            info!(event = "cli.mv_completed", old = old, new = new);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(event = "cli.mv_failed", old = old, new = new, error = %e);
            Err(e.into())
        }
    }
}
