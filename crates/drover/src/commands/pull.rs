use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::{git_timeout, load_config_with_warning, workspace_context};
use crate::color;

pub(crate) fn handle_pull_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let ctx = workspace_context()?;

    let branch = match matches.get_one::<String>("branch") {
        Some(branch) => branch.clone(),
        None => drover_git::current_branch(ctx.root())
            .ok_or("Cannot determine the current branch; pass one explicitly")?,
    };
    let remote = config.git.remote();

    info!(event = "cli.pull_started", remote = remote, branch = %branch);

    match drover_git::cli::pull(ctx.root(), remote, &branch, git_timeout(&config)) {
        Ok(()) => {
            println!("{}", color::success("Pulled."));
            println!("  {} {}/{}", color::muted("From:"), remote, branch);
            info!(event = "cli.pull_completed", remote = remote, branch = %branch);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(event = "cli.pull_failed", error = %e);
            Err(e.into())
        }
    }
}
