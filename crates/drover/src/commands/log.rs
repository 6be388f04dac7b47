use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::{git_timeout, load_config_with_warning, workspace_context};
use crate::color;

pub(crate) fn handle_log_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let count = matches.get_one::<usize>("count").copied().unwrap_or(10);

    let config = load_config_with_warning();
    let ctx = workspace_context()?;

    info!(event = "cli.log_started", count = count);

    match drover_git::cli::log_oneline(ctx.root(), count, git_timeout(&config)) {
        Ok(output) => {
            if output.is_empty() {
                println!("{}", color::muted("No commits yet."));
            } else {
                for line in output.lines() {
                    match line.split_once(' ') {
                        Some((hash, subject)) => {
                            println!("{} {}", color::accent(hash), subject)
                        }
                        None => println!("{}", line),
                    }
                }
            }
            info!(event = "cli.log_completed", count = count);
            Ok(())
        }
        Err(e) => match e.hint() {
            Some(drover_git::GitErrorHint::NoCommits) => {
                println!("{}", color::muted("No commits yet."));
                Ok(())
            }
            _ => {
                eprintln!("{}", color::error(&e.to_string()));
                error!(event = "cli.log_failed", error = %e);
                Err(e.into())
            }
        },
    }
}
