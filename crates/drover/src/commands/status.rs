use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::{git_timeout, load_config_with_warning, workspace_context};
use crate::color;

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let ctx = workspace_context()?;
    let json = matches.get_flag("json");

    // Single-file mode: report one path's porcelain classification.
    if let Some(path) = matches.get_one::<String>("path") {
        info!(event = "cli.status_started", path = path);
        return match drover_git::status_of(ctx.root(), path, git_timeout(&config)) {
            Ok(status) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&status)?);
                } else {
                    println!("{}  {}", color::accent(path), status);
                }
                info!(event = "cli.status_completed", path = path, status = %status);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", color::error(&e.to_string()));
                error!(event = "cli.status_failed", path = path, error = %e);
                Err(e.into())
            }
        };
    }

    info!(event = "cli.status_started");
    let diagnostics = drover_git::diagnostics(ctx.root(), config.git.remote());

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        return Ok(());
    }

    if !diagnostics.is_repo {
        println!("{}", color::warning("Not a git repository."));
        println!(
            "  {}",
            color::muted("Run 'drover publish --init' to create one.")
        );
        return Ok(());
    }

    let branch = diagnostics.current_branch.as_deref().unwrap_or("(detached)");
    println!("{} {}", color::muted("Branch:"), color::accent(branch));
    match &diagnostics.remote_url {
        Some(url) => println!("{} {}", color::muted("Remote:"), url),
        None => println!("{} {}", color::muted("Remote:"), color::warning("(none)")),
    }
    if !diagnostics.has_commits {
        println!("{}", color::warning("No commits yet."));
    }

    if diagnostics.is_clean() {
        println!("{}", color::success("Working tree clean."));
    } else {
        print_file_set("Staged", &diagnostics.staged);
        print_file_set("Modified", &diagnostics.modified);
        print_file_set("Untracked", &diagnostics.untracked);
    }

    info!(
        event = "cli.status_completed",
        clean = diagnostics.is_clean()
    );
    Ok(())
}

fn print_file_set(label: &str, files: &std::collections::BTreeSet<String>) {
    if files.is_empty() {
        return;
    }
    println!("{}", color::muted(&format!("{}:", label)));
    for file in files {
        println!("  {}", file);
    }
}
