use clap::ArgMatches;
use tracing::{error, info};

use drover_core::{
    Prompter, PublishOptions, PublishRequest, ScriptedPrompter, run_publish,
};

use super::helpers::{load_config_with_warning, workspace_context};
use crate::color;
use crate::prompt::StdinPrompter;

pub(crate) fn handle_publish_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let ctx = workspace_context()?;

    let paths: Vec<String> = if matches.get_flag("all") {
        let (files, _dirs) = ctx.list_entries(None)?;
        if files.is_empty() {
            return Err("Nothing to publish: the workspace root has no files".into());
        }
        files
    } else {
        match matches.get_many::<String>("paths") {
            Some(values) => values.cloned().collect(),
            None => return Err("Nothing to publish: pass file paths or --all".into()),
        }
    };

    let assume_yes = matches.get_flag("yes");
    let request = PublishRequest {
        paths,
        message: matches.get_one::<String>("message").cloned(),
    };
    let options = PublishOptions {
        init_without_asking: matches.get_flag("init") || assume_yes,
        remote_url: matches.get_one::<String>("remote").cloned(),
        retry: !matches.get_flag("no-retry") && config.publish.retry(),
    };

    info!(
        event = "cli.publish_started",
        paths = request.paths.len(),
        retry = options.retry,
        assume_yes = assume_yes
    );

    let mut stdin_prompter = StdinPrompter;
    let mut scripted = ScriptedPrompter::always_yes();
    let prompter: &mut dyn Prompter = if assume_yes {
        &mut scripted
    } else {
        &mut stdin_prompter
    };

    match run_publish(&ctx, &config, &request, &options, prompter) {
        Ok(report) => {
            println!("{}", color::success("Published."));
            println!("  {} {}", color::muted("Branch:"), report.branch);
            println!(
                "  {}   {}",
                color::muted("Push:"),
                report.strategy.describe(config.git.remote(), &report.branch)
            );
            if report.initialized_repo {
                println!("  {}", color::warning("Initialized a new repository."));
            }
            if let Some(url) = &report.remote_added {
                println!("  {} {}", color::muted("Remote:"), url);
            }
            if !report.attempts.is_empty() {
                println!(
                    "  {} {} failed attempt(s) before success",
                    color::muted("Retries:"),
                    report.attempts.len()
                );
            }

            info!(
                event = "cli.publish_completed",
                branch = %report.branch,
                retries = report.attempts.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            for raw in e.raw_messages() {
                eprintln!("  {}", color::muted(raw));
            }
            error!(event = "cli.publish_failed", error = %e);
            Err(e.into())
        }
    }
}
