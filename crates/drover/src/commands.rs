use clap::ArgMatches;
use tracing::error;

mod completions;
mod helpers;
mod log;
mod ls;
mod mv;
mod new;
mod publish;
mod pull;
mod rm;
mod status;
mod templates;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("new", sub_matches)) => new::handle_new_command(sub_matches),
        Some(("publish", sub_matches)) => publish::handle_publish_command(sub_matches),
        Some(("ls", sub_matches)) => ls::handle_ls_command(sub_matches),
        Some(("mv", sub_matches)) => mv::handle_mv_command(sub_matches),
        Some(("rm", sub_matches)) => rm::handle_rm_command(sub_matches),
        Some(("pull", sub_matches)) => pull::handle_pull_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("log", sub_matches)) => log::handle_log_command(sub_matches),
        Some(("templates", sub_matches)) => templates::handle_templates_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
