mod files;
mod git;
mod global;
mod misc;

#[cfg(test)]
mod tests;

use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(files::new_command())
        .subcommand(git::publish_command())
        .subcommand(files::ls_command())
        .subcommand(files::mv_command())
        .subcommand(files::rm_command())
        .subcommand(git::pull_command())
        .subcommand(git::status_command())
        .subcommand(git::log_command())
        .subcommand(files::templates_command())
        .subcommand(misc::completions_command())
}
