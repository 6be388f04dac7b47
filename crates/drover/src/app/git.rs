use clap::{Arg, ArgAction, Command};

pub fn publish_command() -> Command {
    Command::new("publish")
        .about("Stage, commit, and push files to the configured remote")
        .arg(
            Arg::new("paths")
                .help("Files to publish (relative to the workspace root)")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Publish every file in the workspace root")
                .action(ArgAction::SetTrue)
                .conflicts_with("paths"),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .help("Commit message (defaults to the configured fallback)"),
        )
        .arg(
            Arg::new("init")
                .long("init")
                .help("Initialize a git repository without asking if none exists")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .help("Remote URL to configure before pushing"),
        )
        .arg(
            Arg::new("no-retry")
                .long("no-retry")
                .help("Fail on the first push error instead of trying fallback strategies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Answer yes to all confirmations (non-interactive)")
                .action(ArgAction::SetTrue),
        )
}

pub fn pull_command() -> Command {
    Command::new("pull")
        .about("Pull the current branch from the configured remote")
        .arg(
            Arg::new("branch")
                .help("Branch to pull (defaults to the current branch)")
                .index(1),
        )
}

pub fn status_command() -> Command {
    Command::new("status")
        .about("Show repository diagnostics, or one file's status")
        .arg(
            Arg::new("path")
                .help("Single file to report the status of")
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the diagnostics record as JSON")
                .action(ArgAction::SetTrue),
        )
}

pub fn log_command() -> Command {
    Command::new("log")
        .about("Show recent commits")
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .help("Number of commits to show (default: 10)")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
}
