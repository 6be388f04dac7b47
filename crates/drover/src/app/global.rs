use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("drover")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffold code files and publish them to a Git remote")
        .long_about(
            "drover creates small code files from extension templates and stages, commits, \
             and pushes them with a retrying publish pipeline. Push failures are classified \
             from git's own output and retried with alternative push invocations.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
