use clap::{Arg, Command};
use clap_complete::Shell;

pub fn completions_command() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .help("Target shell")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(Shell)),
        )
}
