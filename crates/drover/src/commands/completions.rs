use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

use crate::app;

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .copied()
        .ok_or("Shell argument is required")?;

    info!(event = "cli.completions_started", shell = %shell);

    let mut cli = app::build_cli();
    clap_complete::generate(shell, &mut cli, "drover", &mut std::io::stdout());
    Ok(())
}
