use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::workspace_context;
use crate::color;
use crate::table::Table;

pub(crate) fn handle_ls_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let dir = matches.get_one::<String>("dir").map(|s| s.as_str());
    let ctx = workspace_context()?;

    info!(event = "cli.ls_started", dir = ?dir);

    let (files, dirs) = match ctx.list_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(event = "cli.ls_failed", error = %e);
            return Err(e.into());
        }
    };

    let mut table = Table::new(&["Type", "Name", "Size"]);
    for name in &dirs {
        table.add_row(vec!["dir".to_string(), name.clone(), "-".to_string()]);
    }
    for name in &files {
        let relative = match dir {
            Some(d) => format!("{d}/{name}"),
            None => name.clone(),
        };
        let size = ctx
            .entry_size(&relative)
            .map(|bytes| bytes.to_string())
            .unwrap_or_else(|_| "-".to_string());
        table.add_row(vec!["file".to_string(), name.clone(), size]);
    }

    if table.is_empty() {
        println!("{}", color::muted("(empty)"));
        return Ok(());
    }
    print!("{}", table.render());

    info!(
        event = "cli.ls_completed",
        files = files.len(),
        dirs = dirs.len()
    );
    Ok(())
}
