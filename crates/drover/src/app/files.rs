use clap::{Arg, ArgAction, Command};

pub fn new_command() -> Command {
    Command::new("new")
        .about("Create a file from its extension's template")
        .arg(
            Arg::new("file")
                .help("File name with extension (e.g. solution.py)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .help("Directory to create the file in (created if missing)"),
        )
        .arg(
            Arg::new("content")
                .long("content")
                .short('c')
                .help("Explicit file content (skips the template)"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Overwrite the file if it already exists")
                .action(ArgAction::SetTrue),
        )
}

pub fn ls_command() -> Command {
    Command::new("ls")
        .about("List files and directories in the workspace")
        .arg(
            Arg::new("dir")
                .help("Subdirectory to list (defaults to the workspace root)")
                .index(1),
        )
}

pub fn mv_command() -> Command {
    Command::new("mv")
        .about("Rename a file or directory")
        .arg(
            Arg::new("old")
                .help("Current name")
                .required(true)
                .index(1),
        )
        .arg(Arg::new("new").help("New name").required(true).index(2))
}

pub fn rm_command() -> Command {
    Command::new("rm")
        .about("Delete a file or directory")
        .arg(
            Arg::new("path")
                .help("Entry to delete")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Delete without asking for confirmation")
                .action(ArgAction::SetTrue),
        )
}

pub fn templates_command() -> Command {
    Command::new("templates").about("List known file templates")
}
