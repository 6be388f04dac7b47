//! Interactive stdin-backed prompter for the publish pipeline.

use std::io::{BufRead, Write};

use drover_core::Prompter;

/// Asks questions on stderr and reads answers from stdin.
///
/// Writes prompts to stderr so they never mix with pipeable stdout output.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        let stdin = std::io::stdin();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        eprint!("{question} [y/N]: ");
        let _ = std::io::stderr().flush();
        matches!(
            self.read_line().as_deref(),
            Some("y") | Some("Y") | Some("yes") | Some("Yes")
        )
    }

    fn remote_url(&mut self) -> Option<String> {
        eprint!("Remote URL (press Enter to skip): ");
        let _ = std::io::stderr().flush();
        self.read_line().filter(|line| !line.is_empty())
    }
}
