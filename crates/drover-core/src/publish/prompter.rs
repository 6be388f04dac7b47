//! Decision seam between the pipeline and the presentation layer.

/// Supplies the yes/no decisions and remote URLs the pipeline cannot decide
/// on its own. The CLI implements this over stdin; tests script it.
pub trait Prompter {
    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&mut self, question: &str) -> bool;

    /// Ask for a remote URL. `None` means the user supplied none.
    fn remote_url(&mut self) -> Option<String>;
}

/// Prompter that answers from pre-recorded scripts. Test-only by intent,
/// but also backs `--yes` style non-interactive runs.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: Vec<bool>,
    urls: Vec<Option<String>>,
}

impl ScriptedPrompter {
    pub fn new(confirms: Vec<bool>, urls: Vec<Option<String>>) -> Self {
        // Answers are consumed back-to-front; store reversed.
        Self {
            confirms: confirms.into_iter().rev().collect(),
            urls: urls.into_iter().rev().collect(),
        }
    }

    /// Prompter that confirms everything and never supplies a URL.
    pub fn always_yes() -> Self {
        Self {
            confirms: Vec::new(),
            urls: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, _question: &str) -> bool {
        // Exhausted scripts default to yes so `always_yes` works unscripted.
        self.confirms.pop().unwrap_or(true)
    }

    fn remote_url(&mut self) -> Option<String> {
        self.urls.pop().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompter = ScriptedPrompter::new(
            vec![true, false],
            vec![Some("https://example.com/a.git".to_string()), None],
        );
        assert!(prompter.confirm("first?"));
        assert!(!prompter.confirm("second?"));
        assert_eq!(
            prompter.remote_url().as_deref(),
            Some("https://example.com/a.git")
        );
        assert_eq!(prompter.remote_url(), None);
    }

    #[test]
    fn test_always_yes_defaults() {
        let mut prompter = ScriptedPrompter::always_yes();
        assert!(prompter.confirm("anything?"));
        assert_eq!(prompter.remote_url(), None);
    }
}
