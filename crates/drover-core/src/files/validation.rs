//! Name validation applied before any filesystem call.

use crate::files::errors::FileError;

/// Characters rejected in any path component.
pub const BLOCKED_CHARS: [char; 8] = ['<', '>', ':', '"', '\\', '|', '?', '*'];

/// Maximum length of a single path component, in bytes.
pub const MAX_COMPONENT_LEN: usize = 255;

/// Validate a caller-supplied relative path.
///
/// Splits on `/` and validates each component: non-empty, no blocked or
/// control characters, no `..` traversal, at most 255 bytes. Absolute paths
/// are rejected so every entry stays inside the workspace.
pub fn validate_relative_path(path: &str) -> Result<(), FileError> {
    if path.is_empty() {
        return Err(invalid(path, "name cannot be empty"));
    }
    if path.starts_with('/') {
        return Err(invalid(path, "absolute paths are not allowed"));
    }

    for component in path.split('/') {
        validate_component(path, component)?;
    }
    Ok(())
}

fn validate_component(full: &str, component: &str) -> Result<(), FileError> {
    if component.is_empty() {
        return Err(invalid(full, "empty path component"));
    }
    if component == ".." {
        return Err(invalid(full, "'..' components are not allowed"));
    }
    if component.len() > MAX_COMPONENT_LEN {
        return Err(FileError::NameTooLong {
            length: component.len(),
            max: MAX_COMPONENT_LEN,
        });
    }
    if let Some(bad) = component.chars().find(|c| BLOCKED_CHARS.contains(c)) {
        return Err(invalid(full, &format!("character '{bad}' is not allowed")));
    }
    if component.chars().any(char::is_control) {
        return Err(invalid(full, "control characters are not allowed"));
    }
    Ok(())
}

fn invalid(name: &str, message: &str) -> FileError {
    FileError::InvalidName {
        name: name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_relative_path("main.py").is_ok());
        assert!(validate_relative_path("two-sum/solution.rs").is_ok());
        assert!(validate_relative_path(".gitignore").is_ok());
    }

    #[test]
    fn test_rejects_every_blocked_char() {
        for c in BLOCKED_CHARS {
            let name = format!("bad{c}name.txt");
            assert!(
                matches!(
                    validate_relative_path(&name),
                    Err(FileError::InvalidName { .. })
                ),
                "expected '{c}' to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_and_absolute() {
        assert!(validate_relative_path("").is_err());
        assert!(validate_relative_path("/etc/passwd").is_err());
        assert!(validate_relative_path("a//b").is_err());
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(validate_relative_path("../outside.txt").is_err());
        assert!(validate_relative_path("dir/../../outside.txt").is_err());
    }

    #[test]
    fn test_rejects_overlong_component() {
        let long = "a".repeat(MAX_COMPONENT_LEN + 1);
        assert!(matches!(
            validate_relative_path(&long),
            Err(FileError::NameTooLong { .. })
        ));
        let at_limit = "a".repeat(MAX_COMPONENT_LEN);
        assert!(validate_relative_path(&at_limit).is_ok());
    }

    #[test]
    fn test_rejects_control_chars() {
        assert!(validate_relative_path("bad\nname.txt").is_err());
    }
}
