//! Argument validation for git subprocess calls.

use crate::errors::GitError;

/// Validate a user-supplied git argument to prevent injection.
///
/// Rejects values that start with `-` (option injection), contain control
/// characters, or contain `::` sequences (refspec injection).
pub fn validate_git_arg(value: &str, label: &str) -> Result<(), GitError> {
    if value.is_empty() {
        return Err(GitError::InvalidArgument {
            label: label.to_string(),
            message: "cannot be empty".to_string(),
        });
    }
    if value.starts_with('-') {
        return Err(GitError::InvalidArgument {
            label: label.to_string(),
            message: format!("'{value}' must not start with '-'"),
        });
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(GitError::InvalidArgument {
            label: label.to_string(),
            message: "contains control characters".to_string(),
        });
    }
    if value.contains("::") {
        return Err(GitError::InvalidArgument {
            label: label.to_string(),
            message: "'::' sequences are not allowed".to_string(),
        });
    }
    Ok(())
}

/// Validate a branch name against git's naming rules.
pub fn validate_branch_name(branch: &str) -> Result<(), GitError> {
    validate_git_arg(branch, "branch name")?;
    if branch.contains("..") || branch.contains(' ') {
        return Err(GitError::InvalidArgument {
            label: "branch name".to_string(),
            message: format!("'{branch}' is not a valid branch name"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_dash_prefix() {
        let result = validate_git_arg("--upload-pack=evil", "remote name");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not start"));
    }

    #[test]
    fn test_rejects_control_chars() {
        assert!(validate_git_arg("main\nevil", "branch name").is_err());
        assert!(validate_git_arg("main\x00", "branch name").is_err());
    }

    #[test]
    fn test_rejects_double_colon() {
        assert!(validate_git_arg("refs::heads", "refspec").is_err());
    }

    #[test]
    fn test_accepts_valid_values() {
        assert!(validate_git_arg("origin", "remote name").is_ok());
        assert!(validate_git_arg("main", "branch name").is_ok());
        assert!(validate_git_arg("feature/login-form", "branch name").is_ok());
    }

    #[test]
    fn test_branch_name_rejects_dots_and_spaces() {
        assert!(validate_branch_name("a..b").is_err());
        assert!(validate_branch_name("my branch").is_err());
        assert!(validate_branch_name("release/1.2").is_ok());
    }
}
