//! Filesystem operations scoped to a workspace root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::files::errors::FileError;
use crate::files::validation::validate_relative_path;
use crate::templates::TemplateRegistry;

/// Explicit workspace root passed to every filesystem operation.
///
/// Replaces a hidden process-wide current-directory cursor: the caller owns
/// exactly one of these and threads it through, so nothing in the library
/// reads or mutates global state.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    root: PathBuf,
}

impl WorkspaceContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a validated relative path against the workspace root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, FileError> {
        validate_relative_path(relative)?;
        Ok(self.root.join(relative))
    }

    /// Create a directory under the root. Idempotent: an existing directory
    /// is not an error.
    pub fn create_dir(&self, name: &str) -> Result<PathBuf, FileError> {
        let path = self.resolve(name)?;
        fs::create_dir_all(&path)?;
        info!(event = "core.files.dir_created", path = %path.display());
        Ok(path)
    }

    /// Write UTF-8 text to a file under the root.
    ///
    /// Refuses to clobber an existing file unless `overwrite` is set.
    pub fn write_file(
        &self,
        relative: &str,
        content: &str,
        overwrite: bool,
    ) -> Result<PathBuf, FileError> {
        let path = self.resolve(relative)?;
        if !overwrite && path.exists() {
            return Err(FileError::AlreadyExists {
                path: path.display().to_string(),
            });
        }
        fs::write(&path, content)?;
        info!(
            event = "core.files.file_written",
            path = %path.display(),
            bytes = content.len()
        );
        Ok(path)
    }

    /// Create `dir` (when given) and a file inside it, filling in the
    /// extension's template when the caller supplies no content.
    ///
    /// Explicit content is written byte-identically; the template default
    /// only applies when `content` is `None` or empty.
    pub fn scaffold_file(
        &self,
        dir: Option<&str>,
        filename: &str,
        content: Option<&str>,
        registry: &TemplateRegistry,
        overwrite: bool,
    ) -> Result<PathBuf, FileError> {
        validate_relative_path(filename)?;

        let relative = match dir {
            Some(d) => {
                self.create_dir(d)?;
                format!("{d}/{filename}")
            }
            None => filename.to_string(),
        };

        let body = match content {
            Some(text) if !text.is_empty() => text,
            _ => registry.resolve_for_filename(filename),
        };
        self.write_file(&relative, body, overwrite)
    }

    /// List files and directories directly under `dir` (or the root),
    /// both sorted by name.
    pub fn list_entries(&self, dir: Option<&str>) -> Result<(Vec<String>, Vec<String>), FileError> {
        let path = match dir {
            Some(d) => self.resolve(d)?,
            None => self.root.clone(),
        };

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }
        files.sort_unstable();
        dirs.sort_unstable();
        Ok((files, dirs))
    }

    /// Rename an entry. Fails if the destination already exists.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), FileError> {
        let old_path = self.resolve(old)?;
        let new_path = self.resolve(new)?;

        if !old_path.exists() {
            return Err(FileError::NotFound {
                path: old_path.display().to_string(),
            });
        }
        if new_path.exists() {
            return Err(FileError::AlreadyExists {
                path: new_path.display().to_string(),
            });
        }
        fs::rename(&old_path, &new_path)?;
        info!(
            event = "core.files.renamed",
            from = %old_path.display(),
            to = %new_path.display()
        );
        Ok(())
    }

    /// Delete a file or directory (recursively).
    pub fn delete(&self, relative: &str) -> Result<(), FileError> {
        let path = self.resolve(relative)?;
        if !path.exists() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            });
        }
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        info!(event = "core.files.deleted", path = %path.display());
        Ok(())
    }

    /// Size in bytes of a file under the root.
    pub fn entry_size(&self, relative: &str) -> Result<u64, FileError> {
        let path = self.resolve(relative)?;
        Ok(fs::metadata(&path)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx() -> (TempDir, WorkspaceContext) {
        let dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::new(dir.path());
        (dir, ctx)
    }

    #[test]
    fn test_create_dir_is_idempotent() {
        let (_dir, ctx) = ctx();
        ctx.create_dir("two-sum").unwrap();
        ctx.create_dir("two-sum").unwrap();
        assert!(ctx.root().join("two-sum").is_dir());
    }

    #[test]
    fn test_invalid_name_mutates_nothing() {
        let (_dir, ctx) = ctx();
        let before: Vec<_> = std::fs::read_dir(ctx.root()).unwrap().collect();
        assert!(before.is_empty());

        assert!(ctx.create_dir("bad|dir").is_err());
        assert!(ctx.write_file("bad?.txt", "x", false).is_err());

        let after: Vec<_> = std::fs::read_dir(ctx.root()).unwrap().collect();
        assert!(after.is_empty());
    }

    #[test]
    fn test_write_file_roundtrip() {
        let (_dir, ctx) = ctx();
        let content = "explicit content\nline two\n";
        let path = ctx.write_file("a.txt", content, false).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn test_write_file_refuses_overwrite_by_default() {
        let (_dir, ctx) = ctx();
        ctx.write_file("a.txt", "one", false).unwrap();
        assert!(matches!(
            ctx.write_file("a.txt", "two", false),
            Err(FileError::AlreadyExists { .. })
        ));
        ctx.write_file("a.txt", "two", true).unwrap();
        assert_eq!(
            std::fs::read_to_string(ctx.root().join("a.txt")).unwrap(),
            "two"
        );
    }

    #[test]
    fn test_scaffold_applies_template_only_without_content() {
        let (_dir, ctx) = ctx();
        let registry = TemplateRegistry::builtin();

        let path = ctx
            .scaffold_file(Some("dsa"), "solution.py", None, &registry, false)
            .unwrap();
        assert!(
            std::fs::read_to_string(&path)
                .unwrap()
                .contains("print('Hello World!')")
        );

        let path = ctx
            .scaffold_file(None, "custom.py", Some("x = 1\n"), &registry, false)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x = 1\n");
    }

    #[test]
    fn test_list_entries_sorted() {
        let (_dir, ctx) = ctx();
        ctx.create_dir("zeta").unwrap();
        ctx.create_dir("alpha").unwrap();
        ctx.write_file("b.txt", "b", false).unwrap();
        ctx.write_file("a.txt", "a", false).unwrap();

        let (files, dirs) = ctx.list_entries(None).unwrap();
        assert_eq!(files, vec!["a.txt", "b.txt"]);
        assert_eq!(dirs, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_rename_refuses_existing_destination() {
        let (_dir, ctx) = ctx();
        ctx.write_file("a.txt", "a", false).unwrap();
        ctx.write_file("b.txt", "b", false).unwrap();

        assert!(matches!(
            ctx.rename("a.txt", "b.txt"),
            Err(FileError::AlreadyExists { .. })
        ));
        ctx.rename("a.txt", "c.txt").unwrap();
        assert!(!ctx.root().join("a.txt").exists());
        assert!(ctx.root().join("c.txt").exists());
    }

    #[test]
    fn test_delete_file_and_dir() {
        let (_dir, ctx) = ctx();
        ctx.write_file("a.txt", "a", false).unwrap();
        ctx.create_dir("nested").unwrap();
        ctx.write_file("nested/b.txt", "b", false).unwrap();

        ctx.delete("a.txt").unwrap();
        ctx.delete("nested").unwrap();
        assert!(!ctx.root().join("a.txt").exists());
        assert!(!ctx.root().join("nested").exists());

        assert!(matches!(
            ctx.delete("gone.txt"),
            Err(FileError::NotFound { .. })
        ));
    }

    #[test]
    fn test_entry_size() {
        let (_dir, ctx) = ctx();
        ctx.write_file("a.txt", "12345", false).unwrap();
        assert_eq!(ctx.entry_size("a.txt").unwrap(), 5);
    }
}
