//! Test helpers for creating git repositories with known state.
//!
//! These functions wrap git2 operations so test code outside this crate
//! doesn't need to import git2 directly. Repositories are pinned to a
//! "main" initial branch and get a local test identity so CLI commits work
//! on machines without global git config.

use std::path::Path;

use git2::{Repository, RepositoryInitOptions, Signature};

use crate::errors::GitError;

/// Initialize an empty repository at `path` with branch "main" and a local
/// test identity.
pub fn init_repo(path: &Path) -> Result<(), GitError> {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(path, &opts)?;
    set_test_identity(&repo)?;
    Ok(())
}

/// Initialize a repository at `path` with an initial empty commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    init_repo(path)?;
    let repo = Repository::open(path)?;
    let sig = test_signature()?;
    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
    Ok(())
}

/// Write a file, stage it, and commit it.
pub fn commit_file(
    repo_path: &Path,
    filename: &str,
    content: &str,
    message: &str,
) -> Result<(), GitError> {
    std::fs::write(repo_path.join(filename), content)?;
    let repo = Repository::open(repo_path)?;
    let mut index = repo.index()?;
    index.add_path(Path::new(filename))?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let sig = test_signature()?;
    let parent = repo.head()?.peel_to_commit()?;
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])?;
    Ok(())
}

/// Write a file and stage it without committing.
pub fn stage_file(repo_path: &Path, filename: &str, content: &str) -> Result<(), GitError> {
    std::fs::write(repo_path.join(filename), content)?;
    let repo = Repository::open(repo_path)?;
    let mut index = repo.index()?;
    index.add_path(Path::new(filename))?;
    index.write()?;
    Ok(())
}

/// Add a named remote without going through the CLI gateway.
pub fn add_remote(repo_path: &Path, name: &str, url: &str) -> Result<(), GitError> {
    let repo = Repository::open(repo_path)?;
    repo.remote(name, url)?;
    Ok(())
}

/// Create a bare repository usable as a push target, returning its URL.
pub fn create_bare_remote(path: &Path) -> Result<String, GitError> {
    Repository::init_bare(path)?;
    Ok(path.display().to_string())
}

/// Detach HEAD at the current commit.
pub fn detach_head(repo_path: &Path) -> Result<(), GitError> {
    let repo = Repository::open(repo_path)?;
    let oid = repo.head()?.peel_to_commit()?.id();
    repo.set_head_detached(oid)?;
    Ok(())
}

fn set_test_identity(repo: &Repository) -> Result<(), GitError> {
    let mut config = repo.config()?;
    config.set_str("user.name", "Test User")?;
    config.set_str("user.email", "test@test.com")?;
    Ok(())
}

fn test_signature() -> Result<Signature<'static>, GitError> {
    Ok(Signature::now("Test User", "test@test.com")?)
}
