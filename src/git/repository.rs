use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BrevError, Result};
use crate::git::GitOperations;

/// Git repository accessed through the `git` CLI.
///
/// Shells out instead of linking libgit2 so that the resolved default branch
/// and diff output match what the user's git produces exactly, including any
/// diff drivers and attributes configured for the repository.
pub struct GitRepository {
    repo_path: PathBuf,
}

impl GitRepository {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// Runs a git subcommand in the repository and captures stdout as text.
    ///
    /// Non-zero exit status is an error carrying stderr (falling back to
    /// stdout, where some git errors end up).
    fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let error_msg = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(BrevError::GitCommand(format!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                error_msg
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitOperations for GitRepository {
    fn resolve_default_branch(&self) -> Result<String> {
        let output = self.run_git(&["symbolic-ref", "refs/remotes/origin/HEAD"])?;
        let name = output
            .trim()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            return Err(BrevError::GitCommand(
                "git symbolic-ref returned an empty ref".to_string(),
            ));
        }
        Ok(name)
    }

    fn branch_diff(&self, base: &str, branch: &str) -> Result<String> {
        self.run_git(&["diff", base, branch])
    }
}
