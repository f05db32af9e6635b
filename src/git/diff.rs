use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{artifacts, git as git_constants};
use crate::error::Result;
use crate::git::GitOperations;

/// Retrieves the diff between a branch and the repository's default branch
/// and persists it as `diff.txt` in the output directory.
pub struct DiffRetriever {
    output_dir: PathBuf,
}

impl DiffRetriever {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path the diff artifact is written to.
    pub fn diff_path(&self) -> PathBuf {
        self.output_dir.join(artifacts::DIFF_FILE)
    }

    /// Computes and persists the diff, returning the artifact path.
    ///
    /// The default branch is resolved via `refs/remotes/origin/HEAD`; when that
    /// fails for any reason the literal fallback base
    /// [`FALLBACK_DEFAULT_BRANCH`](git_constants::FALLBACK_DEFAULT_BRANCH) is
    /// used and the diff is still attempted. The file holds exactly the diff
    /// command's stdout and is only written after the command succeeds, so a
    /// failed run never leaves a partial or stale-looking artifact behind.
    pub fn retrieve(&self, git: &dyn GitOperations, branch: &str) -> Result<PathBuf> {
        let base = match git.resolve_default_branch() {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    "Could not resolve default branch ({}), falling back to '{}'",
                    e,
                    git_constants::FALLBACK_DEFAULT_BRANCH
                );
                git_constants::FALLBACK_DEFAULT_BRANCH.to_string()
            }
        };

        let diff = git.branch_diff(&base, branch)?;

        let diff_path = self.diff_path();
        if let Some(parent) = diff_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&diff_path, &diff)?;

        tracing::info!(
            "Diff between '{}' and '{}' written to {}",
            base,
            branch,
            diff_path.display()
        );
        Ok(diff_path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
