pub mod diff;
pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git operations needed by the review pipeline.
///
/// Abstracts the two git invocations a run performs, so the pipeline can be
/// exercised against a mock (via `mockall`). Main implementation:
/// [`GitRepository`](repository::GitRepository).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// Resolves the remote default branch name.
    ///
    /// Equivalent to `git symbolic-ref refs/remotes/origin/HEAD`, reduced to
    /// the final path segment (e.g. `refs/remotes/origin/main` -> `main`).
    ///
    /// # Errors
    /// - [`BrevError::GitCommand`] when the ref does not exist or git exits
    ///   non-zero
    ///
    /// [`BrevError::GitCommand`]: crate::error::BrevError::GitCommand
    fn resolve_default_branch(&self) -> Result<String>;

    /// Returns the diff between two branch references.
    ///
    /// Equivalent to `git diff <base> <branch>` run inside the repository,
    /// with stdout captured as text. An empty diff is a valid result.
    fn branch_diff(&self, base: &str, branch: &str) -> Result<String>;
}
