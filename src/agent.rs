//! Review run orchestration.
//!
//! [`ReviewAgent`] drives the whole pipeline once: retrieve the diff, build
//! the prompt, call the model, persist the review. Failures never propagate
//! past [`ReviewAgent::run`]; they are logged and reported in the returned
//! [`RunOutcome`] so callers can tell which stage failed without parsing logs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReviewConfig;
use crate::constants::artifacts;
use crate::error::{BrevError, Result};
use crate::git::GitOperations;
use crate::git::diff::DiffRetriever;
use crate::llm::LLMProvider;
use crate::llm::prompt::build_review_messages;

/// Result of one review run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Both artifacts were written.
    Completed {
        diff_path: PathBuf,
        review_path: PathBuf,
    },
    /// The diff stage failed; no artifact was written and the model was
    /// never invoked.
    DiffFailed { error: BrevError },
    /// The diff was produced but the completion call or the review write
    /// failed; no review artifact was written or updated.
    ReviewFailed {
        diff_path: PathBuf,
        error: BrevError,
    },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

/// Orchestrates a single review run.
pub struct ReviewAgent {
    config: ReviewConfig,
    retriever: DiffRetriever,
}

impl ReviewAgent {
    pub fn new(config: ReviewConfig) -> Self {
        let retriever = DiffRetriever::new(&config.output_dir);
        Self { config, retriever }
    }

    /// Path the review artifact is written to.
    pub fn review_path(&self) -> PathBuf {
        self.config.output_dir.join(artifacts::REVIEW_FILE)
    }

    /// Runs the pipeline once. Never returns an error; both failure modes are
    /// terminal for the run and encoded in the outcome.
    pub async fn run(&self, git: &dyn GitOperations, llm: &dyn LLMProvider) -> RunOutcome {
        let diff_path = match self.retriever.retrieve(git, &self.config.branch) {
            Ok(path) => path,
            Err(error) => {
                tracing::error!("Diff retrieval failed: {}", error);
                return RunOutcome::DiffFailed { error };
            }
        };

        match self.generate_review(&diff_path, llm).await {
            Ok(review_path) => RunOutcome::Completed {
                diff_path,
                review_path,
            },
            Err(error) => {
                tracing::error!("Error generating or saving review: {}", error);
                RunOutcome::ReviewFailed { diff_path, error }
            }
        }
    }

    async fn generate_review(&self, diff_path: &Path, llm: &dyn LLMProvider) -> Result<PathBuf> {
        let diff = fs::read_to_string(diff_path)?;
        let messages = build_review_messages(&diff, self.config.system_prompt.as_deref());

        let review = llm.complete(&messages).await?;

        // Written only after a successful completion, so a failed call never
        // touches the previous run's review.
        let review_path = self.review_path();
        fs::write(&review_path, review)?;

        tracing::info!("Code review comments saved to {}", review_path.display());
        Ok(review_path)
    }
}
