//! Global constants.

/// LLM sampling defaults.
pub mod llm {
    /// Default max output tokens for a review completion.
    pub const DEFAULT_MAX_TOKENS: u32 = 4000;

    /// Default sampling temperature.
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
}

/// Git defaults.
pub mod git {
    /// Base branch used when `refs/remotes/origin/HEAD` cannot be resolved.
    pub const FALLBACK_DEFAULT_BRANCH: &str = "main";
}

/// Run artifact file names, relative to the configured output directory.
pub mod artifacts {
    /// Raw diff text, overwritten each run.
    pub const DIFF_FILE: &str = "diff.txt";

    /// Raw review text, overwritten each run.
    pub const REVIEW_FILE: &str = "comments.txt";
}
