//! # brev
//!
//! AI-powered git branch diff reviewer.
//!
//! brev computes the diff between a target branch and the repository's remote
//! default branch, asks an LLM for a code review, and writes both the diff and
//! the review text to files.
//!
//! ## Pipeline
//! resolve default branch → `git diff` → persist `diff.txt` → completion call
//! → persist `comments.txt`. One linear pass per invocation, no state kept
//! between runs; each run overwrites the previous run's artifacts.
//!
//! ## Quick start
//! ```bash
//! cargo install brev
//!
//! # ~/.config/brev/config.toml
//! # [review]
//! # repo_path = "path/to/repo"
//! # branch = "feature/login"
//! #
//! # [llm.providers.openai]
//! # api_key = "sk-..."
//!
//! brev
//! ```
//!
//! ## Core modules
//! - [`git`] - default-branch resolution and diff retrieval
//! - [`llm`] - provider interface and implementations
//! - [`agent`] - run orchestration and outcome reporting
//! - [`config`] - configuration loading
//! - [`error`] - unified error type

pub mod agent;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
