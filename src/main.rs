use anyhow::Result;

use brev::agent::{ReviewAgent, RunOutcome};
use brev::config;
use brev::git::repository::GitRepository;
use brev::llm::provider::create_provider;
use tokio::runtime::Runtime;

// No CLI surface: everything is driven by configuration
// (~/.config/brev/config.toml and BREV__* environment variables).
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config::load_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            if let Some(suggestion) = e.suggestion() {
                tracing::info!("{}", suggestion);
            }
            return Ok(());
        }
    };

    let provider = match create_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("{}", e);
            if let Some(suggestion) = e.suggestion() {
                tracing::info!("{}", suggestion);
            }
            return Ok(());
        }
    };

    let git = GitRepository::new(&config.review.repo_path);
    let agent = ReviewAgent::new(config.review.clone());

    let rt = Runtime::new()?;
    let outcome = rt.block_on(agent.run(&git, provider.as_ref()));

    // Failures were already logged inside the run; the process still exits
    // normally either way, with the log stream as the only failure signal.
    match outcome {
        RunOutcome::Completed {
            diff_path,
            review_path,
        } => {
            tracing::info!(
                "Review complete: {} and {}",
                diff_path.display(),
                review_path.display()
            );
        }
        RunOutcome::DiffFailed { error } => {
            if let Some(suggestion) = error.suggestion() {
                tracing::info!("{}", suggestion);
            }
        }
        RunOutcome::ReviewFailed { error, .. } => {
            if let Some(suggestion) = error.suggestion() {
                tracing::info!("{}", suggestion);
            }
        }
    }

    Ok(())
}
