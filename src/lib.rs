//! Gutlog is a private, locally-run symptom diary core.
//!
//! Structured daily entries (pain, bowel movements, eating, medications,
//! notes) live behind the [`db::LogRepository`] capability; the
//! [`analytics`] module turns a fetched working set into trend series,
//! rankings, and heuristic pattern insights for the history view.

pub mod analytics;
pub mod config;
pub mod db;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the crate. Honors RUST_LOG,
/// falling back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
