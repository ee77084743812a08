//! Logging utilities
//!
//! This module provides logger setup and standardized log lines for triage outcomes.

use crate::models::triage::TriageResult;

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init();
}

/// Log a triage outcome with consistent format
///
/// # Arguments
/// * `context` - Where the outcome was produced (e.g., "intake", "nursing")
/// * `national_id` - Patient the outcome belongs to
/// * `result` - The outcome
pub fn log_triage_outcome(context: &str, national_id: &str, result: &TriageResult) {
    log::info!(
        "[{}] {} -> {} ({}; keywords: {})",
        context,
        national_id,
        result.tier,
        result.counts,
        result.keyword_summary()
    );
}

/// Log a rejected input with consistent format
///
/// # Arguments
/// * `context` - Where the input was rejected
/// * `error` - Why it was rejected
pub fn log_rejection(context: &str, error: &dyn std::error::Error) {
    log::warn!("[{context}] rejected input: {error}");
}
