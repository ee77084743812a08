//! Utility functions shared across the crate

pub mod logging;

pub use logging::{init_logging, log_rejection, log_triage_outcome};
