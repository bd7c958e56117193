pub mod config;
pub mod dry_run_mode;
pub mod error;
pub mod run_outcome;
