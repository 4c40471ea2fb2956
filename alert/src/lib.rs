//! Daily job alert
//!
//! Wires the board scraper to the digest mailer: one search per configured
//! term, one email per run.

pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::{Config, ConfigError};
pub use pipeline::{connect, run, start, RunStatus};
