//! # Similarity Drop Switch Library
//!
//! Switch detection for verbal fluency lists:
//! - Per-position switch labels (Similarity Drop method, Hills, Jones & Todd 2012)
//! - Error types
//! - TOML configuration loading
//! - Tracing subscriber bootstrap

pub mod config;
pub mod error;
pub mod logging;
pub mod switch;

pub use error::{Error, Result};
pub use switch::{classify_switches, SwitchClassifier, SwitchLabel};
