//! Shared infrastructure for pseudobin tools
//!
//! Currently this is the logging bootstrap every binary starts with.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{init_logging, LogConfig, LogFormat};
