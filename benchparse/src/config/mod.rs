//! Configuration module for benchparse
//!
//! Compile-time limits live in [`constants`]; user preferences that may be
//! set from a TOML file or the environment live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::{InputFormat, LoggingPreferences, ParserPreferences, RuntimeConfig};

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}
