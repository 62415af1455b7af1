use std::num::ParseIntError;

/// Case name decomposition errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NameError {
    #[error("case name '{name}' does not start with '{prefix}' followed by a name")]
    PrefixMismatch { name: String, prefix: String },

    #[error("case name '{name}' has invalid concurrency suffix '{suffix}': {source}")]
    InvalidConcurrency {
        name: String,
        suffix: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot build case name pattern for prefix '{prefix}': {source}")]
    InvalidPattern {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}
