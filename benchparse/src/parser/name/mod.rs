//! Case name decomposition
//!
//! `BenchmarkMath/areaUnder/y=sin(x)/delta=0.001000-4` becomes the
//! top-level name `BenchmarkMath`, the segment `areaUnder` at position 1,
//! the variables `y` and `delta` at positions 2 and 3, and concurrency 4.

pub mod error;

pub use error::NameError;

use crate::config::constants::naming::{
    DEFAULT_CASE_PREFIX, PATH_SEPARATOR, VARIABLE_SEPARATOR,
};
use crate::types::{infer, CaseInputs, NamedVariable, PathSegment};
use regex::Regex;
use std::sync::OnceLock;

/// Splits full case names for one case prefix
#[derive(Debug, Clone)]
pub struct NameDecomposer {
    prefix: String,
    pattern: Regex,
}

impl NameDecomposer {
    pub fn new(prefix: &str) -> Result<Self, NameError> {
        // Lazy body so a trailing `-<digits>` is left for the width group
        let pattern = Regex::new(&format!(
            r"^({}.+?)(?:-([0-9]+))?$",
            regex::escape(prefix)
        ))
        .map_err(|source| NameError::InvalidPattern {
            prefix: prefix.to_string(),
            source,
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split a full case name into its top-level name and inputs
    pub fn decompose(&self, full_name: &str) -> Result<(String, CaseInputs), NameError> {
        let captures =
            self.pattern
                .captures(full_name)
                .ok_or_else(|| NameError::PrefixMismatch {
                    name: full_name.to_string(),
                    prefix: self.prefix.clone(),
                })?;

        let concurrency = match captures.get(2) {
            Some(suffix) => {
                suffix
                    .as_str()
                    .parse::<usize>()
                    .map_err(|source| NameError::InvalidConcurrency {
                        name: full_name.to_string(),
                        suffix: suffix.as_str().to_string(),
                        source,
                    })?
            }
            None => 1,
        };

        // Group 1 is not optional, so it is present whenever the pattern matched
        let body = captures.get(1).map_or(full_name, |m| m.as_str());
        let mut components = body.split(PATH_SEPARATOR);
        let name = components.next().unwrap_or_default().to_string();

        let mut inputs = CaseInputs {
            concurrency,
            ..CaseInputs::default()
        };

        for (offset, component) in components.enumerate() {
            let position = offset + 1;
            let mut parts = component.split(VARIABLE_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    inputs
                        .variables
                        .push(NamedVariable::new(key, infer(value), position));
                }
                _ => inputs.segments.push(PathSegment::new(component, position)),
            }
        }

        Ok((name, inputs))
    }
}

static DEFAULT_DECOMPOSER: OnceLock<Result<NameDecomposer, NameError>> = OnceLock::new();

/// Decompose a name using the default `Benchmark` prefix
pub fn decompose(full_name: &str) -> Result<(String, CaseInputs), NameError> {
    DEFAULT_DECOMPOSER
        .get_or_init(|| NameDecomposer::new(DEFAULT_CASE_PREFIX))
        .as_ref()
        .map_err(Clone::clone)?
        .decompose(full_name)
}
