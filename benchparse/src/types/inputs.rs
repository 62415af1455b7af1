// ============================================================================
// CASE INPUTS - Everything after the top-level name
// ============================================================================

use super::variable::{NamedVariable, PathComponent, PathSegment};
use crate::config::constants::naming::{CONCURRENCY_SEPARATOR, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs of one sub-benchmark.
///
/// A full name `BenchmarkMyType/some_method/foo=2/bar=baz-4` has
/// segments `[some_method]`, variables `[foo=2, bar=baz]` and
/// concurrency 4. Variables and segments share one position space, so
/// rendering interleaves them by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInputs {
    pub variables: Vec<NamedVariable>,
    pub segments: Vec<PathSegment>,
    pub concurrency: usize,
}

impl Default for CaseInputs {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
            segments: Vec::new(),
            concurrency: 1,
        }
    }
}

impl CaseInputs {
    pub fn new(
        variables: Vec<NamedVariable>,
        segments: Vec<PathSegment>,
        concurrency: usize,
    ) -> Self {
        Self {
            variables,
            segments,
            concurrency,
        }
    }

    /// First variable with the given name
    pub fn variable(&self, name: &str) -> Option<&NamedVariable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    /// Variables and segments merged in path order
    pub fn components(&self) -> Vec<&dyn PathComponent> {
        let mut components: Vec<&dyn PathComponent> = self
            .variables
            .iter()
            .map(|variable| variable as &dyn PathComponent)
            .chain(
                self.segments
                    .iter()
                    .map(|segment| segment as &dyn PathComponent),
            )
            .collect();
        components.sort_by_key(|component| component.position());
        components
    }
}

impl fmt::Display for CaseInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in self.components() {
            write!(f, "{}{}", PATH_SEPARATOR, component)?;
        }
        if self.concurrency > 1 {
            write!(f, "{}{}", CONCURRENCY_SEPARATOR, self.concurrency)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypedValue;

    fn sample_inputs(concurrency: usize) -> CaseInputs {
        CaseInputs::new(
            vec![
                NamedVariable::new("y", TypedValue::from("sin(x)"), 2),
                NamedVariable::new("delta", TypedValue::Float(0.001), 4),
            ],
            vec![PathSegment::new("areaUnder", 1), PathSegment::new("fast", 3)],
            concurrency,
        )
    }

    #[test]
    fn test_display_interleaves_by_position() {
        assert_eq!(
            sample_inputs(4).to_string(),
            "/areaUnder/y=sin(x)/fast/delta=0.001-4"
        );
    }

    #[test]
    fn test_display_omits_single_concurrency() {
        assert_eq!(
            sample_inputs(1).to_string(),
            "/areaUnder/y=sin(x)/fast/delta=0.001"
        );
    }

    #[test]
    fn test_default_and_lookup() {
        let inputs = CaseInputs::default();
        assert_eq!(inputs.concurrency, 1);
        assert_eq!(inputs.to_string(), "");

        let inputs = sample_inputs(1);
        assert_eq!(inputs.variable("delta").map(|v| v.position), Some(4));
        assert!(inputs.variable("x").is_none());
    }
}
