//! Named variables and free path segments of a decomposed case name

use super::value::TypedValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything occupying a slot in the slash-separated case path
pub trait PathComponent: fmt::Display {
    /// Zero-based index in the path; the top-level name is index 0
    fn position(&self) -> usize;
}

/// A `name=value` component of a case name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVariable {
    pub name: String,
    pub value: TypedValue,
    pub position: usize,
}

impl NamedVariable {
    pub fn new(name: impl Into<String>, value: TypedValue, position: usize) -> Self {
        Self {
            name: name.into(),
            value,
            position,
        }
    }
}

impl PathComponent for NamedVariable {
    fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for NamedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A component that is not of the `name=value` form, e.g. a method name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSegment {
    pub name: String,
    pub position: usize,
}

impl PathSegment {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

impl PathComponent for PathSegment {
    fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_display() {
        let delta = NamedVariable::new("delta", TypedValue::Float(0.001), 3);
        assert_eq!(delta.to_string(), "delta=0.001");
        assert_eq!(delta.position(), 3);

        let y = NamedVariable::new("y", TypedValue::from("sin(x)"), 2);
        assert_eq!(y.to_string(), "y=sin(x)");
    }

    #[test]
    fn test_segment_display() {
        let segment = PathSegment::new("areaUnder", 1);
        assert_eq!(segment.to_string(), "areaUnder");
        assert_eq!(segment.position(), 1);
    }
}
