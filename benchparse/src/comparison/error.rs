//! Comparison errors

/// Why two named variables could not be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ComparisonErrorKind {
    /// The variables do not refer to the same input; filters skip these
    #[error("variables have different names")]
    DifferentNames,

    #[error("values cannot be compared")]
    NonComparable,

    /// Same kind, but the kind has no ordering (booleans)
    #[error("operation not defined for values")]
    OperationNotDefined,

    #[error("invalid comparison operation")]
    InvalidOperation,
}

/// A failed comparison, carrying both operands rendered as `name=value`
/// and the operator symbol as written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot evaluate ({left}){operator}({right}): {kind}")]
pub struct ComparisonError {
    pub left: String,
    pub operator: String,
    pub right: String,
    #[source]
    pub kind: ComparisonErrorKind,
}

impl ComparisonError {
    pub fn new(
        left: impl ToString,
        operator: impl ToString,
        right: impl ToString,
        kind: ComparisonErrorKind,
    ) -> Self {
        Self {
            left: left.to_string(),
            operator: operator.to_string(),
            right: right.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> ComparisonErrorKind {
        self.kind
    }

    pub fn is_different_names(&self) -> bool {
        self.kind == ComparisonErrorKind::DifferentNames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_message_carries_operands() {
        let err = ComparisonError::new(
            "y=sin(x)",
            "==",
            "y=2",
            ComparisonErrorKind::NonComparable,
        );
        assert_eq!(
            err.to_string(),
            "cannot evaluate (y=sin(x))==(y=2): values cannot be compared"
        );
    }

    #[test]
    fn test_source_is_kind() {
        let err = ComparisonError::new("a=1", "<", "b=1", ComparisonErrorKind::DifferentNames);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("variables have different names"));
        assert!(err.is_different_names());
    }
}
