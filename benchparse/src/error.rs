//! Crate-level error type

use crate::comparison::{ComparisonError, ComparisonErrorKind};
use crate::config::ConfigError;
use crate::parser::{FilterError, NameError};
use crate::types::MeasurementNotPresent;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error("malformed filter: {0}")]
    MalformedFilter(#[from] FilterError),

    #[error("malformed case name: {0}")]
    MalformedName(#[from] NameError),

    #[error(transparent)]
    MeasurementNotPresent(#[from] MeasurementNotPresent),

    #[error("line {line_number}: not a test event envelope: {source}")]
    Envelope {
        line_number: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line_number}: exceeds the {limit} byte line limit")]
    LineTooLong { line_number: usize, limit: usize },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BenchError {
    /// Underlying comparison failure kind, if this is a comparison error
    pub fn comparison_kind(&self) -> Option<ComparisonErrorKind> {
        match self {
            BenchError::Comparison(err) => Some(err.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Unit;

    #[test]
    fn test_comparison_kind() {
        let err = BenchError::from(ComparisonError::new(
            "y=sin(x)",
            "==",
            "y=2",
            ComparisonErrorKind::NonComparable,
        ));
        assert_eq!(err.comparison_kind(), Some(ComparisonErrorKind::NonComparable));
        assert_eq!(
            err.to_string(),
            "cannot evaluate (y=sin(x))==(y=2): values cannot be compared"
        );
    }

    #[test]
    fn test_messages() {
        let err = BenchError::from(FilterError::Malformed {
            expression: "y,2".to_string(),
        });
        assert!(err.to_string().contains("'y,2'"));
        assert_eq!(err.comparison_kind(), None);

        let err = BenchError::from(MeasurementNotPresent { unit: Unit::MbPerS });
        assert_eq!(err.to_string(), "MB/s: not measured");
    }
}
