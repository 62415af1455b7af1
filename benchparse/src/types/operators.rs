use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// For comparisons between two named variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Equal,              // ==
    NotEqual,           // !=
    LessThan,           // <
    GreaterThan,        // >
    LessThanOrEqual,    // <=
    GreaterThanOrEqual, // >=
}

impl Comparison {
    /// Order in which filter expressions are scanned for an operator.
    /// Two-character operators come first since `<=` contains `<`.
    pub const PARSE_ORDER: [Comparison; 6] = [
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::LessThanOrEqual,
        Comparison::GreaterThanOrEqual,
        Comparison::LessThan,
        Comparison::GreaterThan,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::GreaterThan => ">",
            Comparison::LessThanOrEqual => "<=",
            Comparison::GreaterThanOrEqual => ">=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::PARSE_ORDER
            .into_iter()
            .find(|comparison| comparison.symbol() == symbol)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned for symbols outside the six comparison operators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Comparison {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
