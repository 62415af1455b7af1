//! Filter expressions of the form `name<op>value`
//!
//! Exactly one comparison per expression; there are no boolean
//! combinators.

pub mod error;

pub use error::FilterError;

use crate::types::{infer, Comparison, NamedVariable, TypedValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub variable_name: String,
    pub operator: Comparison,
    pub value: TypedValue,
}

impl FilterExpression {
    /// Parse `name<op>value`.
    ///
    /// Operators are tried in [`Comparison::PARSE_ORDER`]; the first one
    /// that splits the expression into exactly two parts wins.
    pub fn parse(expression: &str) -> Result<Self, FilterError> {
        for operator in Comparison::PARSE_ORDER {
            let parts: Vec<&str> = expression.split(operator.symbol()).collect();
            if let [name, value] = parts.as_slice() {
                return Ok(Self {
                    variable_name: name.to_string(),
                    operator,
                    value: infer(value),
                });
            }
        }

        Err(FilterError::Malformed {
            expression: expression.to_string(),
        })
    }

    /// Right-hand side as a variable comparable against result inputs
    pub fn as_variable(&self) -> NamedVariable {
        NamedVariable::new(self.variable_name.clone(), self.value.clone(), 0)
    }
}

impl FromStr for FilterExpression {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.variable_name, self.operator, self.value)
    }
}
