//! # Named Variable Comparison
//!
//! Evaluates the six comparison operators over two [`NamedVariable`]s.
//!
//! Rules:
//! - Variables with different names are never compared (`DifferentNames`).
//! - Numeric operands (integer or float, in any mix) are widened to `f64`.
//! - Text compares natively, lexicographically for ordering.
//! - Booleans support equality only (`OperationNotDefined` for ordering).
//! - Any other kind mix is `NonComparable`.
//!
//! `>`, `<=` and `>=` are derived from equality and less-than, so they
//! fail exactly when those primitives fail.

pub mod error;

pub use error::{ComparisonError, ComparisonErrorKind};

use crate::types::{Comparison, NamedVariable, TypedValue};

/// Comparison operations on named variables
pub trait ComparisonExt {
    fn compare_with(
        &self,
        other: &NamedVariable,
        operation: Comparison,
    ) -> Result<bool, ComparisonError>;
}

impl ComparisonExt for NamedVariable {
    fn compare_with(
        &self,
        other: &NamedVariable,
        operation: Comparison,
    ) -> Result<bool, ComparisonError> {
        compare(operation, self, other)
    }
}

/// Evaluate `a <op> b`
pub fn compare(
    operation: Comparison,
    a: &NamedVariable,
    b: &NamedVariable,
) -> Result<bool, ComparisonError> {
    evaluate(operation, a, b)
        .map_err(|kind| ComparisonError::new(a, operation.symbol(), b, kind))
}

/// Evaluate `a <symbol> b` for an operator given as text. Symbols other
/// than the six operators fail with `InvalidOperation`.
pub fn compare_symbol(
    symbol: &str,
    a: &NamedVariable,
    b: &NamedVariable,
) -> Result<bool, ComparisonError> {
    match Comparison::from_symbol(symbol) {
        Some(operation) => compare(operation, a, b),
        None => Err(ComparisonError::new(
            a,
            symbol,
            b,
            ComparisonErrorKind::InvalidOperation,
        )),
    }
}

fn evaluate(
    operation: Comparison,
    a: &NamedVariable,
    b: &NamedVariable,
) -> Result<bool, ComparisonErrorKind> {
    match operation {
        Comparison::Equal => equal(a, b),
        Comparison::NotEqual => equal(a, b).map(|eq| !eq),
        Comparison::LessThan => less(a, b),
        Comparison::GreaterThan => Ok(!(equal(a, b)? || less(a, b)?)),
        Comparison::LessThanOrEqual => Ok(equal(a, b)? || less(a, b)?),
        Comparison::GreaterThanOrEqual => less(a, b).map(|lt| !lt),
    }
}

fn same_name(a: &NamedVariable, b: &NamedVariable) -> Result<(), ComparisonErrorKind> {
    if a.name == b.name {
        Ok(())
    } else {
        Err(ComparisonErrorKind::DifferentNames)
    }
}

fn equal(a: &NamedVariable, b: &NamedVariable) -> Result<bool, ComparisonErrorKind> {
    same_name(a, b)?;

    match (&a.value, &b.value) {
        (TypedValue::Text(x), TypedValue::Text(y)) => Ok(x == y),
        (TypedValue::Boolean(x), TypedValue::Boolean(y)) => Ok(x == y),
        (x, y) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok(x == y),
            _ => Err(ComparisonErrorKind::NonComparable),
        },
    }
}

fn less(a: &NamedVariable, b: &NamedVariable) -> Result<bool, ComparisonErrorKind> {
    same_name(a, b)?;

    match (&a.value, &b.value) {
        (TypedValue::Text(x), TypedValue::Text(y)) => Ok(x < y),
        (TypedValue::Boolean(_), TypedValue::Boolean(_)) => {
            Err(ComparisonErrorKind::OperationNotDefined)
        }
        (x, y) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok(x < y),
            _ => Err(ComparisonErrorKind::NonComparable),
        },
    }
}
