// ============================================================================
// TYPED VALUES - Scalar values inferred from case name tokens
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value of a named variable.
///
/// Only produced by [`infer`]; the variant records the narrowest type the
/// token parsed as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl TypedValue {
    /// Check if this is an integer or float
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypedValue::Integer(_) | TypedValue::Float(_))
    }

    /// Numeric value widened to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Integer(i) => Some(*i as f64),
            TypedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Float(fl) => f.write_str(&render_float(*fl)),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Text(s) => f.write_str(s),
        }
    }
}

/// Shortest decimal text that parses back to the same `f64`. No exponent
/// form, since `1e-7` at the end of a case name reads as a `-7` width.
/// Finite values always carry a `.` so they re-infer as floats.
fn render_float(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{}.0", rendered)
    } else {
        rendered
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Integer(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Float(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Boolean(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Text(value.to_string())
    }
}

// ============================================================================
// INFERENCE
// ============================================================================

type Candidate = fn(&str) -> Option<TypedValue>;

fn parse_integer(token: &str) -> Option<TypedValue> {
    token.parse::<i64>().ok().map(TypedValue::Integer)
}

fn parse_float(token: &str) -> Option<TypedValue> {
    token.parse::<f64>().ok().map(TypedValue::Float)
}

fn parse_boolean(token: &str) -> Option<TypedValue> {
    token.parse::<bool>().ok().map(TypedValue::Boolean)
}

/// Conversions in priority order. Integer comes before float since every
/// integer literal is also a valid float.
const CANDIDATES: &[Candidate] = &[parse_integer, parse_float, parse_boolean];

/// Infer the scalar type of a token. Never fails: anything that is not an
/// integer, float or `true`/`false` is kept as text.
pub fn infer(token: &str) -> TypedValue {
    CANDIDATES
        .iter()
        .find_map(|candidate| candidate(token))
        .unwrap_or_else(|| TypedValue::Text(token.to_string()))
}
