//! Parsers for case names, filter expressions, result lines and
//! `go test -json` envelopes.

pub mod envelope;
pub mod filter;
pub mod line;
pub mod name;

pub use envelope::{decode_event, TestEvent};
pub use filter::{FilterError, FilterExpression};
pub use line::{parse_line, parse_line_with_prefix, LineError, ParsedLine};
pub use name::{decompose, NameDecomposer, NameError};
