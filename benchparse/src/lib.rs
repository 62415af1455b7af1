//! Typed parsing, filtering and grouping of `go test -bench` output.
//!
//! ```no_run
//! use benchparse::parse_benchmarks;
//!
//! let input = "BenchmarkMath/max/y=2x+3/delta=0.001000-4 56282 20361 ns/op\n";
//! let benchmarks = parse_benchmarks(input.as_bytes())?;
//! for (key, results) in benchmarks[0].results.filter("delta<1")?.group(&["y"]) {
//!     println!("{}: {} results", key, results.len());
//! }
//! # Ok::<(), benchparse::BenchError>(())
//! ```

// Internal modules
pub mod comparison;
pub mod config;
pub mod error;
#[macro_use]
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod results;
pub mod types;

// Re-export key types for library consumers
pub use comparison::{compare, ComparisonError, ComparisonErrorKind, ComparisonExt};
pub use config::{InputFormat, ParserPreferences, RuntimeConfig};
pub use error::BenchError;
pub use parser::{decompose, FilterExpression, NameDecomposer};
pub use pipeline::{parse_benchmarks, parse_benchmarks_from_json, BenchmarkParser};
pub use results::{BenchResults, Benchmark, GroupedResults, ResultEntry};
pub use types::{
    infer, CaseInputs, Comparison, Measurement, MeasurementNotPresent, NamedVariable,
    PathSegment, TypedValue,
};
