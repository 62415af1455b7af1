//! Core data model: typed values, named variables, case inputs,
//! comparison operators and measurements.

pub mod inputs;
pub mod measurement;
pub mod operators;
pub mod value;
pub mod variable;

pub use inputs::CaseInputs;
pub use measurement::{Measured, Measurement, MeasurementNotPresent, Unit};
pub use operators::{Comparison, UnknownOperator};
pub use value::{infer, TypedValue};
pub use variable::{NamedVariable, PathComponent, PathSegment};
