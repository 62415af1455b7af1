// ============================================================================
// RESULT LINE TOKENIZER
// ============================================================================
//
// `<name> <iterations> [<value> <unit>]...`, whitespace separated, as
// printed by `go test -bench`.

use crate::config::constants::input::MIN_MEASUREMENT_FIELDS;
use crate::config::constants::naming::DEFAULT_CASE_PREFIX;
use crate::types::{Measurement, Unit};
use std::num::ParseIntError;

/// Why a line is not a benchmark result line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("{required} fields required, have {found}")]
    TooFewFields { required: usize, found: usize },

    #[error("first field does not start with '{prefix}'")]
    MissingPrefix { prefix: String },

    #[error("invalid iteration count '{field}': {source}")]
    InvalidIterations {
        field: String,
        #[source]
        source: ParseIntError,
    },
}

/// A tokenized result line; `name` is the full, undecomposed case name
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub name: String,
    pub measurement: Measurement,
}

pub fn parse_line(line: &str) -> Result<ParsedLine, LineError> {
    parse_line_with_prefix(line, DEFAULT_CASE_PREFIX)
}

pub fn parse_line_with_prefix(line: &str, prefix: &str) -> Result<ParsedLine, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_MEASUREMENT_FIELDS {
        return Err(LineError::TooFewFields {
            required: MIN_MEASUREMENT_FIELDS,
            found: fields.len(),
        });
    }

    if !fields[0].starts_with(prefix) {
        return Err(LineError::MissingPrefix {
            prefix: prefix.to_string(),
        });
    }

    let iterations = fields[1]
        .parse::<u64>()
        .map_err(|source| LineError::InvalidIterations {
            field: fields[1].to_string(),
            source,
        })?;

    let mut measurement = Measurement::new(iterations);
    for pair in fields[MIN_MEASUREMENT_FIELDS..].chunks_exact(2) {
        record(&mut measurement, pair[0], pair[1]);
    }

    Ok(ParsedLine {
        name: fields[0].to_string(),
        measurement,
    })
}

/// Unknown units and unparsable values are ignored
fn record(measurement: &mut Measurement, value: &str, unit: &str) {
    let Some(unit) = Unit::from_symbol(unit) else {
        return;
    };

    match unit {
        Unit::NsPerOp => {
            if let Ok(v) = value.parse::<f64>() {
                measurement.ns_per_op = v;
                measurement.measured.insert(unit);
            }
        }
        Unit::MbPerS => {
            if let Ok(v) = value.parse::<f64>() {
                measurement.mb_per_s = v;
                measurement.measured.insert(unit);
            }
        }
        Unit::AllocedBytesPerOp => {
            if let Ok(v) = value.parse::<u64>() {
                measurement.alloced_bytes_per_op = v;
                measurement.measured.insert(unit);
            }
        }
        Unit::AllocsPerOp => {
            if let Ok(v) = value.parse::<u64>() {
                measurement.allocs_per_op = v;
                measurement.measured.insert(unit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_benchmem_line() {
        let parsed = parse_line(
            "BenchmarkMath/areaUnder/y=sin(x)/delta=0.001000/start_x=-2/end_x=1/abs_val=true-4         \t   21801\t     55357 ns/op\t       0 B/op\t       0 allocs/op",
        )
        .unwrap();

        assert_eq!(
            parsed.name,
            "BenchmarkMath/areaUnder/y=sin(x)/delta=0.001000/start_x=-2/end_x=1/abs_val=true-4"
        );
        assert_eq!(parsed.measurement.iterations(), 21801);
        assert_eq!(parsed.measurement.ns_per_op(), Ok(55357.0));
        assert_eq!(parsed.measurement.alloced_bytes_per_op(), Ok(0));
        assert_eq!(parsed.measurement.allocs_per_op(), Ok(0));
        assert!(parsed.measurement.mb_per_s().is_err());
    }

    #[test]
    fn test_parse_throughput_line() {
        let parsed =
            parse_line("BenchmarkParse/num=1-4   37098   31052 ns/op   5.31 MB/s").unwrap();
        assert_eq!(parsed.measurement.mb_per_s(), Ok(5.31));
        assert!(parsed.measurement.allocs_per_op().is_err());
    }

    #[test]
    fn test_unknown_units_and_bad_values_ignored() {
        let parsed =
            parse_line("BenchmarkX 10 abc ns/op 3 widgets/op 4 allocs/op trailing").unwrap();
        assert!(parsed.measurement.ns_per_op().is_err());
        assert_eq!(parsed.measurement.allocs_per_op(), Ok(4));
    }

    #[test]
    fn test_not_result_lines() {
        assert_matches!(
            parse_line("BenchmarkMath/areaUnder/y=sin(x)"),
            Err(LineError::TooFewFields { found: 1, .. })
        );
        assert_matches!(parse_line("PASS"), Err(LineError::TooFewFields { .. }));
        assert_matches!(
            parse_line("ok  \tgithub.com/x/y\t1.2s"),
            Err(LineError::MissingPrefix { .. })
        );
        assert_matches!(
            parse_line("BenchmarkFoo --- FAIL"),
            Err(LineError::InvalidIterations { .. })
        );
    }

    #[test]
    fn test_custom_prefix() {
        let parsed = parse_line_with_prefix("FuzzThing 5 1.5 ns/op", "Fuzz").unwrap();
        assert_eq!(parsed.name, "FuzzThing");
        assert_matches!(
            parse_line_with_prefix("BenchmarkThing 5", "Fuzz"),
            Err(LineError::MissingPrefix { .. })
        );
    }
}
