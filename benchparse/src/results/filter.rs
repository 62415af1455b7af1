//! Filtering results with a single comparison

use super::types::BenchResults;
use crate::comparison::compare;
use crate::error::BenchError;
use crate::logging::codes;
use crate::parser::FilterExpression;
use crate::{log_error, log_success};

impl BenchResults {
    /// Keep results with a variable satisfying `expression`, e.g.
    /// `delta>0.01`. Fails on a malformed expression or on any comparison
    /// error other than a variable name mismatch.
    pub fn filter(&self, expression: &str) -> Result<BenchResults, BenchError> {
        let parsed = FilterExpression::parse(expression).map_err(|err| {
            log_error!(codes::filtering::MALFORMED_FILTER, "Malformed filter expression",
                "expression" => expression
            );
            err
        })?;
        self.filter_by(&parsed)
    }

    pub fn filter_by(&self, expression: &FilterExpression) -> Result<BenchResults, BenchError> {
        let target = expression.as_variable();
        let mut kept = BenchResults::new();

        for result in self.iter() {
            for variable in &result.inputs.variables {
                match compare(expression.operator, variable, &target) {
                    Ok(true) => {
                        kept.push(result.clone());
                        break;
                    }
                    Ok(false) => {}
                    Err(err) if err.is_different_names() => {}
                    Err(err) => {
                        log_error!(codes::filtering::COMPARISON_FAILED, "Filter aborted",
                            "filter" => expression,
                            "error" => err
                        );
                        return Err(err.into());
                    }
                }
            }
        }

        log_success!(codes::success::FILTER_APPLIED, "Filter applied",
            "filter" => expression,
            "kept" => kept.len(),
            "total" => self.len()
        );

        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_results;
    use super::*;
    use crate::comparison::ComparisonErrorKind;
    use assert_matches::assert_matches;

    fn kept_indices(results: &BenchResults, filtered: &BenchResults) -> Vec<usize> {
        filtered
            .iter()
            .filter_map(|entry| results.iter().position(|candidate| candidate == entry))
            .collect()
    }

    #[test]
    fn test_filter_text_equality() {
        let results = sample_results();
        let filtered = results.filter("y==sin(x)").unwrap();
        assert_eq!(kept_indices(&results, &filtered), vec![0, 3]);
    }

    #[test]
    fn test_filter_float_greater() {
        let results = sample_results();
        let filtered = results.filter("delta>0.01").unwrap();
        assert_eq!(kept_indices(&results, &filtered), vec![1, 3]);
    }

    #[test]
    fn test_filter_widens_integer_literal() {
        let results = sample_results();
        let filtered = results.filter("delta<1").unwrap();
        assert_eq!(kept_indices(&results, &filtered), vec![0, 2]);
    }

    #[test]
    fn test_filter_variable_present_on_some_results() {
        let results = sample_results();
        let filtered = results.filter("abs_val==false").unwrap();
        assert_eq!(kept_indices(&results, &filtered), vec![1]);
    }

    #[test]
    fn test_filter_unknown_variable_keeps_nothing() {
        let results = sample_results();
        assert!(results.filter("missing==1").unwrap().is_empty());
    }

    #[test]
    fn test_filter_non_comparable_aborts() {
        let results = sample_results();
        let err = results.filter("y==2").unwrap_err();
        assert_eq!(err.comparison_kind(), Some(ComparisonErrorKind::NonComparable));
    }

    #[test]
    fn test_filter_boolean_ordering_aborts() {
        let results = sample_results();
        let err = results.filter("abs_val<true").unwrap_err();
        assert_eq!(
            err.comparison_kind(),
            Some(ComparisonErrorKind::OperationNotDefined)
        );
    }

    #[test]
    fn test_filter_malformed() {
        let results = sample_results();
        assert_matches!(results.filter("y,2"), Err(BenchError::MalformedFilter(_)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let results = sample_results();
        for expression in ["y==sin(x)", "delta>0.01", "start_x<=-2", "end_x!=1"] {
            let once = results.filter(expression).unwrap();
            let twice = once.filter(expression).unwrap();
            assert_eq!(once, twice, "{}", expression);
        }
    }

    #[test]
    fn test_filters_compose() {
        let results = sample_results();
        let filtered = results
            .filter("y==2x+3")
            .and_then(|r| r.filter("delta<1"))
            .unwrap();
        assert_eq!(kept_indices(&results, &filtered), vec![2]);
    }

    const SWEEP_TOKENS: [&str; 10] = [
        "-1e300", "-2.5", "-1", "0", "0.0000001", "0.001", "1", "3", "1e15", "1e300",
    ];

    fn sweep_results() -> BenchResults {
        let input: String = SWEEP_TOKENS
            .iter()
            .enumerate()
            .map(|(i, token)| format!("BenchmarkSweep/x={}/run={} 1 1 ns/op\n", token, i))
            .collect();
        crate::parse_benchmarks(input.as_bytes())
            .unwrap()
            .remove(0)
            .results
    }

    #[test]
    fn test_filter_is_idempotent_across_magnitudes() {
        let results = sweep_results();
        assert_eq!(results.len(), SWEEP_TOKENS.len());

        for operator in ["==", "!=", "<", ">", "<=", ">="] {
            for threshold in SWEEP_TOKENS {
                let expression = format!("x{}{}", operator, threshold);
                let once = results.filter(&expression).unwrap();
                let twice = once.filter(&expression).unwrap();
                assert_eq!(once, twice, "{}", expression);
            }
        }
    }

    #[test]
    fn test_complementary_filters_partition_results() {
        let results = sweep_results();
        let pairs = [("<", ">="), (">", "<="), ("==", "!=")];

        for (operator, complement) in pairs {
            for threshold in SWEEP_TOKENS {
                let kept = results.filter(&format!("x{}{}", operator, threshold)).unwrap();
                let rest = results.filter(&format!("x{}{}", complement, threshold)).unwrap();

                assert_eq!(kept.len() + rest.len(), results.len(), "x{}{}", operator, threshold);
                assert!(kept.iter().all(|entry| !rest.contains(entry)));
            }
        }
    }
}
