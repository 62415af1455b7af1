//! Parsed results and the filter/group operations over them

pub mod filter;
pub mod group;
pub mod types;

pub use group::GroupedResults;
pub use types::{BenchResults, Benchmark, ResultEntry};

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::parser::{decompose, parse_line};

    pub(crate) const SAMPLE_OUTPUT: &str = "\
BenchmarkMath/areaUnder/y=sin(x)/delta=0.001000/start_x=-2/end_x=1/abs_val=true-4         \t   21801\t     55357 ns/op\t       0 B/op\t       0 allocs/op
BenchmarkMath/areaUnder/y=2x+3/delta=1.000000/start_x=-1/end_x=2/abs_val=false-4          \t88335925\t        13.3 ns/op\t       0 B/op\t       0 allocs/op
BenchmarkMath/max/y=2x+3/delta=0.001000/start_x=-2/end_x=1-4                              \t   56282\t     20361 ns/op\t       0 B/op\t       0 allocs/op
BenchmarkMath/max/y=sin(x)/delta=1.000000/start_x=-1/end_x=2-4                            \t16381138\t        62.7 ns/op\t       0 B/op\t       0 allocs/op
";

    /// The four `BenchmarkMath` results, in input order
    pub(crate) fn sample_results() -> BenchResults {
        SAMPLE_OUTPUT
            .lines()
            .map(|line| {
                let parsed = parse_line(line).unwrap();
                let (_, inputs) = decompose(&parsed.name).unwrap();
                ResultEntry::new(inputs, parsed.measurement)
            })
            .collect()
    }

    #[test]
    fn test_benchmark_display() {
        let benchmark = Benchmark {
            name: "BenchmarkMath".to_string(),
            results: sample_results(),
        };

        assert_eq!(
            benchmark.to_string(),
            "\
BenchmarkMath/areaUnder/y=sin(x)/delta=0.001/start_x=-2/end_x=1/abs_val=true-4 21801 55357.00 ns/op 0 B/op 0 allocs/op
BenchmarkMath/areaUnder/y=2x+3/delta=1.0/start_x=-1/end_x=2/abs_val=false-4 88335925 13.30 ns/op 0 B/op 0 allocs/op
BenchmarkMath/max/y=2x+3/delta=0.001/start_x=-2/end_x=1-4 56282 20361.00 ns/op 0 B/op 0 allocs/op
BenchmarkMath/max/y=sin(x)/delta=1.0/start_x=-1/end_x=2-4 16381138 62.70 ns/op 0 B/op 0 allocs/op"
        );
    }

    #[test]
    fn test_results_collection() {
        let results = sample_results();
        assert_eq!(results.len(), 4);
        assert_eq!(results.iter().count(), 4);
        let owned: Vec<ResultEntry> = results.clone().into_iter().collect();
        assert_eq!(BenchResults::from(owned), results);
    }
}
