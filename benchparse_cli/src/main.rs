//! # benchparse
//!
//! Filters and groups `go test -bench` output from a file or stdin.

use benchparse::logging::{self, codes};
use benchparse::{log_error, BenchmarkParser, Benchmark, InputFormat, RuntimeConfig};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "benchparse", version, about = "Filter and group Go benchmark output")]
struct Cli {
    /// Input is a `go test -json` event stream
    #[arg(long)]
    json: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep results matching `name<op>value`; repeat to narrow further
    #[arg(long = "filter", value_name = "EXPR")]
    filters: Vec<String>,

    /// Group results by variable name; repeat for compound keys
    #[arg(long = "group-by", value_name = "NAME")]
    group_by: Vec<String>,

    /// Print the parsed benchmarks as JSON instead of benchmark lines
    #[arg(long)]
    emit_json: bool,

    /// Benchmark output to read; stdin when omitted
    input: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load_from_file(path)?,
        None => RuntimeConfig::default(),
    };
    if cli.json {
        config.parser.input_format = InputFormat::Json;
    }
    config.validate()?;
    Ok(config)
}

fn open_input(path: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn apply_filters(
    mut benchmarks: Vec<Benchmark>,
    filters: &[String],
) -> Result<Vec<Benchmark>, benchparse::BenchError> {
    for benchmark in &mut benchmarks {
        for filter in filters {
            benchmark.results = benchmark.results.filter(filter)?;
        }
    }
    Ok(benchmarks)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init_global_logging_with_preferences(&config.logging)?;

    let parser = BenchmarkParser::new(&config.parser)?;
    let reader = open_input(cli.input.as_ref()).map_err(|err| {
        log_error!(codes::input::IO_ERROR, "Cannot open input", "error" => &err);
        err
    })?;

    let benchmarks = apply_filters(parser.parse_reader(reader)?, &cli.filters)?;

    if cli.emit_json {
        println!("{}", serde_json::to_string_pretty(&benchmarks)?);
        return Ok(());
    }

    for benchmark in &benchmarks {
        if cli.group_by.is_empty() {
            if !benchmark.results.is_empty() {
                println!("{}", benchmark);
            }
            continue;
        }

        for (key, results) in benchmark.results.group(&cli.group_by) {
            println!("== {} {}", benchmark.name, key);
            println!(
                "{}",
                Benchmark {
                    name: benchmark.name.clone(),
                    results,
                }
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "benchparse",
            "--json",
            "--filter",
            "delta<1",
            "--filter",
            "y==sin(x)",
            "--group-by",
            "y",
            "bench.txt",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.filters, vec!["delta<1", "y==sin(x)"]);
        assert_eq!(cli.group_by, vec!["y"]);
        assert_eq!(cli.input, Some(PathBuf::from("bench.txt")));
    }

    #[test]
    fn test_json_flag_overrides_config() {
        let cli = Cli::try_parse_from(["benchparse", "--json"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.parser.input_format, InputFormat::Json);
    }

    #[test]
    fn test_apply_filters_in_order() {
        let input = "\
BenchmarkMath/y=sin(x)/delta=0.001000-4 10 1 ns/op
BenchmarkMath/y=2x+3/delta=0.001000-4 10 1 ns/op
BenchmarkMath/y=sin(x)/delta=1.000000-4 10 1 ns/op
";
        let benchmarks = benchparse::parse_benchmarks(input.as_bytes()).unwrap();
        let filtered =
            apply_filters(benchmarks, &["delta<1".to_string(), "y==sin(x)".to_string()])
                .unwrap();
        assert_eq!(filtered[0].results.len(), 1);
    }

    #[test]
    fn test_apply_filters_propagates_errors() {
        let benchmarks =
            benchparse::parse_benchmarks("BenchmarkA/y=x 1 1 ns/op\n".as_bytes()).unwrap();
        assert!(apply_filters(benchmarks, &["y,2".to_string()]).is_err());
    }
}
