//! Stream to benchmarks
//!
//! Reads `go test -bench` output line by line, keeps result lines,
//! decomposes their names and collects results under their top-level
//! case. Cases are returned in the order they first appear.

use crate::config::constants::input::MAX_LINE_LENGTH;
use crate::config::{InputFormat, ParserPreferences};
use crate::error::BenchError;
use crate::logging::codes;
use crate::parser::{decode_event, parse_line_with_prefix, NameDecomposer};
use crate::results::{Benchmark, ResultEntry};
use crate::{log_debug, log_error, log_success};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};

/// Bytes read for one line at most: the content limit plus `\r\n`
const LINE_READ_LIMIT: u64 = MAX_LINE_LENGTH as u64 + 2;

/// Line content without its `\n` or `\r\n` terminator
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Configured benchmark output parser
#[derive(Debug, Clone)]
pub struct BenchmarkParser {
    decomposer: NameDecomposer,
    input_format: InputFormat,
}

impl BenchmarkParser {
    pub fn new(preferences: &ParserPreferences) -> Result<Self, BenchError> {
        Ok(Self {
            decomposer: NameDecomposer::new(&preferences.case_prefix)?,
            input_format: preferences.input_format,
        })
    }

    /// Parser for plain text output with the default case prefix
    pub fn text() -> Result<Self, BenchError> {
        Self::new(&ParserPreferences {
            case_prefix: crate::config::constants::naming::DEFAULT_CASE_PREFIX.to_string(),
            input_format: InputFormat::Text,
        })
    }

    pub fn with_input_format(mut self, input_format: InputFormat) -> Self {
        self.input_format = input_format;
        self
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }

    /// Parse every result line of `reader`.
    ///
    /// In text mode unrelated lines are skipped, including ones that are
    /// not valid UTF-8. In JSON mode every non-blank line must be a test
    /// event. Read errors, oversized lines and malformed case names abort
    /// the parse.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<Vec<Benchmark>, BenchError> {
        let mut benchmarks: IndexMap<String, Benchmark> = IndexMap::new();
        let mut buffer = Vec::new();
        let mut line_number = 0usize;
        let mut result_count = 0usize;

        loop {
            buffer.clear();
            let read = (&mut reader)
                .take(LINE_READ_LIMIT)
                .read_until(b'\n', &mut buffer)
                .map_err(|err| {
                    log_error!(codes::input::IO_ERROR, "Failed to read input",
                        "line" => line_number + 1,
                        "error" => err
                    );
                    err
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let content = trim_line_ending(&buffer);
            if content.len() > MAX_LINE_LENGTH {
                log_error!(codes::input::LINE_TOO_LONG, "Input line too long",
                    "line" => line_number,
                    "limit" => MAX_LINE_LENGTH
                );
                return Err(BenchError::LineTooLong {
                    line_number,
                    limit: MAX_LINE_LENGTH,
                });
            }

            let line = String::from_utf8_lossy(content);
            if matches!(line, Cow::Owned(_)) {
                log_debug!("Replaced invalid UTF-8 in input line", "line" => line_number);
            }

            let Some(text) = self.line_text(&line, line_number)? else {
                continue;
            };

            let parsed = match parse_line_with_prefix(&text, self.decomposer.prefix()) {
                Ok(parsed) => parsed,
                Err(reason) => {
                    log_debug!("Skipping non-result line",
                        "line" => line_number,
                        "reason" => reason
                    );
                    continue;
                }
            };

            let (name, inputs) = self.decomposer.decompose(&parsed.name).map_err(|err| {
                log_error!(codes::naming::MALFORMED_NAME, "Malformed case name",
                    "line" => line_number,
                    "name" => &parsed.name
                );
                err
            })?;

            benchmarks
                .entry(name)
                .or_insert_with_key(|name| {
                    log_debug!("New benchmark case", "name" => name, "line" => line_number);
                    Benchmark::new(name.clone())
                })
                .results
                .push(ResultEntry::new(inputs, parsed.measurement));
            result_count += 1;
        }

        log_success!(codes::success::PARSE_COMPLETE, "Benchmark output parsed",
            "benchmarks" => benchmarks.len(),
            "results" => result_count,
            "format" => self.input_format
        );

        Ok(benchmarks.into_values().collect())
    }

    /// Raw output text carried by one input line
    fn line_text(&self, line: &str, line_number: usize) -> Result<Option<String>, BenchError> {
        match self.input_format {
            InputFormat::Text => Ok(Some(line.to_string())),
            InputFormat::Json if line.trim().is_empty() => Ok(None),
            InputFormat::Json => {
                let event = decode_event(line).map_err(|source| {
                    log_error!(codes::input::ENVELOPE_DECODE_FAILED, "Invalid test event",
                        "line" => line_number,
                        "error" => source
                    );
                    BenchError::Envelope {
                        line_number,
                        source,
                    }
                })?;
                Ok(Some(event.line().to_string()))
            }
        }
    }
}

/// Parse plain `go test -bench` output
pub fn parse_benchmarks<R: Read>(reader: R) -> Result<Vec<Benchmark>, BenchError> {
    BenchmarkParser::text()?.parse_reader(BufReader::new(reader))
}

/// Parse `go test -bench -json` output
pub fn parse_benchmarks_from_json<R: Read>(reader: R) -> Result<Vec<Benchmark>, BenchError> {
    BenchmarkParser::text()?
        .with_input_format(InputFormat::Json)
        .parse_reader(BufReader::new(reader))
}
