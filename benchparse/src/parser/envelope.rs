//! `go test -json` event envelopes

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One event of a `go test -json` stream.
///
/// Only `Output` is used for parsing; the other fields are kept so
/// callers can correlate results with packages and timing. Every field
/// is optional, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    #[serde(default)]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub test: Option<String>,
    /// Seconds
    #[serde(default)]
    pub elapsed: Option<f64>,
    #[serde(default)]
    pub output: String,
}

impl TestEvent {
    /// Output text without the trailing newline
    pub fn line(&self) -> &str {
        self.output.trim_end_matches(['\r', '\n'])
    }
}

pub fn decode_event(line: &str) -> Result<TestEvent, serde_json::Error> {
    serde_json::from_str(line)
}
