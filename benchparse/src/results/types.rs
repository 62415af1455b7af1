// ============================================================================
// RESULT TYPES
// ============================================================================

use crate::types::{CaseInputs, Measurement};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// One result line: the decomposed inputs and the measured outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub inputs: CaseInputs,
    pub outputs: Measurement,
}

impl ResultEntry {
    pub fn new(inputs: CaseInputs, outputs: Measurement) -> Self {
        Self { inputs, outputs }
    }
}

/// Ordered results of one top-level case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchResults(Vec<ResultEntry>);

impl BenchResults {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: ResultEntry) {
        self.0.push(entry);
    }

    pub fn into_inner(self) -> Vec<ResultEntry> {
        self.0
    }
}

impl Deref for BenchResults {
    type Target = [ResultEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ResultEntry>> for BenchResults {
    fn from(entries: Vec<ResultEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<ResultEntry> for BenchResults {
    fn from_iter<I: IntoIterator<Item = ResultEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BenchResults {
    type Item = ResultEntry;
    type IntoIter = std::vec::IntoIter<ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BenchResults {
    type Item = &'a ResultEntry;
    type IntoIter = std::slice::Iter<'a, ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A top-level case and its results in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    pub results: BenchResults,
}

impl Benchmark {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: BenchResults::new(),
        }
    }
}

/// Same layout as `go test -bench` output, one line per result.
/// Floating point columns may differ in precision from the input.
impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}{} {}", self.name, result.inputs, result.outputs)?;
        }
        Ok(())
    }
}
