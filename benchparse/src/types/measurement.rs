// ============================================================================
// MEASUREMENTS - The numeric columns of a benchmark result line
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units recognized in a result line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    NsPerOp,
    MbPerS,
    AllocedBytesPerOp,
    AllocsPerOp,
}

impl Unit {
    pub const ALL: [Unit; 4] = [
        Unit::NsPerOp,
        Unit::MbPerS,
        Unit::AllocedBytesPerOp,
        Unit::AllocsPerOp,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::NsPerOp => "ns/op",
            Unit::MbPerS => "MB/s",
            Unit::AllocedBytesPerOp => "B/op",
            Unit::AllocsPerOp => "allocs/op",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.symbol() == symbol)
    }

    fn bit(&self) -> u8 {
        match self {
            Unit::NsPerOp => 1,
            Unit::MbPerS => 1 << 1,
            Unit::AllocedBytesPerOp => 1 << 2,
            Unit::AllocsPerOp => 1 << 3,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Set of units that were present on a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measured(u8);

impl Measured {
    pub const NONE: Measured = Measured(0);

    pub fn contains(&self, unit: Unit) -> bool {
        self.0 & unit.bit() != 0
    }

    pub fn insert(&mut self, unit: Unit) {
        self.0 |= unit.bit();
    }

    pub fn with(mut self, unit: Unit) -> Self {
        self.insert(unit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Requested measurement was not recorded for this result
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{unit}: not measured")]
pub struct MeasurementNotPresent {
    pub unit: Unit,
}

/// Outputs of one benchmark run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub iterations: u64,
    pub ns_per_op: f64,
    pub mb_per_s: f64,
    pub alloced_bytes_per_op: u64,
    pub allocs_per_op: u64,
    pub measured: Measured,
}

impl Measurement {
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_ns_per_op(mut self, value: f64) -> Self {
        self.ns_per_op = value;
        self.measured.insert(Unit::NsPerOp);
        self
    }

    pub fn with_mb_per_s(mut self, value: f64) -> Self {
        self.mb_per_s = value;
        self.measured.insert(Unit::MbPerS);
        self
    }

    pub fn with_alloced_bytes_per_op(mut self, value: u64) -> Self {
        self.alloced_bytes_per_op = value;
        self.measured.insert(Unit::AllocedBytesPerOp);
        self
    }

    pub fn with_allocs_per_op(mut self, value: u64) -> Self {
        self.allocs_per_op = value;
        self.measured.insert(Unit::AllocsPerOp);
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    fn require(&self, unit: Unit) -> Result<(), MeasurementNotPresent> {
        if self.measured.contains(unit) {
            Ok(())
        } else {
            Err(MeasurementNotPresent { unit })
        }
    }

    pub fn ns_per_op(&self) -> Result<f64, MeasurementNotPresent> {
        self.require(Unit::NsPerOp).map(|_| self.ns_per_op)
    }

    /// Set when the benchmark calls `SetBytes`
    pub fn mb_per_s(&self) -> Result<f64, MeasurementNotPresent> {
        self.require(Unit::MbPerS).map(|_| self.mb_per_s)
    }

    /// Set with `-benchmem` or `ReportAllocs`
    pub fn alloced_bytes_per_op(&self) -> Result<u64, MeasurementNotPresent> {
        self.require(Unit::AllocedBytesPerOp)
            .map(|_| self.alloced_bytes_per_op)
    }

    /// Set with `-benchmem` or `ReportAllocs`
    pub fn allocs_per_op(&self) -> Result<u64, MeasurementNotPresent> {
        self.require(Unit::AllocsPerOp).map(|_| self.allocs_per_op)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::config::constants::rendering::MEASUREMENT_PRECISION;

        write!(f, "{}", self.iterations)?;
        if let Ok(ns_per_op) = self.ns_per_op() {
            write!(f, " {:.*} {}", MEASUREMENT_PRECISION, ns_per_op, Unit::NsPerOp)?;
        }
        if let Ok(mb_per_s) = self.mb_per_s() {
            write!(f, " {:.*} {}", MEASUREMENT_PRECISION, mb_per_s, Unit::MbPerS)?;
        }
        if let Ok(bytes) = self.alloced_bytes_per_op() {
            write!(f, " {} {}", bytes, Unit::AllocedBytesPerOp)?;
        }
        if let Ok(allocs) = self.allocs_per_op() {
            write!(f, " {} {}", allocs, Unit::AllocsPerOp)?;
        }
        Ok(())
    }
}
