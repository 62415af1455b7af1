//! Log codes and their metadata
//!
//! Single source of truth for every code the library emits.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Code wrapper shared by error, warning and success events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

/// Input stream error codes
pub mod input {
    use super::Code;

    pub const IO_ERROR: Code = Code::new("E005");
    pub const ENVELOPE_DECODE_FAILED: Code = Code::new("E006");
    pub const LINE_TOO_LONG: Code = Code::new("E007");
}

/// Case name error codes
pub mod naming {
    use super::Code;

    pub const MALFORMED_NAME: Code = Code::new("E020");
}

/// Filter and comparison error codes
pub mod filtering {
    use super::Code;

    pub const MALFORMED_FILTER: Code = Code::new("E040");
    pub const COMPARISON_FAILED: Code = Code::new("E041");
}

pub mod configuration {
    use super::Code;

    pub const INVALID_CONFIGURATION: Code = Code::new("E060");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const PARSE_COMPLETE: Code = Code::new("I006");
    pub const FILTER_APPLIED: Code = Code::new("I040");
    pub const GROUPING_COMPLETE: Code = Code::new("I041");
}

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            (system::INTERNAL_ERROR, "System", Severity::Critical, "Internal library error"),
            (input::IO_ERROR, "Input", Severity::High, "Reading the input stream failed"),
            (
                input::ENVELOPE_DECODE_FAILED,
                "Input",
                Severity::High,
                "A line in JSON mode is not a test event envelope",
            ),
            (
                input::LINE_TOO_LONG,
                "Input",
                Severity::High,
                "An input line exceeds the maximum accepted length",
            ),
            (
                naming::MALFORMED_NAME,
                "Naming",
                Severity::High,
                "A case name does not follow the benchmark naming grammar",
            ),
            (
                filtering::MALFORMED_FILTER,
                "Filtering",
                Severity::Medium,
                "A filter expression is not of the form name<op>value",
            ),
            (
                filtering::COMPARISON_FAILED,
                "Filtering",
                Severity::Medium,
                "Two variable values could not be compared",
            ),
            (
                configuration::INVALID_CONFIGURATION,
                "Configuration",
                Severity::High,
                "Runtime configuration is invalid",
            ),
            (
                success::SYSTEM_INITIALIZATION_COMPLETED,
                "System",
                Severity::Low,
                "Logging initialized",
            ),
            (success::PARSE_COMPLETE, "Input", Severity::Low, "Input stream parsed"),
            (success::FILTER_APPLIED, "Filtering", Severity::Low, "Filter applied"),
            (success::GROUPING_COMPLETE, "Filtering", Severity::Low, "Results grouped"),
        ];

        entries
            .into_iter()
            .map(|(code, category, severity, description)| {
                (
                    code.as_str(),
                    CodeMetadata {
                        code: code.as_str(),
                        category,
                        severity,
                        description,
                    },
                )
            })
            .collect()
    })
}

pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_code_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn get_description(code: &str) -> &'static str {
    get_code_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    get_code_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
