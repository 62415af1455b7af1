pub mod compile_time {
    pub mod naming {
        /// Prefix every top-level case name carries in `go test -bench` output
        pub const DEFAULT_CASE_PREFIX: &str = "Benchmark";

        /// Separator between path components of a case name
        pub const PATH_SEPARATOR: char = '/';

        /// Separator between the name and value of a named variable
        pub const VARIABLE_SEPARATOR: char = '=';

        /// Introduces the concurrency width at the end of a case name
        pub const CONCURRENCY_SEPARATOR: char = '-';
    }

    pub mod rendering {
        /// Decimal places for ns/op and MB/s measurements
        pub const MEASUREMENT_PRECISION: usize = 2;

        /// Separator between group key components
        pub const GROUP_KEY_SEPARATOR: &str = ",";
    }

    pub mod input {
        /// Maximum accepted input line length (64KB), not counting the line
        /// terminator. A line is read at most two bytes past this, so an
        /// oversized line is never buffered whole.
        pub const MAX_LINE_LENGTH: usize = 64 * 1024;

        /// Minimum fields in a measurement line (name and iteration count)
        pub const MIN_MEASUREMENT_FIELDS: usize = 2;
    }
}

pub use compile_time::*;
