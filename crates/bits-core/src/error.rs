//! Error types for bit parsing, table usage and reverse search.

use thiserror::Error;

/// Errors that can occur while parsing bit sequences.
///
/// These are recoverable: the caller decides what to do with bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token is not exactly `"0"` or `"1"`.
    #[error("invalid bit: {0:?}")]
    InvalidBit(String),
}

/// Contract violations by the caller of a table or gate.
///
/// The panicking entry points (`gate`, `invert`, `invoke`, ...) raise these
/// as panics. The `try_` variants hand them back as values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Row breaks the row syntax (arrow count, double space, charset).
    #[error("not a valid row: {0:?}")]
    InvalidRow(String),

    /// Truth table row whose right side is not a single bit.
    #[error("rows in a truth table must end with one output bit: {0:?}")]
    NonBitOutput(String),

    /// No row in the table covers the queried input.
    #[error("table is incomplete, no row for: {0:?}")]
    NoMatchingRow(String),

    /// Sequence of the wrong length passed to a single-input gate.
    #[error("gate takes {expected} input(s), got {actual}")]
    Arity {
        /// Inputs the gate accepts.
        expected: usize,
        /// Inputs supplied.
        actual: usize,
    },

    /// A whole row was passed where only a choice list was expected.
    #[error("choice string should not contain ->: {0:?}")]
    ChoiceContainsArrow(String),

    /// A choice segment did not parse as a bit sequence.
    #[error("invalid choice string {text:?}: {source}")]
    InvalidChoice {
        /// The complete choice text.
        text: String,
        /// Parse failure of the offending segment.
        source: ParseError,
    },

    /// Table is wider than the configured enumeration limit.
    #[error("table width {width} exceeds limit ({max})")]
    WidthExceeded {
        /// Input width of the table.
        width: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Errors from [`reverse`](crate::reverse::reverse).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// Every candidate was rejected by the validator.
    #[error("unable to reverse {table} after {iterations} candidate(s)")]
    NoSolution {
        /// Candidates examined before giving up.
        iterations: usize,
        /// Display form of the table that was reversed.
        table: String,
    },
}

impl ReverseError {
    /// Number of candidates examined.
    pub fn iterations(&self) -> usize {
        match self {
            ReverseError::NoSolution { iterations, .. } => *iterations,
        }
    }
}
