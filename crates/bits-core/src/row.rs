//! Row syntax shared by truth tables and probability tables.
//!
//! A row reads `<left> -> <right>`. In a truth table the left side is the
//! input sequence and the right side one output bit. In a probability
//! table the left side is an output and the right side a choice list.

use crate::bit::{Bit, Bits};
use crate::choices::Choices;
use crate::error::UsageError;

/// Separator between the two sides of a row.
pub const ARROW: &str = "->";

/// Check that a row has valid syntax.
///
/// A valid row has exactly one arrow, no run of two spaces, and no
/// characters other than `0`, `1`, space, `|`, `-` and `>`.
pub fn validate_row(row: &str) -> bool {
    if row.contains("  ") {
        return false;
    }
    if row.matches(ARROW).count() != 1 {
        return false;
    }
    row.chars()
        .all(|c| matches!(c, '0' | '1' | ' ' | '|' | '-' | '>'))
}

/// A syntactically valid row split into its two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Left side, parsed.
    pub left: Bits,
    /// Right side, trimmed but otherwise raw.
    pub right: String,
    text: String,
}

impl Row {
    /// Validate and split a row.
    pub fn parse(text: &str) -> Result<Row, UsageError> {
        if !validate_row(text) {
            return Err(UsageError::InvalidRow(text.to_string()));
        }
        let (left, right) = text
            .split_once(ARROW)
            .ok_or_else(|| UsageError::InvalidRow(text.to_string()))?;
        let left =
            Bits::parse(left.trim()).map_err(|_| UsageError::InvalidRow(text.to_string()))?;
        Ok(Row {
            left,
            right: right.trim().to_string(),
            text: text.to_string(),
        })
    }

    /// The original row text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Right side as a single output bit.
    pub fn output_bit(&self) -> Result<Bit, UsageError> {
        match Bits::parse(&self.right) {
            Ok(bits) if bits.len() == 1 => Ok(bits[0]),
            _ => Err(UsageError::NonBitOutput(self.text.clone())),
        }
    }

    /// Right side as an output sequence.
    pub fn output_bits(&self) -> Result<Bits, UsageError> {
        Bits::parse(&self.right).map_err(|_| UsageError::InvalidRow(self.text.clone()))
    }

    /// Right side as a choice list.
    pub fn output_choices(&self) -> Result<Choices, UsageError> {
        Choices::try_parse(&self.right)
    }
}
