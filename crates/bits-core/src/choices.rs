//! Equally probable alternative sequences.

use std::fmt;

use crate::bit::Bits;
use crate::error::UsageError;

/// Ordered set of alternative sequences for one observed output.
///
/// Text form is sequences separated by `|`, for example `"0 0 | 0 1 | 1 0"`.
/// The order is parse order, which is also the order reverse search tries
/// the candidates in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices(Vec<Bits>);

impl Choices {
    /// Create an empty choice set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a pipe separated list of sequences.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains `->` (a whole row was passed) or if a
    /// segment is not a valid sequence. See [`Choices::try_parse`].
    pub fn parse(text: &str) -> Choices {
        match Self::try_parse(text) {
            Ok(choices) => choices,
            Err(e) => panic!("{e}"),
        }
    }

    /// Parse a pipe separated list of sequences, returning misuse as an error.
    ///
    /// Segments without any space in them are skipped, so a bare `"1"`
    /// contributes nothing while `"0 | 1"` yields two one-bit sequences.
    pub fn try_parse(text: &str) -> Result<Choices, UsageError> {
        if text.contains("->") {
            return Err(UsageError::ChoiceContainsArrow(text.to_string()));
        }
        let mut choices = Vec::new();
        for segment in text.split('|') {
            if !segment.contains(' ') {
                continue;
            }
            let bits = Bits::parse(segment.trim()).map_err(|source| UsageError::InvalidChoice {
                text: text.to_string(),
                source,
            })?;
            choices.push(bits);
        }
        Ok(Choices(choices))
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate alternatives in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bits> {
        self.0.iter()
    }

    /// Borrow the alternatives.
    pub fn as_slice(&self) -> &[Bits] {
        &self.0
    }

    /// Check whether `bits` is one of the alternatives.
    pub fn contains(&self, bits: &Bits) -> bool {
        self.0.contains(bits)
    }
}

impl From<Vec<Bits>> for Choices {
    fn from(choices: Vec<Bits>) -> Self {
        Choices(choices)
    }
}

impl IntoIterator for Choices {
    type Item = Bits;
    type IntoIter = std::vec::IntoIter<Bits>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = &'a Bits;
    type IntoIter = std::slice::Iter<'a, Bits>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Choices {
    type Output = Bits;

    fn index(&self, index: usize) -> &Bits {
        &self.0[index]
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bits) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", bits)?;
        }
        Ok(())
    }
}
