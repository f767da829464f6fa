//! Single bits and ordered bit sequences.
//!
//! The text form of a sequence is its bits separated by single spaces,
//! for example `"1 0 0 1"`. A lone `"0"` or `"1"` is a sequence of one.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    /// Low, `0`.
    Zero,
    /// High, `1`.
    One,
}

impl Bit {
    /// Map the literal `"1"` to [`Bit::One`] and anything else to [`Bit::Zero`].
    ///
    /// Never fails. Use [`Bits::parse`] when bad tokens must be reported.
    pub fn lenient(token: &str) -> Bit {
        if token == "1" {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Parse exactly `"0"` or `"1"`.
    pub fn parse(token: &str) -> Result<Bit, ParseError> {
        match token {
            "0" => Ok(Bit::Zero),
            "1" => Ok(Bit::One),
            other => Err(ParseError::InvalidBit(other.to_string())),
        }
    }

    /// `true` for [`Bit::One`].
    #[inline]
    pub fn is_set(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => f.write_str("0"),
            Bit::One => f.write_str("1"),
        }
    }
}

/// Ordered sequence of bits, used as gate inputs or outputs.
///
/// Position is significant: bit `i` corresponds to wire `i` of the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits(Vec<Bit>);

impl Bits {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse space separated `0`/`1` tokens.
    ///
    /// Tokens are split on single spaces, so `"0  1"` yields an empty token
    /// and fails like any other bad token.
    pub fn parse(text: &str) -> Result<Bits, ParseError> {
        text.split(' ').map(Bit::parse).collect::<Result<Vec<_>, _>>().map(Bits)
    }

    /// The `width` lowest bits of `value`, most significant first.
    pub fn from_index(value: u64, width: usize) -> Bits {
        (0..width)
            .rev()
            .map(|shift| {
                let bit = value.checked_shr(shift as u32).unwrap_or(0) & 1;
                Bit::from(bit == 1)
            })
            .collect()
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the bits in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.0.iter()
    }

    /// Borrow the bits as a slice.
    pub fn as_slice(&self) -> &[Bit] {
        &self.0
    }

    /// Append a bit.
    pub fn push(&mut self, bit: Bit) {
        self.0.push(bit);
    }
}

impl FromStr for Bits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bits::parse(s)
    }
}

impl From<Vec<Bit>> for Bits {
    fn from(bits: Vec<Bit>) -> Self {
        Bits(bits)
    }
}

impl From<Bit> for Bits {
    fn from(bit: Bit) -> Self {
        Bits(vec![bit])
    }
}

impl<const N: usize> From<[Bit; N]> for Bits {
    fn from(bits: [Bit; N]) -> Self {
        Bits(bits.to_vec())
    }
}

impl FromIterator<Bit> for Bits {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Bits(iter.into_iter().collect())
    }
}

impl IntoIterator for Bits {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bits {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Bits {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.0[index]
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_lenient() {
        assert_eq!(Bit::lenient("1"), One);
        assert_eq!(Bit::lenient("0"), Zero);
        assert_eq!(Bit::lenient("x"), Zero);
        assert_eq!(Bit::lenient(""), Zero);
    }

    #[test]
    fn test_bits_to_string() {
        let bits = Bits::from([One, Zero, Zero, One, Zero, One, Zero]);
        assert_eq!(bits.to_string(), "1 0 0 1 0 1 0");
        assert_eq!(Bits::new().to_string(), "");
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(Bits::parse("1 0 1").unwrap(), Bits::from([One, Zero, One]));
        assert_eq!(Bits::parse("1").unwrap(), Bits::from(One));
        assert_eq!("0".parse::<Bits>().unwrap(), Bits::from(Zero));
    }

    #[test]
    fn test_parse_invalid_bit() {
        assert_eq!(
            Bits::parse("1 2 0"),
            Err(ParseError::InvalidBit("2".to_string()))
        );
        assert_eq!(Bits::parse("x"), Err(ParseError::InvalidBit("x".to_string())));
        assert_eq!(Bits::parse(""), Err(ParseError::InvalidBit(String::new())));
        // Double space leaves an empty token behind
        assert_eq!(
            Bits::parse("0  1"),
            Err(ParseError::InvalidBit(String::new()))
        );
    }

    #[test]
    fn test_equality() {
        let a = Bits::from([One, Zero]);
        let b = Bits::from([One, Zero]);
        let c = Bits::from([One, Zero, Zero]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Bits::from([Zero, One]));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Bits::from_index(0, 2).to_string(), "0 0");
        assert_eq!(Bits::from_index(1, 2).to_string(), "0 1");
        assert_eq!(Bits::from_index(2, 2).to_string(), "1 0");
        assert_eq!(Bits::from_index(5, 4).to_string(), "0 1 0 1");
        assert!(Bits::from_index(7, 0).is_empty());
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(Bit::from(true), One);
        assert!(!bool::from(Zero));
    }
}
