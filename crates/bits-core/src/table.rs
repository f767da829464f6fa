//! Truth tables, probability tables and their compiled gates.
//!
//! Tables hold raw row text. Rows are parsed when a table is compiled,
//! checked or inverted; the compiled gate keeps its own copy of the parsed
//! rows and no longer refers to the table.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::bit::{Bit, Bits};
use crate::choices::Choices;
use crate::error::UsageError;
use crate::gate::{ManyToManyGate, MultiProbGate, OneToManyGate, OneToOneGate, ProbGate};
use crate::limits::Limits;
use crate::row::Row;

/// Deterministic table: each row maps an input sequence to one output bit.
///
/// ```
/// use bits_core::{Bit, Bits, TruthTable};
///
/// let and = TruthTable::from(vec!["0 0 -> 0", "0 1 -> 0", "1 0 -> 0", "1 1 -> 1"]);
/// assert!(and.is_complete());
///
/// let gate = and.gate();
/// assert_eq!(gate.call(&"1 1".parse::<Bits>().unwrap()), Bit::One);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    rows: Vec<String>,
}

/// Inverted table: each row maps an output to the inputs that produce it.
///
/// Rows read `"<output> -> <input> | <input> | ..."`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbTable {
    rows: Vec<String>,
}

impl TruthTable {
    /// Create a table from row texts.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check that every input combination has a row, using default limits.
    ///
    /// # Panics
    ///
    /// Panics if the first row is invalid or the table is wider than
    /// [`Limits::default`] allows.
    pub fn is_complete(&self) -> bool {
        match self.try_is_complete(&Limits::default()) {
            Ok(complete) => complete,
            Err(e) => panic!("{e}"),
        }
    }

    /// Check that every input combination has a row.
    ///
    /// The input width `n` is taken from the first row. Each of the `2^n`
    /// sequences `0..0` through `1..1` must equal the left side of some
    /// row. Rows that do not parse cover nothing. An empty table is never
    /// complete.
    pub fn try_is_complete(&self, limits: &Limits) -> Result<bool, UsageError> {
        let Some(first) = self.rows.first() else {
            return Ok(false);
        };
        let width = Row::parse(first)?.left.len();
        let combinations = match 1u64.checked_shl(width as u32) {
            Some(n) if limits.allows(width) => n,
            _ => {
                return Err(UsageError::WidthExceeded {
                    width,
                    max: limits.max_width,
                })
            }
        };

        let present: HashSet<Bits> = self
            .rows
            .iter()
            .filter_map(|text| Row::parse(text).ok())
            .map(|row| row.left)
            .collect();

        for value in 0..combinations {
            let inputs = Bits::from_index(value, width);
            if !present.contains(&inputs) {
                trace!(missing = %inputs, "truth table is incomplete");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Invert the table so it can be run in reverse.
    ///
    /// # Panics
    ///
    /// Panics on an invalid row. See [`TruthTable::try_invert`].
    pub fn invert(&self) -> ProbTable {
        match self.try_invert() {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }

    /// Invert the table so it can be run in reverse.
    ///
    /// Rows are grouped by output. Groups appear in the order their output
    /// is first seen, and inputs within a group keep table order.
    pub fn try_invert(&self) -> Result<ProbTable, UsageError> {
        let mut groups: Vec<(String, String)> = Vec::new();
        for text in &self.rows {
            let row = Row::parse(text)?;
            let inputs = row.left.to_string();
            match groups.iter().position(|(output, _)| *output == row.right) {
                Some(i) => {
                    let joined = &mut groups[i].1;
                    joined.push_str(" | ");
                    joined.push_str(&inputs);
                }
                None => groups.push((row.right, inputs)),
            }
        }
        debug!(rows = self.rows.len(), groups = groups.len(), "inverted truth table");
        Ok(ProbTable::new(
            groups
                .into_iter()
                .map(|(output, inputs)| format!("{output} -> {inputs}")),
        ))
    }

    /// Compile the table into a gate.
    ///
    /// # Panics
    ///
    /// Panics here if a row is invalid or does not end in one bit, and
    /// when called if no row matches the inputs.
    pub fn gate(&self) -> OneToManyGate {
        match self.try_gate() {
            Ok(gate) => gate,
            Err(e) => panic!("{e}"),
        }
    }

    /// Compile the table into a gate, returning row errors.
    ///
    /// The first row whose inputs equal the query decides the output.
    pub fn try_gate(&self) -> Result<OneToManyGate, UsageError> {
        let entries = self.entries(Row::output_bit)?;
        debug!(rows = entries.len(), "compiled truth table gate");
        Ok(OneToManyGate::new(move |inputs| expect_row(&entries, inputs)))
    }

    /// Compile a single-input table, like "not", into a gate.
    ///
    /// # Panics
    ///
    /// Same conditions as [`TruthTable::gate`].
    pub fn unary_gate(&self) -> OneToOneGate {
        let entries = match self.entries(Row::output_bit) {
            Ok(entries) => entries,
            Err(e) => panic!("{e}"),
        };
        OneToOneGate::new(move |input| expect_row(&entries, &Bits::from(input)))
    }

    /// Compile a table whose rows end in output sequences.
    ///
    /// # Panics
    ///
    /// Panics on an invalid row, and when called if no row matches.
    pub fn many_to_many_gate(&self) -> ManyToManyGate {
        let entries = match self.entries(Row::output_bits) {
            Ok(entries) => entries,
            Err(e) => panic!("{e}"),
        };
        debug!(rows = entries.len(), "compiled many-to-many gate");
        ManyToManyGate::new(move |inputs| expect_row(&entries, inputs))
    }

    /// Compile the table and evaluate it once.
    pub fn process(&self, inputs: &Bits) -> Bit {
        self.gate().call(inputs)
    }

    fn entries<T>(
        &self,
        output: impl Fn(&Row) -> Result<T, UsageError>,
    ) -> Result<Vec<(Bits, T)>, UsageError> {
        parse_entries(&self.rows, output)
    }
}

impl ProbTable {
    /// Create a table from row texts.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Compile the table into a probability gate.
    ///
    /// # Panics
    ///
    /// Panics here if a row is invalid, and when called if no row starts
    /// with the given bit.
    pub fn gate(&self) -> ProbGate {
        match self.try_gate() {
            Ok(gate) => gate,
            Err(e) => panic!("{e}"),
        }
    }

    /// Compile the table into a probability gate, returning row errors.
    pub fn try_gate(&self) -> Result<ProbGate, UsageError> {
        let entries = parse_entries(&self.rows, Row::output_choices)?;
        debug!(rows = entries.len(), "compiled probability gate");
        Ok(ProbGate::new(move |input| {
            expect_row(&entries, &Bits::from(input))
        }))
    }

    /// Compile a table keyed on whole output sequences.
    ///
    /// This is the inverse of a multi-output truth table.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ProbTable::gate`].
    pub fn multi_gate(&self) -> MultiProbGate {
        let entries = match parse_entries(&self.rows, Row::output_choices) {
            Ok(entries) => entries,
            Err(e) => panic!("{e}"),
        };
        debug!(rows = entries.len(), "compiled multi probability gate");
        MultiProbGate::new(move |inputs| expect_row(&entries, inputs))
    }

    /// Compile the table and evaluate it once.
    pub fn process(&self, input: Bit) -> Choices {
        self.gate().call(input)
    }
}

fn parse_entries<T>(
    rows: &[String],
    output: impl Fn(&Row) -> Result<T, UsageError>,
) -> Result<Vec<(Bits, T)>, UsageError> {
    rows.iter()
        .map(|text| {
            let row = Row::parse(text)?;
            let value = output(&row)?;
            Ok((row.left, value))
        })
        .collect()
}

/// First entry whose left side equals `key`.
fn find_row<'a, T>(entries: &'a [(Bits, T)], key: &Bits) -> Result<&'a T, UsageError> {
    entries
        .iter()
        .find(|(left, _)| left == key)
        .map(|(_, value)| value)
        .ok_or_else(|| UsageError::NoMatchingRow(key.to_string()))
}

fn expect_row<T: Clone>(entries: &[(Bits, T)], key: &Bits) -> T {
    match find_row(entries, key) {
        Ok(value) => value.clone(),
        Err(e) => panic!("{e}"),
    }
}

impl From<Vec<String>> for TruthTable {
    fn from(rows: Vec<String>) -> Self {
        Self { rows }
    }
}

impl From<Vec<&str>> for TruthTable {
    fn from(rows: Vec<&str>) -> Self {
        Self::new(rows)
    }
}

impl From<Vec<String>> for ProbTable {
    fn from(rows: Vec<String>) -> Self {
        Self { rows }
    }
}

impl From<Vec<&str>> for ProbTable {
    fn from(rows: Vec<&str>) -> Self {
        Self::new(rows)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join(", "))
    }
}

impl fmt::Display for ProbTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::Bit::{One, Zero};

    fn and() -> TruthTable {
        TruthTable::from(vec!["0 0 -> 0", "0 1 -> 0", "1 0 -> 0", "1 1 -> 1"])
    }

    fn xor() -> TruthTable {
        TruthTable::from(vec!["0 0 -> 0", "0 1 -> 1", "1 0 -> 1", "1 1 -> 0"])
    }

    fn bits(text: &str) -> Bits {
        text.parse().unwrap()
    }

    #[test]
    fn test_truth_table_to_gate() {
        let gate = and().gate();
        assert_eq!(gate.call(&bits("1 1")), One);
        assert_eq!(gate.call(&bits("0 0")), Zero);
        assert_eq!(gate.call(&bits("0 1")), Zero);
        assert_eq!(gate.call(&bits("1 0")), Zero);
    }

    #[test]
    fn test_first_matching_row_wins() {
        let table = TruthTable::from(vec!["1 -> 1", "1 -> 0", "0 -> 0"]);
        assert_eq!(table.process(&bits("1")), One);
    }

    #[test]
    #[should_panic(expected = "no row for")]
    fn test_gate_panics_on_missing_row() {
        let table = TruthTable::from(vec!["0 0 -> 0"]);
        table.gate().call(&bits("1 1"));
    }

    #[test]
    fn test_try_gate_rejects_bad_rows() {
        let table = TruthTable::from(vec!["0 0 -> 0", "0  1 -> 1"]);
        assert_eq!(
            table.try_gate().err(),
            Some(UsageError::InvalidRow("0  1 -> 1".to_string()))
        );
        let table = TruthTable::from(vec!["0 -> 1 1"]);
        assert_eq!(
            table.try_gate().err(),
            Some(UsageError::NonBitOutput("0 -> 1 1".to_string()))
        );
    }

    #[test]
    fn test_complete() {
        assert!(and().is_complete());
        assert!(xor().is_complete());
        assert!(!TruthTable::from(vec!["0 0 1 0 -> 0"]).is_complete());
        assert!(!TruthTable::default().is_complete());
    }

    #[test]
    fn test_incomplete_when_row_removed() {
        let mut rows = and().rows().to_vec();
        rows.remove(2);
        assert!(!TruthTable::from(rows).is_complete());
    }

    #[test]
    fn test_complete_ignores_row_order_and_duplicates() {
        let table = TruthTable::from(vec!["1 -> 0", "1 -> 0", "0 -> 1"]);
        assert!(table.is_complete());
    }

    #[test]
    fn test_complete_width_limit() {
        let table = TruthTable::from(vec!["0 0 0 -> 1"]);
        assert_eq!(
            table.try_is_complete(&Limits::new(2)),
            Err(UsageError::WidthExceeded { width: 3, max: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "not a valid row")]
    fn test_complete_panics_on_invalid_first_row() {
        TruthTable::from(vec!["0 a -> 1"]).is_complete();
    }

    #[test]
    fn test_invert_xor() {
        let pt = xor().invert();
        assert_eq!(pt.rows(), &["0 -> 0 0 | 1 1", "1 -> 0 1 | 1 0"]);
    }

    #[test]
    fn test_invert_and() {
        let pt = and().invert();
        assert_eq!(pt.rows(), &["0 -> 0 0 | 0 1 | 1 0", "1 -> 1 1"]);
    }

    #[test]
    fn test_invert_keeps_first_seen_output_order() {
        let table = TruthTable::from(vec!["1 1 -> 1", "0 0 -> 0", "1 0 -> 1"]);
        assert_eq!(table.invert().rows(), &["1 -> 1 1 | 1 0", "0 -> 0 0"]);
    }

    #[test]
    fn test_try_invert_rejects_missing_arrow() {
        let table = TruthTable::from(vec!["0 0 0"]);
        assert_eq!(
            table.try_invert(),
            Err(UsageError::InvalidRow("0 0 0".to_string()))
        );
    }

    #[test]
    fn test_prob_gate() {
        let pt = ProbTable::from(vec!["0 -> 0 0 | 1 1", "1 -> 0 1 | 1 0"]);
        let choices = pt.gate().call(Zero);
        assert_eq!(choices.as_slice(), &[bits("0 0"), bits("1 1")]);
        assert_eq!(pt.process(One).as_slice(), &[bits("0 1"), bits("1 0")]);
    }

    #[test]
    #[should_panic(expected = "no row for")]
    fn test_prob_gate_panics_on_missing_row() {
        ProbTable::from(vec!["0 -> 0 0"]).gate().call(One);
    }

    #[test]
    fn test_unary_gate() {
        let not = TruthTable::from(vec!["0 -> 1", "1 -> 0"]).unary_gate();
        assert_eq!(not.call(Zero), One);
        assert_eq!(not.call(One), Zero);
    }

    #[test]
    fn test_many_to_many_gate() {
        let half_adder = TruthTable::from(vec![
            "0 0 -> 0 0",
            "0 1 -> 0 1",
            "1 0 -> 0 1",
            "1 1 -> 1 0",
        ]);
        let gate = half_adder.many_to_many_gate();
        assert_eq!(gate.call(&bits("1 1")), bits("1 0"));
        assert_eq!(gate.call(&bits("1 0")), bits("0 1"));
    }

    #[test]
    fn test_multi_gate_inverts_multi_output_table() {
        let half_adder = TruthTable::from(vec![
            "0 0 -> 0 0",
            "0 1 -> 0 1",
            "1 0 -> 0 1",
            "1 1 -> 1 0",
        ]);
        let pt = half_adder.invert();
        assert_eq!(pt.rows()[1], "0 1 -> 0 1 | 1 0");
        let choices = pt.multi_gate().call(&bits("0 1"));
        assert_eq!(choices.as_slice(), &[bits("0 1"), bits("1 0")]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            xor().to_string(),
            "0 0 -> 0, 0 1 -> 1, 1 0 -> 1, 1 1 -> 0"
        );
    }
}
