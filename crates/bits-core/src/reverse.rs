//! Recover an input from an output by searching the inverted table.

use tracing::{debug, trace};

use crate::bit::{Bit, Bits};
use crate::choices::Choices;
use crate::error::ReverseError;
use crate::table::TruthTable;

/// A successful reverse search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    /// The first candidate the validator accepted.
    pub input: Bits,
    /// Candidates examined, counting the accepted one.
    pub iterations: usize,
}

/// Find an input of `table` that produces `output`.
///
/// The table is inverted and the candidates for `output` are tried in
/// table order. The first candidate `validator` accepts is returned. The
/// validator decides what counts as correct; the search has no other
/// notion of it.
///
/// # Errors
///
/// Returns [`ReverseError::NoSolution`] with the number of candidates
/// examined when the validator rejects them all.
///
/// # Panics
///
/// Panics if the table has an invalid row or the inverted table has no row
/// for `output`.
///
/// ```
/// use bits_core::{reverse, Bit, Bits, TruthTable};
///
/// let xor = TruthTable::from(vec!["0 0 -> 0", "0 1 -> 1", "1 0 -> 1", "1 1 -> 0"]);
/// let wanted: Bits = "1 1".parse().unwrap();
///
/// let found = reverse(&xor, Bit::Zero, |candidate| *candidate == wanted).unwrap();
/// assert_eq!(found.input, wanted);
/// assert_eq!(found.iterations, 2);
/// ```
pub fn reverse<F>(table: &TruthTable, output: Bit, validator: F) -> Result<Reversal, ReverseError>
where
    F: FnMut(&Bits) -> bool,
{
    let candidates = table.invert().gate().call(output);
    search(table, candidates, validator)
}

/// Find an input of a multi-output `table` that produces `outputs`.
///
/// Same contract as [`reverse`], keyed on a whole output sequence.
pub fn reverse_many<F>(
    table: &TruthTable,
    outputs: &Bits,
    validator: F,
) -> Result<Reversal, ReverseError>
where
    F: FnMut(&Bits) -> bool,
{
    let candidates = table.invert().multi_gate().call(outputs);
    search(table, candidates, validator)
}

fn search<F>(table: &TruthTable, candidates: Choices, mut validator: F) -> Result<Reversal, ReverseError>
where
    F: FnMut(&Bits) -> bool,
{
    let mut iterations = 0;
    for candidate in candidates {
        iterations += 1;
        if validator(&candidate) {
            debug!(input = %candidate, iterations, "reverse search succeeded");
            return Ok(Reversal {
                input: candidate,
                iterations,
            });
        }
        trace!(%candidate, "candidate rejected");
    }
    debug!(iterations, "reverse search exhausted");
    Err(ReverseError::NoSolution {
        iterations,
        table: table.to_string(),
    })
}
