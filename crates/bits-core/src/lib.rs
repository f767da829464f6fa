//! Logic gates from textual truth tables, run forwards and in reverse.
//!
//! # Overview
//!
//! A [`TruthTable`] is a list of rows like `"0 1 -> 1"`. It can be:
//!
//! - **checked** for completeness (every input combination has a row)
//! - **compiled** into a gate and evaluated
//! - **inverted** into a [`ProbTable`], mapping each output to every input
//!   that produces it
//!
//! [`reverse`] combines inversion with a caller supplied validator to
//! recover an input that produces a given output.
//!
//! # Example
//!
//! ```
//! use bits_core::{reverse, Bit, Bits, TruthTable};
//!
//! // Define xor with a truth table
//! let xor = TruthTable::from(vec![
//!     "0 0 -> 0",
//!     "0 1 -> 1",
//!     "1 0 -> 1",
//!     "1 1 -> 0",
//! ]);
//! assert!(xor.is_complete());
//!
//! // Forwards: 1 xor 1 = 0
//! let original: Bits = "1 1".parse().unwrap();
//! let output = xor.process(&original);
//! assert_eq!(output, Bit::Zero);
//!
//! // Backwards: 0 could come from "0 0" or "1 1"
//! let found = reverse(&xor, output, |candidate| *candidate == original).unwrap();
//! assert_eq!(found.input, original);
//! assert_eq!(found.iterations, 2);
//! ```
//!
//! # Errors
//!
//! Malformed bit text is a [`ParseError`] and failed searches are a
//! [`ReverseError`]; both are ordinary values. Using a table outside its
//! contract (invalid rows, inputs with no row, wrong arity) is a
//! [`UsageError`] and panics, unless the `try_` form of the call is used.

pub mod bit;
pub mod choices;
pub mod error;
pub mod gate;
pub mod limits;
pub mod reverse;
pub mod row;
pub mod table;

pub use bit::{Bit, Bits};
pub use choices::Choices;
pub use error::{ParseError, ReverseError, UsageError};
pub use gate::{
    Gate, GateKind, ManyToManyGate, MultiProbGate, OneToManyGate, OneToOneGate, ProbGate, Signal,
};
pub use limits::Limits;
pub use reverse::{reverse, reverse_many, Reversal};
pub use row::{validate_row, Row};
pub use table::{ProbTable, TruthTable};
