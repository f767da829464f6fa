//! Compiled gates and a uniform calling convention over them.
//!
//! Each gate shape wraps a closure with its own typed `call`. [`Gate`]
//! unifies them behind one `invoke` that always takes a sequence; a single
//! [`Bit`] converts into a sequence of length one.

use std::fmt;

use crate::bit::{Bit, Bits};
use crate::choices::Choices;
use crate::error::UsageError;

/// Gate with one input and one output, like "not".
pub struct OneToOneGate(Box<dyn Fn(Bit) -> Bit + Send + Sync>);

/// Gate with several inputs and one output, like "and" or "xor".
pub struct OneToManyGate(Box<dyn Fn(&Bits) -> Bit + Send + Sync>);

/// Gate with several inputs and several outputs.
pub struct ManyToManyGate(Box<dyn Fn(&Bits) -> Bits + Send + Sync>);

/// Probability gate: one input bit, several equally likely outputs.
///
/// With the table `"0 -> 1 1 | 0 0"`, calling with `0` returns the two
/// choices `1 1` and `0 0`.
pub struct ProbGate(Box<dyn Fn(Bit) -> Choices + Send + Sync>);

/// Probability gate keyed on a whole input sequence.
pub struct MultiProbGate(Box<dyn Fn(&Bits) -> Choices + Send + Sync>);

impl OneToOneGate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Bit) -> Bit + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Evaluate the gate.
    pub fn call(&self, input: Bit) -> Bit {
        (self.0)(input)
    }
}

impl OneToManyGate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&Bits) -> Bit + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Evaluate the gate.
    pub fn call(&self, inputs: &Bits) -> Bit {
        (self.0)(inputs)
    }
}

impl ManyToManyGate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&Bits) -> Bits + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Evaluate the gate.
    pub fn call(&self, inputs: &Bits) -> Bits {
        (self.0)(inputs)
    }
}

impl ProbGate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Bit) -> Choices + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Evaluate the gate.
    pub fn call(&self, input: Bit) -> Choices {
        (self.0)(input)
    }
}

impl MultiProbGate {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&Bits) -> Choices + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Evaluate the gate.
    pub fn call(&self, inputs: &Bits) -> Choices {
        (self.0)(inputs)
    }
}

macro_rules! opaque_debug {
    ($($ty:ident),*) => {
        $(impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty)).finish_non_exhaustive()
            }
        })*
    };
}

opaque_debug!(OneToOneGate, OneToManyGate, ManyToManyGate, ProbGate, MultiProbGate);

/// Shape of a [`Gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Bit in, bit out.
    OneToOne,
    /// Sequence in, bit out.
    OneToMany,
    /// Sequence in, sequence out.
    ManyToMany,
    /// Bit in, choices out.
    Prob,
    /// Sequence in, choices out.
    MultiProb,
}

impl GateKind {
    /// Required input length, if the shape takes exactly one bit.
    pub fn fixed_arity(self) -> Option<usize> {
        match self {
            GateKind::OneToOne | GateKind::Prob => Some(1),
            GateKind::OneToMany | GateKind::ManyToMany | GateKind::MultiProb => None,
        }
    }
}

/// Result of [`Gate::invoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Deterministic output; one bit gates yield a sequence of length one.
    Bits(Bits),
    /// Alternatives from a probability gate.
    Choices(Choices),
}

impl Signal {
    /// The single output bit, if this is a length-one sequence.
    pub fn as_bit(&self) -> Option<Bit> {
        match self {
            Signal::Bits(bits) if bits.len() == 1 => Some(bits[0]),
            _ => None,
        }
    }

    /// The output sequence, if deterministic.
    pub fn into_bits(self) -> Option<Bits> {
        match self {
            Signal::Bits(bits) => Some(bits),
            Signal::Choices(_) => None,
        }
    }

    /// The alternatives, if probabilistic.
    pub fn into_choices(self) -> Option<Choices> {
        match self {
            Signal::Choices(choices) => Some(choices),
            Signal::Bits(_) => None,
        }
    }
}

/// Any compiled gate.
#[derive(Debug)]
pub enum Gate {
    /// See [`OneToOneGate`].
    OneToOne(OneToOneGate),
    /// See [`OneToManyGate`].
    OneToMany(OneToManyGate),
    /// See [`ManyToManyGate`].
    ManyToMany(ManyToManyGate),
    /// See [`ProbGate`].
    Prob(ProbGate),
    /// See [`MultiProbGate`].
    MultiProb(MultiProbGate),
}

impl Gate {
    /// Shape of this gate.
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::OneToOne(_) => GateKind::OneToOne,
            Gate::OneToMany(_) => GateKind::OneToMany,
            Gate::ManyToMany(_) => GateKind::ManyToMany,
            Gate::Prob(_) => GateKind::Prob,
            Gate::MultiProb(_) => GateKind::MultiProb,
        }
    }

    /// Invoke the gate with a bit or a sequence.
    ///
    /// # Panics
    ///
    /// Panics if a single-input gate receives a sequence whose length is
    /// not one, or if the underlying table has no row for the input.
    pub fn invoke(&self, inputs: impl Into<Bits>) -> Signal {
        match self.try_invoke(inputs) {
            Ok(signal) => signal,
            Err(e) => panic!("{e}"),
        }
    }

    /// Invoke the gate, returning an arity mismatch as an error.
    ///
    /// A missing table row still panics inside the compiled closure.
    pub fn try_invoke(&self, inputs: impl Into<Bits>) -> Result<Signal, UsageError> {
        let inputs = inputs.into();
        if let Some(expected) = self.kind().fixed_arity() {
            if inputs.len() != expected {
                return Err(UsageError::Arity {
                    expected,
                    actual: inputs.len(),
                });
            }
        }
        let signal = match self {
            Gate::OneToOne(g) => Signal::Bits(Bits::from(g.call(inputs[0]))),
            Gate::OneToMany(g) => Signal::Bits(Bits::from(g.call(&inputs))),
            Gate::ManyToMany(g) => Signal::Bits(g.call(&inputs)),
            Gate::Prob(g) => Signal::Choices(g.call(inputs[0])),
            Gate::MultiProb(g) => Signal::Choices(g.call(&inputs)),
        };
        Ok(signal)
    }
}

impl From<OneToOneGate> for Gate {
    fn from(g: OneToOneGate) -> Self {
        Gate::OneToOne(g)
    }
}

impl From<OneToManyGate> for Gate {
    fn from(g: OneToManyGate) -> Self {
        Gate::OneToMany(g)
    }
}

impl From<ManyToManyGate> for Gate {
    fn from(g: ManyToManyGate) -> Self {
        Gate::ManyToMany(g)
    }
}

impl From<ProbGate> for Gate {
    fn from(g: ProbGate) -> Self {
        Gate::Prob(g)
    }
}

impl From<MultiProbGate> for Gate {
    fn from(g: MultiProbGate) -> Self {
        Gate::MultiProb(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::Bit::{One, Zero};

    fn not_gate() -> Gate {
        OneToOneGate::new(|b| Bit::from(!b.is_set())).into()
    }

    fn and_gate() -> Gate {
        OneToManyGate::new(|bits| Bit::from(bits.iter().all(|b| b.is_set()))).into()
    }

    #[test]
    fn test_single_bit_is_normalized() {
        assert_eq!(not_gate().invoke(One).as_bit(), Some(Zero));
        assert_eq!(and_gate().invoke(One).as_bit(), Some(One));
    }

    #[test]
    fn test_sequence_input() {
        let gate = and_gate();
        assert_eq!(gate.invoke(Bits::from([One, One])).as_bit(), Some(One));
        assert_eq!(gate.invoke(Bits::from([One, Zero])).as_bit(), Some(Zero));
        assert_eq!(not_gate().invoke(Bits::from(Zero)).as_bit(), Some(One));
    }

    #[test]
    fn test_arity_checked_at_boundary() {
        let gate = not_gate();
        assert_eq!(
            gate.try_invoke(Bits::from([One, One])),
            Err(UsageError::Arity {
                expected: 1,
                actual: 2
            })
        );
        let prob: Gate = ProbGate::new(|_| Choices::new()).into();
        assert!(prob.try_invoke(Bits::new()).is_err());
    }

    #[test]
    #[should_panic(expected = "gate takes 1 input(s), got 2")]
    fn test_invoke_panics_on_arity() {
        not_gate().invoke(Bits::from([Zero, Zero]));
    }

    #[test]
    fn test_many_to_many() {
        let swap: Gate = ManyToManyGate::new(|bits| bits.iter().rev().copied().collect()).into();
        assert_eq!(
            swap.invoke(Bits::from([One, Zero])),
            Signal::Bits(Bits::from([Zero, One]))
        );
        assert_eq!(swap.kind(), GateKind::ManyToMany);
    }

    #[test]
    fn test_prob_gates_return_choices() {
        let prob: Gate = ProbGate::new(|_| Choices::parse("0 0 | 1 1")).into();
        let choices = prob.invoke(Zero).into_choices().unwrap();
        assert_eq!(choices.len(), 2);

        let multi: Gate = MultiProbGate::new(|_| Choices::parse("1 1")).into();
        assert!(multi.invoke(Bits::from([One, One])).into_bits().is_none());
    }
}
