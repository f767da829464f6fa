//! Reverse a logic gate from its output.
//!
//! Builds a truth table, runs it forwards on the given input, then
//! recovers that input from the output by searching the inverted table:
//!
//! ```text
//! $ bits-demo --gate xor --input "1 1"
//! Reversed xor in 2 iterations (instead of 4) and found 1 1 given 0
//! ```
//!
//! Set `RUST_LOG=debug` to see the search.

use std::io;

use anyhow::{bail, Context, Result};
use bits_core::{reverse, Bit, Bits, Limits, Row, TruthTable};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reverse a logic gate from its output
#[derive(Parser, Debug)]
#[command(name = "bits-demo")]
#[command(about = "Recover a gate input from its output via the inverted truth table")]
#[command(version)]
struct Args {
    /// Built-in two-input gate to reverse
    #[arg(short, long, value_enum, default_value_t = BuiltinGate::Xor)]
    gate: BuiltinGate,

    /// Custom truth table row, e.g. "0 1 -> 1" (repeat for each row; overrides --gate)
    #[arg(short, long = "row")]
    rows: Vec<String>,

    /// Input bits to run forwards and then recover
    #[arg(short, long, default_value = "1 1")]
    input: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BuiltinGate {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
}

impl BuiltinGate {
    fn name(self) -> &'static str {
        match self {
            BuiltinGate::And => "and",
            BuiltinGate::Or => "or",
            BuiltinGate::Xor => "xor",
            BuiltinGate::Nand => "nand",
            BuiltinGate::Nor => "nor",
            BuiltinGate::Xnor => "xnor",
        }
    }

    fn eval(self, a: bool, b: bool) -> bool {
        match self {
            BuiltinGate::And => a && b,
            BuiltinGate::Or => a || b,
            BuiltinGate::Xor => a ^ b,
            BuiltinGate::Nand => !(a && b),
            BuiltinGate::Nor => !(a || b),
            BuiltinGate::Xnor => a == b,
        }
    }

    fn table(self) -> TruthTable {
        let rows: Vec<String> = (0..4u64)
            .map(|i| {
                let inputs = Bits::from_index(i, 2);
                let output = self.eval(inputs[0].is_set(), inputs[1].is_set());
                format!("{} -> {}", inputs, Bit::from(output))
            })
            .collect();
        TruthTable::from(rows)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let (name, table) = if args.rows.is_empty() {
        (args.gate.name(), args.gate.table())
    } else {
        ("table", TruthTable::new(args.rows))
    };
    info!(%table, "loaded truth table");

    if !table.try_is_complete(&Limits::default())? {
        bail!("truth table is incomplete: {}", table);
    }
    // Complete tables have at least one row
    let width = Row::parse(&table.rows()[0])?.left.len();

    let to = Bits::parse(&args.input)
        .with_context(|| format!("invalid --input {:?}", args.input))?;
    if to.len() != width {
        bail!("--input has {} bits, the table takes {}", to.len(), width);
    }
    let from = table.try_gate()?.call(&to);

    let found = reverse(&table, from, |input| *input == to)?;

    println!(
        "Reversed {} in {} iterations (instead of {}) and found {} given {}",
        name,
        found.iterations,
        table.len(),
        found.input,
        from
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        for gate in BuiltinGate::value_variants() {
            assert!(gate.table().is_complete(), "{} is incomplete", gate.name());
        }
    }

    #[test]
    fn test_builtin_xor_table() {
        assert_eq!(
            BuiltinGate::Xor.table().rows(),
            &["0 0 -> 0", "0 1 -> 1", "1 0 -> 1", "1 1 -> 0"]
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["bits-demo", "--gate", "and", "--input", "0 1"]);
        assert!(matches!(args.gate, BuiltinGate::And));
        assert_eq!(args.input, "0 1");
        assert!(args.rows.is_empty());

        let args = Args::parse_from(["bits-demo", "-r", "0 -> 1", "-r", "1 -> 0"]);
        assert_eq!(args.rows, vec!["0 -> 1", "1 -> 0"]);
    }
}
