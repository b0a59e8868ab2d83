//! Subcommands and result rendering.

use anyhow::Result;
use calculator::Calculator;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{AppConfig, Format};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two integers
    Add(PairArgs),

    /// Subtract B from A
    Subtract(PairArgs),

    /// Sum any number of integers (none sums to 0)
    AddMultiple(AddMultipleArgs),

    /// Subtract each number from FIRST, left to right
    SubtractMultiple(SubtractMultipleArgs),

    /// Validate configuration and print it
    Check,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: i32,

    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

#[derive(Args, Debug)]
pub struct AddMultipleArgs {
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    pub numbers: Vec<i32>,
}

#[derive(Args, Debug)]
pub struct SubtractMultipleArgs {
    #[arg(allow_negative_numbers = true)]
    pub first: i32,

    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    pub numbers: Vec<i32>,
}

/// Outcome of one arithmetic command, as printed in JSON mode.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Evaluation {
    pub operation: &'static str,
    pub operands: Vec<i32>,
    pub result: i32,
}

impl Commands {
    /// Run the arithmetic behind this command, if it has any.
    #[must_use]
    pub fn evaluate(&self, calculator: &Calculator) -> Option<Evaluation> {
        let evaluation = match self {
            Commands::Add(PairArgs { a, b }) => Evaluation {
                operation: "add",
                operands: vec![*a, *b],
                result: calculator.add(*a, *b),
            },
            Commands::Subtract(PairArgs { a, b }) => Evaluation {
                operation: "subtract",
                operands: vec![*a, *b],
                result: calculator.subtract(*a, *b),
            },
            Commands::AddMultiple(args) => Evaluation {
                operation: "add_multiple",
                operands: args.numbers.clone(),
                result: calculator.add_multiple(&args.numbers),
            },
            Commands::SubtractMultiple(args) => Evaluation {
                operation: "subtract_multiple",
                operands: std::iter::once(args.first)
                    .chain(args.numbers.iter().copied())
                    .collect(),
                result: calculator.subtract_multiple(args.first, &args.numbers),
            },
            Commands::Check => return None,
        };
        Some(evaluation)
    }

    /// Execute the command and print its output to stdout.
    ///
    /// # Errors
    /// Returns an error if output cannot be serialized.
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        let calculator = Calculator::new();

        if let Some(evaluation) = self.evaluate(&calculator) {
            tracing::info!(
                operation = evaluation.operation,
                result = evaluation.result,
                "evaluated"
            );
            println!("{}", render(&evaluation, config.output.format)?);
        } else {
            // JSON mode keeps stdout parseable
            if config.output.format == Format::Text {
                println!("Configuration is valid");
            }
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        Ok(())
    }
}

/// Format an evaluation for stdout.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(evaluation: &Evaluation, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => evaluation.result.to_string(),
        Format::Json => serde_json::to_string(evaluation)?,
    })
}
