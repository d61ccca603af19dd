//! # Command line driver
//!
//! Evaluates a single operation on rationals given as `p/q` or as plain integers, for example
//! `rust-rational add 1/2 1/3` or `rust-rational contains 1/3 2/3 1/2`.
use std::cmp::Ordering;
use std::process;

use clap::{Parser, Subcommand};
use log::debug;

use rust_rational::data::number_types::rational::{self, parse_rational};
use rust_rational::{RationalBig, RationalError, RationalRange};

#[derive(Parser, Debug)]
#[clap(name = "rust-rational", version, about = "Exact arithmetic on fractions")]
struct Args {
    /// Also print a floating point approximation of a rational result (cmp and contains print no
    /// rational, so they ignore it)
    #[clap(long)]
    decimal: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum of two rationals
    Add {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        left: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        right: RationalBig,
    },
    /// Difference of two rationals
    Sub {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        left: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        right: RationalBig,
    },
    /// Product of two rationals
    Mul {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        left: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        right: RationalBig,
    },
    /// Quotient of two rationals
    Div {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        left: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        right: RationalBig,
    },
    /// Print -1, 0 or 1
    Cmp {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        left: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        right: RationalBig,
    },
    /// Whether a value lies in the closed range [start, end]
    Contains {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        start: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        end: RationalBig,
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        value: RationalBig,
    },
    /// Lowest terms of a rational
    Reduce {
        #[clap(value_parser = operand, allow_hyphen_values = true)]
        value: RationalBig,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    match run(args.command, args.decimal) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}

/// A `p/q` fraction or a plain integer.
fn operand(text: &str) -> Result<RationalBig, RationalError> {
    if text.contains('/') {
        parse_rational(text)
    } else {
        parse_rational(&format!("{}/1", text))
    }
}

fn run(command: Command, decimal: bool) -> Result<String, RationalError> {
    let value = match command {
        Command::Add { left, right } => rational::add(&left, &right),
        Command::Sub { left, right } => rational::subtract(&left, &right),
        Command::Mul { left, right } => rational::multiply(&left, &right),
        Command::Div { left, right } => rational::divide(&left, &right)?,
        Command::Reduce { value } => value.reduce(),
        Command::Cmp { left, right } => {
            let ordering = match rational::compare(&left, &right) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            return Ok(ordering.to_string());
        }
        Command::Contains { start, end, value } => {
            let range = RationalRange::new(start, end);
            debug!("testing {} against {}", value, range);
            return Ok(range.contains(&value).to_string());
        }
    };

    Ok(match (decimal, value.to_f64()) {
        (true, Some(approximation)) => format!("{} ~ {}", value, approximation),
        _ => value.to_string(),
    })
}
