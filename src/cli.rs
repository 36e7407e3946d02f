//! Argument handling for the `differentiator` binary.

use thiserror::Error;

use symdiff::prelude::{Bindings, diff, evaluate_with};
use symdiff::{ExprError, VARIABLE};

pub const USAGE: &str = "usage:
  differentiator --eval \"expression\" name=value...
  differentiator --diff \"expression\" --by name";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Eval { expr: String, bindings: Bindings },
    Diff { expr: String, by: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("invalid arguments")]
    Usage,
    #[error("no variable values given")]
    NoBindings,
    #[error(transparent)]
    Expr(#[from] ExprError),
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [mode, expr, assignments @ ..] if mode == "--eval" => {
            if assignments.is_empty() {
                return Err(CliError::NoBindings);
            }
            let bindings = Bindings::from_assignments(assignments)?;
            Ok(Command::Eval {
                expr: expr.clone(),
                bindings,
            })
        }
        [mode, expr, by_flag, by] if mode == "--diff" && by_flag == "--by" => Ok(Command::Diff {
            expr: expr.clone(),
            by: by.clone(),
        }),
        _ => Err(CliError::Usage),
    }
}

/// Execute `command` and return the line to print.
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Eval { expr, bindings } => Ok(evaluate_with(expr, bindings)?.to_string()),
        Command::Diff { expr, by } => {
            if let Some(warning) = variable_mismatch(by) {
                eprintln!("warning: {warning}");
            }
            Ok(diff(expr)?)
        }
    }
}

/// Notice for a `--by` name other than the one variable the core knows.
pub fn variable_mismatch(by: &str) -> Option<String> {
    (by != VARIABLE).then(|| format!("differentiating with respect to `{VARIABLE}`, not `{by}`"))
}
