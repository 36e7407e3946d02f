//! String-based helpers for quick usage and rendering.

use crate::calculus::differentiate as differentiate_expr;
use crate::error::Result;
use crate::eval::Bindings;
use crate::expr::Expr;
use crate::format::render;
use crate::parser::parse_expr;

pub fn parse(input: &str) -> Result<Expr> {
    parse_expr(input)
}

pub fn evaluate(input: &str, x: f64) -> Result<f64> {
    Ok(parse_expr(input)?.evaluate(x))
}

pub fn evaluate_with(input: &str, bindings: &Bindings) -> Result<f64> {
    parse_expr(input)?.evaluate_with(bindings)
}

pub fn differentiate(input: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    Ok(differentiate_expr(&expr))
}

/// Rendered derivative of `input`.
pub fn diff(input: &str) -> Result<String> {
    Ok(render(&differentiate(input)?))
}
