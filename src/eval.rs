//! Numeric evaluation of expression trees.

use std::collections::BTreeMap;

use log::warn;
use num_traits::{Float, NumCast};

use crate::error::{ExprError, Result};
use crate::expr::{Expr, VARIABLE};

impl Expr {
    /// Evaluate at `x`. Follows IEEE-754: `1/0` is infinite, `log(-1)` is NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.eval(x)
    }

    /// Evaluate in any float type.
    pub fn eval<T: Float>(&self, x: T) -> T {
        match self {
            Expr::Constant(c) => <T as NumCast>::from(*c).unwrap_or_else(T::nan),
            Expr::Variable => x,
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => a.eval(x) / b.eval(x),
            Expr::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Expr::Sin(a) => a.eval(x).sin(),
            Expr::Cos(a) => a.eval(x).cos(),
            Expr::Exp(a) => a.eval(x).exp(),
            Expr::Log(a) => a.eval(x).ln(),
        }
    }

    /// Evaluate against named bindings. Only `x` is consulted; it may be
    /// absent when the tree has no variable leaf.
    pub fn evaluate_with(&self, bindings: &Bindings) -> Result<f64> {
        for (name, _) in bindings.iter().filter(|(name, _)| *name != VARIABLE) {
            warn!("ignoring binding for `{name}`: only `{VARIABLE}` is supported");
        }
        match bindings.get(VARIABLE) {
            Some(x) => Ok(self.evaluate(x)),
            None if self.is_constant() => Ok(self.evaluate(f64::NAN)),
            None => Err(ExprError::UndefinedVariable(VARIABLE.to_string())),
        }
    }
}

/// Variable name to value map, ordered by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace; returns the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Split `name=value` into its parts. Whitespace around either side is
    /// ignored.
    pub fn parse_assignment(assignment: &str) -> Result<(String, f64)> {
        let invalid = || ExprError::InvalidAssignment(assignment.to_string());
        let (name, value) = assignment.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok((name.to_string(), value))
    }

    /// Collect `name=value` strings; a later name replaces an earlier one.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assignments
            .into_iter()
            .map(|a| Self::parse_assignment(a.as_ref()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, div, log, one, zero};

    #[test]
    fn division_by_zero_is_not_an_error() {
        let e = div(one(), zero());
        assert!(e.evaluate(0.0).is_infinite());
        let e = div(zero(), zero());
        assert!(e.evaluate(0.0).is_nan());
        assert!(log(Expr::var()).evaluate(-1.0).is_nan());
    }

    #[test]
    fn generic_evaluation_in_f32() {
        let e = add(Expr::var(), Expr::constant(0.5));
        assert_eq!(e.eval(1.5f32), 2.0f32);
    }

    #[test]
    fn bindings_require_x_only_when_used() {
        let e = add(Expr::var(), one());
        let bound = Bindings::new().with("x", 2.0).with("y", 7.0);
        assert_eq!(e.evaluate_with(&bound), Ok(3.0));

        let unbound = Bindings::new().with("y", 7.0);
        assert_eq!(
            e.evaluate_with(&unbound),
            Err(ExprError::UndefinedVariable("x".into()))
        );
        assert_eq!(add(one(), one()).evaluate_with(&Bindings::new()), Ok(2.0));
    }

    #[test]
    fn parses_assignments() {
        assert_eq!(Bindings::parse_assignment("x=2"), Ok(("x".to_string(), 2.0)));
        assert_eq!(Bindings::parse_assignment(" y = -0.5 "), Ok(("y".to_string(), -0.5)));
        for bad in ["x", "=3", "x=", "x=abc", "x1=2", "x=2=3"] {
            assert_eq!(
                Bindings::parse_assignment(bad),
                Err(ExprError::InvalidAssignment(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn builds_from_assignment_strings() {
        let b = Bindings::from_assignments(["x=1", "t=4", "x=3"]).unwrap();
        assert_eq!(b.get("x"), Some(3.0));
        assert_eq!(b.get("t"), Some(4.0));
        assert!(Bindings::from_assignments(["x=1", "oops"]).is_err());
    }

    #[test]
    fn bindings_collect_and_replace() {
        let mut b: Bindings = [("x", 1.0), ("a", 2.0)].into_iter().collect();
        assert_eq!(b.insert("x", 4.0), Some(1.0));
        assert_eq!(b.len(), 2);
        let names: Vec<&str> = b.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "x"]);
    }
}
