use std::sync::Arc;

use log::trace;

use crate::expr::{Expr, add, cos, div, exp, log, minus_one, mul, one, pow, sin, zero};

/// Derivative with respect to `x`.
///
/// Rules are applied structurally and nothing is simplified, so `d(3*x)`
/// comes back as `((0 * x) + (3 * 1))`. Operands of `expr` are shared with
/// the result, never copied.
pub fn differentiate(expr: &Expr) -> Expr {
    let derivative = Differentiator.derive(expr);
    trace!(
        "differentiated {} nodes into {} nodes",
        expr.node_count(),
        derivative.node_count()
    );
    derivative
}

/// Apply [`differentiate`] `n` times; `n == 0` returns a clone.
pub fn differentiate_n(expr: &Expr, n: usize) -> Expr {
    (0..n).fold(expr.clone(), |acc, _| differentiate(&acc))
}

impl Expr {
    pub fn differentiate(&self) -> Expr {
        differentiate(self)
    }

    pub fn differentiate_n(&self, n: usize) -> Expr {
        differentiate_n(self, n)
    }
}

struct Differentiator;

impl Differentiator {
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Constant(_) => zero(),
            Expr::Variable => one(),

            Expr::Add(a, b) => add(self.derive(a), self.derive(b)),
            Expr::Mul(a, b) => self.product_rule(a, b),
            Expr::Div(a, b) => self.quotient_rule(a, b),
            Expr::Pow(a, b) => self.power_rule(a, b),

            Expr::Sin(a) => self.chain_rule(a, cos),
            Expr::Cos(a) => mul(minus_one(), self.chain_rule(a, sin)),
            Expr::Exp(a) => self.chain_rule(a, exp),
            Expr::Log(a) => div(self.derive(a), a.clone()),
        }
    }

    fn product_rule(&self, a: &Arc<Expr>, b: &Arc<Expr>) -> Expr {
        add(
            mul(self.derive(a), b.clone()),
            mul(a.clone(), self.derive(b)),
        )
    }

    fn quotient_rule(&self, a: &Arc<Expr>, b: &Arc<Expr>) -> Expr {
        div(
            add(
                mul(self.derive(a), b.clone()),
                mul(minus_one(), mul(a.clone(), self.derive(b))),
            ),
            mul(b.clone(), b.clone()),
        )
    }

    /// General form, valid for a positive base; a constant exponent gets no
    /// special treatment.
    fn power_rule(&self, base: &Arc<Expr>, exponent: &Arc<Expr>) -> Expr {
        mul(
            pow(base.clone(), exponent.clone()),
            add(
                mul(self.derive(exponent), log(base.clone())),
                mul(exponent.clone(), div(self.derive(base), base.clone())),
            ),
        )
    }

    /// `outer(arg) * d(arg)`
    fn chain_rule<F>(&self, arg: &Arc<Expr>, outer: F) -> Expr
    where
        F: Fn(Arc<Expr>) -> Expr,
    {
        mul(outer(arg.clone()), self.derive(arg))
    }
}
