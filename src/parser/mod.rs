//! Operator-precedence parser built on an explicit operator stack and
//! operand stack.

pub mod lexer;
mod options;

use log::debug;

use crate::error::{ExprError, Result};
use crate::expr::{BinaryOp, Expr, Function, VARIABLE};

pub use lexer::{Token, tokenize};
pub use options::{Associativity, DEFAULT_MAX_DEPTH, ParseOptions};

pub fn parse_expr(input: &str) -> Result<Expr> {
    parse_expr_with(input, &ParseOptions::default())
}

pub fn parse_expr_with(input: &str, options: &ParseOptions) -> Result<Expr> {
    let tokens = tokenize(input)?;
    debug!("parsing {} tokens from {input:?}", tokens.len());

    let mut yard = ShuntingYard::new(options);
    let mut tokens = tokens.into_iter().peekable();
    while let Some(token) = tokens.next() {
        match token {
            Token::Number(text) => yard.push_operand(parse_number(text)?)?,
            Token::Ident(VARIABLE) => yard.push_operand(Expr::Variable)?,
            Token::Ident(name) => {
                let function = Function::from_name(name)
                    .ok_or_else(|| ExprError::syntax(format!("unknown identifier `{name}`")))?;
                if tokens.peek() != Some(&Token::Symbol('(')) {
                    return Err(ExprError::syntax(format!("`{name}` must be followed by `(`")));
                }
                yard.push_function(function)?;
            }
            Token::Symbol('(') => yard.open()?,
            Token::Symbol(')') => yard.close()?,
            Token::Symbol(c) => match BinaryOp::from_symbol(c) {
                Some(op) => yard.push_binary(op)?,
                None => return Err(ExprError::UnknownOperator(c.to_string())),
            },
        }
    }

    let expr = yard.finish()?;
    debug!("parsed {} nodes", expr.node_count());
    Ok(expr)
}

fn parse_number(text: &str) -> Result<Expr> {
    text.parse::<f64>()
        .map(Expr::Constant)
        .map_err(|_| ExprError::syntax(format!("malformed number `{text}`")))
}

enum Pending {
    Open,
    Binary(BinaryOp),
    Function(Function),
}

struct ShuntingYard<'o> {
    /// Each operand with the depth of its tree.
    operands: Vec<(Expr, usize)>,
    operators: Vec<Pending>,
    /// False right after an operand or `)`, true otherwise.
    expect_operand: bool,
    options: &'o ParseOptions,
}

impl<'o> ShuntingYard<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            expect_operand: true,
            options,
        }
    }

    fn push_operand(&mut self, expr: Expr) -> Result<()> {
        if !self.expect_operand {
            return Err(ExprError::syntax("operand follows operand without an operator"));
        }
        self.operands.push((expr, 1));
        self.expect_operand = false;
        Ok(())
    }

    fn push_function(&mut self, function: Function) -> Result<()> {
        if !self.expect_operand {
            return Err(ExprError::syntax(format!("unexpected function `{function}`")));
        }
        self.operators.push(Pending::Function(function));
        Ok(())
    }

    fn open(&mut self) -> Result<()> {
        if !self.expect_operand {
            return Err(ExprError::syntax("unexpected `(` after operand"));
        }
        self.operators.push(Pending::Open);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.expect_operand {
            return Err(ExprError::syntax("missing operand before `)`"));
        }
        loop {
            match self.operators.pop() {
                Some(Pending::Open) => break,
                Some(pending) => self.apply(pending)?,
                None => return Err(ExprError::syntax("unbalanced parentheses: unmatched `)`")),
            }
        }
        // A function owns the group that just closed.
        if let Some(Pending::Function(function)) = self.operators.last() {
            let function = *function;
            self.operators.pop();
            self.apply(Pending::Function(function))?;
        }
        Ok(())
    }

    fn push_binary(&mut self, op: BinaryOp) -> Result<()> {
        if self.expect_operand {
            return Err(ExprError::syntax(format!("missing left operand for `{op}`")));
        }
        while let Some(&Pending::Binary(top)) = self.operators.last() {
            if !self.options.pops_before(top, op) {
                break;
            }
            self.operators.pop();
            self.apply(Pending::Binary(top))?;
        }
        self.operators.push(Pending::Binary(op));
        self.expect_operand = true;
        Ok(())
    }

    fn finish(mut self) -> Result<Expr> {
        if self.operands.is_empty() && self.operators.is_empty() {
            return Err(ExprError::syntax("empty expression"));
        }
        if self.expect_operand {
            return Err(ExprError::syntax("unexpected end of input: missing operand"));
        }
        while let Some(pending) = self.operators.pop() {
            if let Pending::Open = pending {
                return Err(ExprError::syntax("unbalanced parentheses: missing `)`"));
            }
            self.apply(pending)?;
        }
        let (expr, _) = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(ExprError::syntax("leftover operands"));
        }
        Ok(expr)
    }

    fn apply(&mut self, pending: Pending) -> Result<()> {
        let (expr, depth) = match pending {
            Pending::Function(function) => {
                let (arg, depth) = self.pop_operand()?;
                (function.apply(arg), depth + 1)
            }
            Pending::Binary(op) => {
                let (right, right_depth) = self.pop_operand()?;
                let (left, left_depth) = self.pop_operand()?;
                // `a - b` becomes `a + (-1 * b)`, one level more on the right.
                let right_depth = match op {
                    BinaryOp::Sub => right_depth + 1,
                    _ => right_depth,
                };
                (op.apply(left, right), left_depth.max(right_depth) + 1)
            }
            Pending::Open => return Err(ExprError::syntax("unbalanced parentheses")),
        };
        if depth > self.options.max_depth {
            return Err(ExprError::syntax(format!(
                "expression nested too deeply (limit {})",
                self.options.max_depth
            )));
        }
        self.operands.push((expr, depth));
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<(Expr, usize)> {
        self.operands
            .pop()
            .ok_or_else(|| ExprError::syntax("missing operand"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, minus_one, mul, pow, sin};

    fn constant(value: f64) -> Expr {
        Expr::constant(value)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let e = parse_expr("1 + 2 * x").unwrap();
        assert_eq!(e, add(constant(1.0), mul(constant(2.0), Expr::var())));
    }

    #[test]
    fn minus_is_rewritten_to_addition() {
        let e = parse_expr("x - 3").unwrap();
        assert_eq!(e, add(Expr::var(), mul(minus_one(), constant(3.0))));
    }

    #[test]
    fn subtraction_chains_group_left() {
        let e = parse_expr("8 - 4 - 2").unwrap();
        assert_eq!(e.evaluate(0.0), 2.0);
    }

    #[test]
    fn function_applies_to_its_group_only() {
        let e = parse_expr("sin(x) + 1").unwrap();
        assert_eq!(e, add(sin(Expr::var()), constant(1.0)));
        let e = parse_expr("2 * sin(x ^ 2)").unwrap();
        assert_eq!(e, mul(constant(2.0), sin(pow(Expr::var(), constant(2.0)))));
    }

    #[test]
    fn power_associativity_is_configurable() {
        let left = parse_expr("2 ^ 3 ^ 2").unwrap();
        assert_eq!(left, pow(pow(constant(2.0), constant(3.0)), constant(2.0)));

        let options = ParseOptions::new().with_power_associativity(Associativity::Right);
        let right = parse_expr_with("2 ^ 3 ^ 2", &options).unwrap();
        assert_eq!(right, pow(constant(2.0), pow(constant(3.0), constant(2.0))));
    }

    #[test]
    fn malformed_numbers_are_syntax_errors() {
        assert!(parse_expr("1.2.3").unwrap_err().is_syntax());
        assert!(parse_expr(". + 1").unwrap_err().is_syntax());
        assert_eq!(parse_expr("1.").unwrap(), constant(1.0));
    }

    #[test]
    fn structural_errors() {
        let inputs = [
            "", "(", ")", "+", "3 +", "(3 +)", "()", "-x", "3 4", "x (1)", "sin x", "sin", "y",
            "((x)",
        ];
        for input in inputs {
            let err = parse_expr(input).unwrap_err();
            assert!(err.is_syntax(), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn tracked_depth_matches_tree_depth() {
        let options = ParseOptions::new().with_max_depth(5);
        let e = parse_expr_with("x - sin(x) * 2", &options).unwrap();
        assert_eq!(e.depth(), 5);
        let err = parse_expr_with("x - sin(exp(x)) * 2", &options).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(
            parse_expr("x % 2"),
            Err(ExprError::UnknownOperator("%".into()))
        );
    }
}
