//! Expression tree definitions and helpers.

use std::fmt;
use std::sync::Arc;

/// Name of the single free variable every expression ranges over.
pub const VARIABLE: &str = "x";

/// An immutable expression tree.
///
/// Children sit behind [`Arc`], so a derivative can share untouched operands
/// with the tree it came from. Nothing is mutated after construction.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Constant(f64),
    Variable,
    Add(Arc<Expr>, Arc<Expr>),
    Mul(Arc<Expr>, Arc<Expr>),
    Div(Arc<Expr>, Arc<Expr>),
    Pow(Arc<Expr>, Arc<Expr>),
    Sin(Arc<Expr>),
    Cos(Arc<Expr>),
    Exp(Arc<Expr>),
    Log(Arc<Expr>),
}

impl Expr {
    pub fn var() -> Self {
        Expr::Variable
    }

    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    /// True when no `x` leaf occurs anywhere in the tree.
    pub fn is_constant(&self) -> bool {
        !self.contains_variable()
    }

    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable => true,
            Expr::Add(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                a.contains_variable() || b.contains_variable()
            }
            Expr::Sin(a) | Expr::Cos(a) | Expr::Exp(a) | Expr::Log(a) => a.contains_variable(),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable => 1,
            Expr::Add(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                1 + a.node_count() + b.node_count()
            }
            Expr::Sin(a) | Expr::Cos(a) | Expr::Exp(a) | Expr::Log(a) => 1 + a.node_count(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable => 1,
            Expr::Add(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                1 + a.depth().max(b.depth())
            }
            Expr::Sin(a) | Expr::Cos(a) | Expr::Exp(a) | Expr::Log(a) => 1 + a.depth(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::render(self))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

/// Single-argument functions understood by the parser.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Function {
    Sin,
    Cos,
    Exp,
    Log,
}

impl Function {
    pub const ALL: [Function; 4] = [Function::Sin, Function::Cos, Function::Exp, Function::Log];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Exp => "exp",
            Function::Log => "log",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn apply(self, arg: impl Into<Arc<Expr>>) -> Expr {
        let arg = arg.into();
        match self {
            Function::Sin => Expr::Sin(arg),
            Function::Cos => Expr::Cos(arg),
            Function::Exp => Expr::Exp(arg),
            Function::Log => Expr::Log(arg),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infix operators. `Sub` has no node of its own and is rewritten on
/// application.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    pub fn apply(self, left: Expr, right: Expr) -> Expr {
        match self {
            BinaryOp::Add => add(left, right),
            BinaryOp::Sub => sub(left, right),
            BinaryOp::Mul => mul(left, right),
            BinaryOp::Div => div(left, right),
            BinaryOp::Pow => pow(left, right),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn zero() -> Expr {
    Expr::Constant(0.0)
}

pub fn one() -> Expr {
    Expr::Constant(1.0)
}

pub fn minus_one() -> Expr {
    Expr::Constant(-1.0)
}

pub fn add(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::Add(a.into(), b.into())
}

/// `a - b`, spelled as `a + (-1 * b)`.
pub fn sub(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    add(a, neg(b))
}

pub fn mul(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::Mul(a.into(), b.into())
}

pub fn div(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::Div(a.into(), b.into())
}

pub fn pow(base: impl Into<Arc<Expr>>, exp: impl Into<Arc<Expr>>) -> Expr {
    Expr::Pow(base.into(), exp.into())
}

/// `-a`, spelled as `-1 * a`.
pub fn neg(a: impl Into<Arc<Expr>>) -> Expr {
    mul(minus_one(), a)
}

pub fn sin(a: impl Into<Arc<Expr>>) -> Expr {
    Expr::Sin(a.into())
}

pub fn cos(a: impl Into<Arc<Expr>>) -> Expr {
    Expr::Cos(a.into())
}

pub fn exp(a: impl Into<Arc<Expr>>) -> Expr {
    Expr::Exp(a.into())
}

pub fn log(a: impl Into<Arc<Expr>>) -> Expr {
    Expr::Log(a.into())
}
