//! Parsing, numeric evaluation and symbolic differentiation of arithmetic
//! expressions over a single variable `x`.
//!
//! ```
//! use symdiff::parse_expr;
//!
//! let expr = parse_expr("x ^ 2").unwrap();
//! assert_eq!(expr.evaluate(3.0), 9.0);
//! assert!((expr.differentiate().evaluate(3.0) - 6.0).abs() < 1e-9);
//! ```

pub mod calculus;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod ui;

pub use calculus::{differentiate, differentiate_n};
pub use error::{ExprError, Result};
pub use eval::Bindings;
pub use expr::{
    BinaryOp, Expr, Function, VARIABLE, add, cos, div, exp, log, mul, neg, one, pow, sin, sub,
    zero,
};
pub use format::render;
pub use parser::{Associativity, ParseOptions, parse_expr, parse_expr_with};
