use crate::expr::{Expr, Function, VARIABLE};

/// Fully parenthesized infix form: `(A op B)` for binary nodes and `fn(A)`
/// for functions. The output always parses back to an equivalent tree.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Constant(c) => out.push_str(&format_constant(*c)),
        Expr::Variable => out.push_str(VARIABLE),

        Expr::Add(a, b) => write_binary(out, a, '+', b),
        Expr::Mul(a, b) => write_binary(out, a, '*', b),
        Expr::Div(a, b) => write_binary(out, a, '/', b),
        Expr::Pow(a, b) => write_binary(out, a, '^', b),

        Expr::Sin(a) => write_call(out, Function::Sin, a),
        Expr::Cos(a) => write_call(out, Function::Cos, a),
        Expr::Exp(a) => write_call(out, Function::Exp, a),
        Expr::Log(a) => write_call(out, Function::Log, a),
    }
}

fn write_call(out: &mut String, function: Function, arg: &Expr) {
    out.push_str(function.name());
    out.push('(');
    write_expr(out, arg);
    out.push(')');
}

fn write_binary(out: &mut String, left: &Expr, op: char, right: &Expr) {
    out.push('(');
    write_expr(out, left);
    out.push(' ');
    out.push(op);
    out.push(' ');
    write_expr(out, right);
    out.push(')');
}

/// `f64` display form. The grammar has no unary minus, so a negative value
/// is written as a subtraction from zero.
pub fn format_constant(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value < 0.0 {
        format!("(0 - {})", -value)
    } else {
        format!("{value}")
    }
}
