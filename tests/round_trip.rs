use proptest::prelude::*;

use symdiff::{Expr, add, cos, div, exp, log, mul, parse_expr, pow, render, sin, sub};

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        Just(Expr::var()),
        (0u32..1000).prop_map(|n| Expr::constant(f64::from(n) / 8.0)),
    ]
}

fn expression() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| add(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| sub(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| mul(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| div(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| pow(a, b)),
            inner.clone().prop_map(sin),
            inner.clone().prop_map(cos),
            inner.clone().prop_map(exp),
            inner.prop_map(log),
        ]
    })
}

fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b || (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

proptest! {
    #[test]
    fn rendered_trees_reparse_to_the_same_value(expr in expression(), x in -4.0f64..4.0) {
        let reparsed = parse_expr(&render(&expr)).expect("rendered text parses");
        prop_assert!(same_value(expr.evaluate(x), reparsed.evaluate(x)));
    }

    #[test]
    fn rendered_derivatives_reparse_to_the_same_value(expr in expression(), x in 0.1f64..4.0) {
        let derivative = expr.differentiate();
        let reparsed = parse_expr(&render(&derivative)).expect("rendered derivative parses");
        prop_assert!(same_value(derivative.evaluate(x), reparsed.evaluate(x)));
    }

    #[test]
    fn parse_render_parse_is_stable_in_value(input in "[x0-9 ]{1,3}( [-+*/^] [x0-9]{1,2}){0,4}", x in 0.5f64..2.0) {
        if let Ok(expr) = parse_expr(&input) {
            let reparsed = parse_expr(&render(&expr)).expect("rendered text parses");
            prop_assert!(same_value(expr.evaluate(x), reparsed.evaluate(x)));
        }
    }

    #[test]
    fn parser_never_panics(input in "[-+*/^() x0-9.sinco]{0,24}") {
        let _ = parse_expr(&input);
    }
}
