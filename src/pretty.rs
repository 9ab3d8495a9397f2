//! Pretty printer. A simple buffer-append algorithm, not a layout-aware
//! combinator printer - the original's `buffer_expression` is the
//! grounding, and `String` stands in for its hand-rolled growable-byte
//! buffer (`buffer.c`) since Rust's stdlib already gives us that.

use crate::config;
use crate::expr::Expr;

/// Render `e` into `buf`, using the configured lambda character and
/// abstraction delimiter, and wrapping any node whose `parameterized`
/// flag is set in `*( ... )`.
pub fn buffer_expression(e: &Expr, buf: &mut String) {
    if e.is_parameterized() {
        buf.push('*');
        buf.push('(');
        buffer_inner(e, buf);
        buf.push(')');
    } else {
        buffer_inner(e, buf);
    }
}

fn buffer_inner(e: &Expr, buf: &mut String) {
    match e {
        Expr::Variable { name, .. } => {
            buf.push_str(&name.as_str());
        }
        Expr::Abstraction { bound, body, .. } => {
            buf.push(config::lambda_character());
            buf.push_str(&bound.as_str());
            buf.push(config::abstraction_delimiter());
            buffer_expression(body, buf);
        }
        Expr::Application { rator, rand, .. } => {
            paren_if(rator, buf, needs_parens_as_rator);
            buf.push(' ');
            paren_if(rand, buf, needs_parens_as_rand);
        }
    }
}

fn paren_if(e: &Expr, buf: &mut String, needs: fn(&Expr) -> bool) {
    if needs(e) {
        buf.push('(');
        buffer_expression(e, buf);
        buf.push(')');
    } else {
        buffer_expression(e, buf);
    }
}

/// An application's operator needs parens when it is itself an
/// abstraction (`\x.x y` would otherwise misparse as `\x.(x y)`).
fn needs_parens_as_rator(e: &Expr) -> bool {
    e.is_abstraction()
}

/// An application's operand needs parens whenever it is not a bare
/// variable, so left-associative application stays unambiguous.
fn needs_parens_as_rand(e: &Expr) -> bool {
    !e.is_variable()
}

pub fn print_expression(e: &Expr) -> String {
    let mut buf = String::new();
    buffer_expression(e, &mut buf);
    buf
}

#[cfg(test)]
mod pretty_tests {
    use super::*;
    use crate::atom::intern;

    #[test]
    fn prints_bare_variable() {
        let x = intern("pretty_tests::x");
        assert_eq!(print_expression(&Expr::variable(x)), "x");
    }

    #[test]
    fn prints_abstraction_with_default_config() {
        let x = intern("pretty_tests::abs_x");
        let e = Expr::abstraction(x, Expr::variable(x));
        assert_eq!(print_expression(&e), "%x.x");
    }

    #[test]
    fn parenthesizes_abstraction_as_rator() {
        let x = intern("pretty_tests::par_x");
        let y = intern("pretty_tests::par_y");
        let e = Expr::application(Expr::abstraction(x, Expr::variable(x)), Expr::variable(y));
        assert_eq!(print_expression(&e), "(%x.x) y");
    }

    #[test]
    fn parenthesizes_application_as_rand() {
        let x = intern("pretty_tests::rand_x");
        let y = intern("pretty_tests::rand_y");
        let z = intern("pretty_tests::rand_z");
        let e = Expr::application(
            Expr::variable(x),
            Expr::application(Expr::variable(y), Expr::variable(z)),
        );
        assert_eq!(print_expression(&e), "x (y z)");
    }

    #[test]
    fn wraps_parameterized_node() {
        let x = intern("pretty_tests::param_x");
        let e = Expr::parameterized_abstraction(x, Expr::variable(x));
        assert_eq!(print_expression(&e), "*(%x.x)");
    }
}
