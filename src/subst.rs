//! Capture-avoiding substitution. `substitute(target, replacement, body)`
//! replaces every free occurrence of `target` in `body` with a fresh copy
//! of `replacement`, renaming bound variables along the way whenever a
//! literal substitution would let a free variable of `replacement` get
//! captured by one of `body`'s binders. Mirrors the original's
//! `substitute`/`real_substitute`/`abstraction_substitution`, including
//! its trace/step I/O hooks.

use std::io::{self, Write};

use crate::analysis::{find_nonfree_var, free_vars};
use crate::atom::Ident;
use crate::config;
use crate::expr::{copy_expression, Expr};
use crate::pretty::print_expression;

/// Public entry point: substitute `replacement` for `target` in `body`.
/// Wraps `real_substitute` with the trace/single-step instrumentation the
/// original prints around every substitution call.
pub fn substitute(target: Ident, replacement: &Expr, body: &Expr) -> Expr {
    if config::trace_eval() {
        println!(
            "substitute: [{} := {}] {}",
            target,
            print_expression(replacement),
            print_expression(body)
        );
    }

    let result = real_substitute(target, replacement, body);

    if config::trace_eval() {
        println!("  => {}", print_expression(&result));
    }
    if config::single_step() {
        print!("-- press enter to continue --");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
    }

    result
}

fn real_substitute(target: Ident, replacement: &Expr, body: &Expr) -> Expr {
    match body {
        Expr::Variable { name, .. } => {
            if *name == target {
                copy_expression(replacement)
            } else {
                copy_expression(body)
            }
        }
        Expr::Application { rator, rand, parameterized } => Expr::Application {
            rator: Box::new(real_substitute(target, replacement, rator)),
            rand: Box::new(real_substitute(target, replacement, rand)),
            parameterized: *parameterized,
        },
        Expr::Abstraction { bound, body: inner, parameterized } => {
            abstraction_substitution(*bound, inner, target, replacement, *parameterized)
        }
    }
}

fn abstraction_substitution(
    bound: Ident,
    inner: &Expr,
    target: Ident,
    replacement: &Expr,
    parameterized: bool,
) -> Expr {
    if bound == target {
        // The binder shadows `target`; nothing inside is free with
        // respect to it, so the abstraction is copied verbatim.
        return Expr::Abstraction {
            bound,
            body: Box::new(copy_expression(inner)),
            parameterized,
        };
    }

    let replacement_free = free_vars(replacement);
    if !replacement_free.contains(&bound) {
        // No capture risk: substitute straight through the body.
        return Expr::Abstraction {
            bound,
            body: Box::new(real_substitute(target, replacement, inner)),
            parameterized,
        };
    }

    // `bound` occurs free in `replacement`; substituting naively would let
    // it capture those occurrences. Rename the binder to a variable that
    // is free in neither the body nor the replacement, rewrite the body
    // under that name, then continue the substitution.
    let mut forbidden = replacement_free;
    for v in free_vars(inner) {
        forbidden.insert(v);
    }
    forbidden.insert(target);
    let fresh = find_nonfree_var(&forbidden);

    let renamed_body = real_substitute(bound, &Expr::variable(fresh), inner);
    Expr::Abstraction {
        bound: fresh,
        body: Box::new(real_substitute(target, replacement, &renamed_body)),
        parameterized,
    }
}

#[cfg(test)]
mod subst_tests {
    use super::*;
    use crate::atom::intern;

    #[test]
    fn substitutes_free_occurrence() {
        let x = intern("subst_tests::x");
        let y = intern("subst_tests::y");
        // [x := y] x  ==  y
        let result = substitute(x, &Expr::variable(y), &Expr::variable(x));
        assert_eq!(result, Expr::variable(y));
    }

    #[test]
    fn leaves_bound_occurrence_alone() {
        let x = intern("subst_tests::bx");
        let y = intern("subst_tests::by");
        // [x := y] (\x. x)  ==  \x. x
        let body = Expr::abstraction(x, Expr::variable(x));
        let result = substitute(x, &Expr::variable(y), &body);
        assert_eq!(result, body);
    }

    #[test]
    fn avoids_capture_by_renaming() {
        let x = intern("subst_tests::cx");
        let y = intern("subst_tests::cy");
        // [x := y] (\y. x)  must NOT become \y. y
        let body = Expr::abstraction(y, Expr::variable(x));
        let result = substitute(x, &Expr::variable(y), &body);
        match result {
            Expr::Abstraction { bound, body: inner, .. } => {
                assert_ne!(bound, y, "renamed binder must not be the captured name");
                assert_eq!(*inner, Expr::variable(y));
            }
            _ => panic!("expected an abstraction"),
        }
    }
}
