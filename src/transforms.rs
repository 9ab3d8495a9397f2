//! The two extra transforms: `deparameterize`, which expands the `*`
//! parameter-repetition sugar, and `goedelize`, Mogensen's
//! self-interpretation encoding.

use crate::analysis::{find_nonfree_var, free_vars};
use crate::atom::Ident;
use crate::expr::Expr;

/// Build `count - 1` nested self-applications of `base` (i.e. `base`,
/// then `base base`, then `(base base) base`, ...), matching the
/// original's `while (--count) r = new_application(r, copy_expression(...))`.
/// A `count` of 0 or 1 performs no extra applications at all - this is
/// the original's own behavior (`--count` decrements before testing, so
/// `count == 1` tests `0` and the loop body never runs), kept
/// intentionally rather than "fixed", and additionally made safe for
/// `count == 0` (the original's signed decrement-then-test would loop
/// here; this version simply treats it the same as `count == 1`).
fn replicate(base: Expr, count: usize) -> Expr {
    let mut r = base.clone();
    for _ in 1..count {
        r = Expr::application(r, base.clone());
    }
    r
}

/// Expand `*` parameter sugar out of `node`. Two independent forms exist:
/// a whole node marked `parameterized` repeats itself (via [`replicate`]);
/// an application whose *operator* is parameterized instead builds a
/// right-nested nest of that operator around the (deparameterized)
/// operand - `f* x` becomes `f (f (... (f x)))` - matching the original's
/// "construct rator (rator (rator (...(rator rand)...)" comment.
pub fn deparameterize(node: Expr, count: usize) -> Expr {
    match node {
        Expr::Variable { name, parameterized } => {
            let base = Expr::Variable { name, parameterized: false };
            if parameterized {
                replicate(base, count)
            } else {
                base
            }
        }
        Expr::Abstraction { bound, body, parameterized } => {
            let body = deparameterize(*body, count);
            let base = Expr::Abstraction { bound, body: Box::new(body), parameterized: false };
            if parameterized {
                replicate(base, count)
            } else {
                base
            }
        }
        Expr::Application { rator, rand, parameterized } => {
            if parameterized {
                let base = Expr::Application {
                    rator: Box::new(deparameterize(*rator, count)),
                    rand: Box::new(deparameterize(*rand, count)),
                    parameterized: false,
                };
                return replicate(base, count);
            }
            if rator.is_parameterized() {
                let mut cleared_rator = (*rator).clone();
                cleared_rator.set_parameterized(false);
                let mut tree = deparameterize(*rand, count);
                for _ in 1..count {
                    tree = Expr::application(cleared_rator.clone(), tree);
                }
                tree
            } else {
                Expr::Application {
                    rator: Box::new(deparameterize(*rator, count)),
                    rand: Box::new(deparameterize(*rand, count)),
                    parameterized: false,
                }
            }
        }
    }
}

/// Mogensen's self-interpretation encoding ("Efficient Self Interpretation
/// in Lambda Calculus"). Each case picks three fresh identifiers `a`, `b`,
/// `c` avoiding every free variable of `e` (and, for the abstraction case,
/// `e`'s own bound variable), matching the original's `goedelize` exactly,
/// including which of `a`/`b`/`c` get folded back into the forbidden set
/// before the next is picked.
pub fn goedelize(e: &Expr) -> Expr {
    let mut forbidden = free_vars(e);
    match e {
        Expr::Variable { name, .. } => {
            let a = next(&mut forbidden);
            let b = next(&mut forbidden);
            let c = find_nonfree_var(&forbidden);
            Expr::abstraction(
                a,
                Expr::abstraction(
                    b,
                    Expr::abstraction(c, Expr::application(Expr::variable(a), Expr::variable(*name))),
                ),
            )
        }
        Expr::Application { rator, rand, .. } => {
            let a = next(&mut forbidden);
            let b = next(&mut forbidden);
            let c = find_nonfree_var(&forbidden);
            Expr::abstraction(
                a,
                Expr::abstraction(
                    b,
                    Expr::abstraction(
                        c,
                        Expr::application(
                            Expr::application(Expr::variable(b), goedelize(rator)),
                            goedelize(rand),
                        ),
                    ),
                ),
            )
        }
        Expr::Abstraction { bound, body, .. } => {
            forbidden.insert(*bound);
            let a = next(&mut forbidden);
            let b = next(&mut forbidden);
            let c = find_nonfree_var(&forbidden);
            Expr::abstraction(
                a,
                Expr::abstraction(
                    b,
                    Expr::abstraction(
                        c,
                        Expr::application(
                            Expr::variable(c),
                            Expr::abstraction(*bound, goedelize(body)),
                        ),
                    ),
                ),
            )
        }
    }
}

fn next(forbidden: &mut crate::varset::VarSet) -> Ident {
    let v = find_nonfree_var(forbidden);
    forbidden.insert(v);
    v
}

#[cfg(test)]
mod transforms_tests {
    use super::*;
    use crate::atom::intern;

    #[test]
    fn deparameterize_count_one_is_identity_copy() {
        let x = intern("transforms_tests::dp1_x");
        let e = Expr::parameterized_variable(x);
        let result = deparameterize(e, 1);
        assert_eq!(result, Expr::variable(x));
    }

    #[test]
    fn deparameterize_count_zero_is_also_identity() {
        let x = intern("transforms_tests::dp0_x");
        let e = Expr::parameterized_variable(x);
        let result = deparameterize(e, 0);
        assert_eq!(result, Expr::variable(x));
    }

    #[test]
    fn deparameterize_replicates_variable_self_application() {
        let x = intern("transforms_tests::dp3_x");
        let e = Expr::parameterized_variable(x);
        let result = deparameterize(e, 3);
        // x x x, left-associated: (x x) x
        let expected = Expr::application(
            Expr::application(Expr::variable(x), Expr::variable(x)),
            Expr::variable(x),
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn deparameterize_clears_flag_on_plain_nodes() {
        let x = intern("transforms_tests::dp_plain");
        let e = Expr::variable(x);
        let result = deparameterize(e, 1);
        assert!(!result.is_parameterized());
    }

    #[test]
    fn goedelize_variable_has_expected_shape() {
        let x = intern("transforms_tests::goe_x");
        let e = Expr::variable(x);
        let result = goedelize(&e);
        // \a.\b.\c. a x
        match result {
            Expr::Abstraction { body: b1, .. } => match *b1 {
                Expr::Abstraction { body: b2, .. } => match *b2 {
                    Expr::Abstraction { body: b3, .. } => match *b3 {
                        Expr::Application { rand, .. } => {
                            assert_eq!(*rand, Expr::variable(x));
                        }
                        _ => panic!("expected application"),
                    },
                    _ => panic!("expected third abstraction"),
                },
                _ => panic!("expected second abstraction"),
            },
            _ => panic!("expected first abstraction"),
        }
    }
}
