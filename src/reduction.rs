//! Normal-order (leftmost-outermost) beta/eta reduction.
//!
//! The original source rewrites the tree destructively in place, using a
//! `struct lambda_expression **parent` slot pointer so a found redex can
//! be replaced at its exact location, and - for the eta case - detaches
//! the surviving subexpression from the doomed abstraction shell before
//! freeing it, to avoid a double free. This crate takes the design
//! notes' sanctioned alternative instead: `step` consumes its input
//! expression by value and returns either a rewritten tree or the same
//! tree handed back unchanged, rebuilding ancestors on the way out of the
//! recursion. The "detach before free" step the original needs simply
//! doesn't exist here - moving `rator` out of its `Box` and letting the
//! rest of the tree drop normally achieves the same effect without a
//! window where both the old and new tree could reach the same node.

use crate::analysis::free_vars;
use crate::expr::Expr;
use crate::interrupt;
use crate::subst::substitute;

/// The result of searching one subtree for a redex.
enum Step {
    /// A redex was found and rewritten; search for the next one from the
    /// top on the next outer-loop iteration.
    Reduced(Expr),
    /// No redex anywhere in this subtree.
    Stuck(Expr),
}

/// Search `e` for the leftmost-outermost redex and rewrite it if found.
/// Mirrors the original's `find_redex`'s traversal order exactly:
/// variables never contain a redex; an abstraction's own eta-redex (if
/// eta reduction is enabled) is checked before descending into its body;
/// an application whose operator is itself an abstraction *is* the redex
/// (beta); otherwise the operator is searched before the operand.
fn step(e: Expr, eta: bool) -> Step {
    match e {
        Expr::Variable { .. } => Step::Stuck(e),
        Expr::Abstraction { bound, body, parameterized } => {
            if eta {
                let is_eta_redex = match body.as_ref() {
                    Expr::Application { rator, rand, .. } => match rand.as_ref() {
                        Expr::Variable { name, .. } => {
                            *name == bound && !free_vars(rator).contains(&bound)
                        }
                        _ => false,
                    },
                    _ => false,
                };
                if is_eta_redex {
                    if let Expr::Application { rator, .. } = *body {
                        return Step::Reduced(*rator);
                    }
                }
            }
            match step(*body, eta) {
                Step::Reduced(new_body) => Step::Reduced(Expr::Abstraction {
                    bound,
                    body: Box::new(new_body),
                    parameterized,
                }),
                Step::Stuck(same_body) => Step::Stuck(Expr::Abstraction {
                    bound,
                    body: Box::new(same_body),
                    parameterized,
                }),
            }
        }
        Expr::Application { rator, rand, parameterized } => {
            if let Expr::Abstraction { bound, body, .. } = rator.as_ref() {
                let result = substitute(*bound, &rand, body);
                return Step::Reduced(result);
            }
            match step(*rator, eta) {
                Step::Reduced(new_rator) => Step::Reduced(Expr::Application {
                    rator: Box::new(new_rator),
                    rand,
                    parameterized,
                }),
                Step::Stuck(same_rator) => match step(*rand, eta) {
                    Step::Reduced(new_rand) => Step::Reduced(Expr::Application {
                        rator: Box::new(same_rator),
                        rand: Box::new(new_rand),
                        parameterized,
                    }),
                    Step::Stuck(same_rand) => Step::Stuck(Expr::Application {
                        rator: Box::new(same_rator),
                        rand: Box::new(same_rand),
                        parameterized,
                    }),
                },
            }
        }
    }
}

/// Drive `e` to normal form by repeatedly finding and rewriting the
/// leftmost-outermost redex until none remains. Checked for interruption
/// once per rewrite, never inside a single `step`/`substitute` call,
/// matching the resource model's requirement that interruption only
/// breaks between whole-redex rewrites.
pub fn normal_order_reduction(mut e: Expr, eta: bool) -> Expr {
    loop {
        if interrupt::is_interrupted() {
            return e;
        }
        match step(e, eta) {
            Step::Reduced(next) => {
                e = next;
            }
            Step::Stuck(done) => return done,
        }
    }
}
