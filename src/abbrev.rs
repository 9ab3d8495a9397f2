//! Abbreviation table: a name -> expression map used by the REPL's `let`
//! bindings. Lookup hands back a fresh, disjoint copy so that reducing
//! the looked-up term can never mutate or alias the stored definition;
//! insertion returns whatever was bound to that name before, matching the
//! original's `abbreviation_lookup`/`abbreviation_add`.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use hashbrown::HashMap;

use crate::atom::Ident;
use crate::errors::{LambdaError, LambdaResult};
use crate::expr::{copy_expression, Expr};

static ABBREVIATIONS: Lazy<Mutex<HashMap<Ident, Expr>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Look up `name`, returning a fresh copy of the stored expression if one
/// exists.
pub fn lookup(name: Ident) -> Option<Expr> {
    ABBREVIATIONS.lock().get(&name).map(copy_expression)
}

/// Bind `name` to `expr`, returning whatever was previously bound to
/// `name`, if anything.
pub fn insert(name: Ident, expr: Expr) -> Option<Expr> {
    ABBREVIATIONS.lock().insert(name, expr)
}

/// Look up `name`, erroring if it has never been bound. Used by callers
/// that need a *definite* abbreviation rather than silently treating an
/// unbound name as a free variable, the way `expand` does.
pub fn require(name: Ident) -> LambdaResult<Expr> {
    lookup(name).ok_or_else(|| LambdaError::UnknownAbbreviation(name.as_str()))
}

/// Replace every free occurrence of an abbreviated name in `e` with a
/// fresh copy of its definition, recursively (an abbreviation's own body
/// may itself reference other abbreviations). Bound occurrences are left
/// alone, exactly like a substitution's own shadowing rule.
pub fn expand(e: &Expr) -> Expr {
    let mut bound = crate::varset::VarMap::new();
    expand_rec(e, &mut bound)
}

fn expand_rec(e: &Expr, bound: &mut crate::varset::VarMap<()>) -> Expr {
    match e {
        Expr::Variable { name, parameterized } => {
            if !bound.contains(*name) {
                if let Some(def) = lookup(*name) {
                    return expand_rec(&def, bound);
                }
            }
            Expr::Variable { name: *name, parameterized: *parameterized }
        }
        Expr::Abstraction { bound: b, body, parameterized } => {
            let prior = bound.insert(*b, ());
            let new_body = expand_rec(body, bound);
            match prior {
                Some(()) => { bound.insert(*b, ()); }
                None => { bound.remove(*b); }
            }
            Expr::Abstraction { bound: *b, body: Box::new(new_body), parameterized: *parameterized }
        }
        Expr::Application { rator, rand, parameterized } => Expr::Application {
            rator: Box::new(expand_rec(rator, bound)),
            rand: Box::new(expand_rec(rand, bound)),
            parameterized: *parameterized,
        },
    }
}

#[cfg(test)]
mod abbrev_tests {
    use super::*;
    use crate::atom::intern;

    #[test]
    fn lookup_returns_disjoint_copy() {
        let id = intern("abbrev_tests::id");
        let x = intern("abbrev_tests::x");
        insert(id, Expr::abstraction(x, Expr::variable(x)));
        let a = lookup(id).unwrap();
        let b = lookup(id).unwrap();
        assert_eq!(a, b);
        match (&a, &b) {
            (Expr::Abstraction { body: b1, .. }, Expr::Abstraction { body: b2, .. }) => {
                assert!(!std::ptr::eq(b1.as_ref(), b2.as_ref()));
            }
            _ => panic!("expected abstractions"),
        }
    }

    #[test]
    fn insert_returns_prior_binding() {
        let name = intern("abbrev_tests::rebound");
        let x = intern("abbrev_tests::rx");
        let y = intern("abbrev_tests::ry");
        assert_eq!(insert(name, Expr::variable(x)), None);
        assert_eq!(insert(name, Expr::variable(y)), Some(Expr::variable(x)));
    }

    #[test]
    fn lookup_missing_is_none() {
        let name = intern("abbrev_tests::missing_one");
        assert_eq!(lookup(name), None);
    }

    #[test]
    fn require_returns_bound_definition() {
        let name = intern("abbrev_tests::require_bound");
        let x = intern("abbrev_tests::require_x");
        insert(name, Expr::variable(x));
        assert_eq!(require(name), Ok(Expr::variable(x)));
    }

    #[test]
    fn require_errors_on_unbound_name() {
        let name = intern("abbrev_tests::require_missing");
        assert_eq!(require(name), Err(LambdaError::UnknownAbbreviation(name.as_str())));
    }

    #[test]
    fn expand_replaces_free_reference_only() {
        let id = intern("abbrev_tests::expand_id");
        let x = intern("abbrev_tests::expand_x");
        insert(id, Expr::abstraction(x, Expr::variable(x)));

        // `id` used freely gets expanded...
        let free_use = Expr::variable(id);
        assert_eq!(expand(&free_use), Expr::abstraction(x, Expr::variable(x)));

        // ...but a binder named `id` shadows the abbreviation.
        let shadowed = Expr::abstraction(id, Expr::variable(id));
        assert_eq!(expand(&shadowed), shadowed);
    }
}
