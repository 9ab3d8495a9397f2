//! Free/bound variable analysis, structural and alpha equivalence, and the
//! fresh-variable generator used by substitution and Gödelization.

use crate::atom::{intern, Ident};
use crate::expr::Expr;
use crate::varset::{VarMap, VarSet};

/// Collect every variable occurrence that is not shadowed by an enclosing
/// abstraction at that point in the tree, mirroring the original's
/// `find_free_vars`: a running map of currently-bound names is threaded
/// through the recursion, shadowing an outer binder exactly for the
/// extent of the inner abstraction's body.
pub fn free_vars(e: &Expr) -> VarSet {
    let mut bound = VarMap::new();
    let mut out = VarSet::new();
    collect_free(e, &mut bound, &mut out);
    out
}

fn collect_free(e: &Expr, bound: &mut VarMap<()>, out: &mut VarSet) {
    match e {
        Expr::Variable { name, .. } => {
            if !bound.contains(*name) {
                out.insert(*name);
            }
        }
        Expr::Abstraction { bound: b, body, .. } => {
            let prior = bound.insert(*b, ());
            collect_free(body, bound, out);
            match prior {
                Some(()) => { bound.insert(*b, ()); }
                None => { bound.remove(*b); }
            }
        }
        Expr::Application { rator, rand, .. } => {
            collect_free(rator, bound, out);
            collect_free(rand, bound, out);
        }
    }
}

/// Collect every identifier that appears as an abstraction's binder
/// anywhere in `e`, regardless of whether its body actually uses it.
pub fn bound_vars(e: &Expr) -> VarSet {
    let mut out = VarSet::new();
    collect_bound(e, &mut out);
    out
}

fn collect_bound(e: &Expr, out: &mut VarSet) {
    match e {
        Expr::Variable { .. } => {}
        Expr::Abstraction { bound, body, .. } => {
            out.insert(*bound);
            collect_bound(body, out);
        }
        Expr::Application { rator, rand, .. } => {
            collect_bound(rator, out);
            collect_bound(rand, out);
        }
    }
}

/// Exact structural equality: same shape, same identifiers at every leaf,
/// no renaming permitted. Corresponds to the original's
/// `equivalent_graphs`.
pub fn equivalent_graphs(e1: &Expr, e2: &Expr) -> bool {
    match (e1, e2) {
        (Expr::Variable { name: n1, .. }, Expr::Variable { name: n2, .. }) => n1 == n2,
        (
            Expr::Abstraction { bound: b1, body: body1, .. },
            Expr::Abstraction { bound: b2, body: body2, .. },
        ) => b1 == b2 && equivalent_graphs(body1, body2),
        (
            Expr::Application { rator: r1, rand: a1, .. },
            Expr::Application { rator: r2, rand: a2, .. },
        ) => equivalent_graphs(r1, r2) && equivalent_graphs(a1, a2),
        _ => false,
    }
}

/// Alpha equivalence via the mock-binding-token scheme: every time the two
/// trees enter a matching pair of abstractions, both binders are mapped to
/// the *same* freshly interned token (`.{spelling}_{depth}`), so that a
/// later bound-variable occurrence on either side is compared by looking
/// up its mock token rather than its literal name. Free variables are
/// never mapped, and must match literally. Mirrors the original's
/// `alpha_equivalent_graphs`/`real_alpha_equivalent_graphs`/
/// `determine_binding`.
pub fn alpha_equivalent_graphs(e1: &Expr, e2: &Expr) -> bool {
    let mut map1: VarMap<Ident> = VarMap::new();
    let mut map2: VarMap<Ident> = VarMap::new();
    let mut depth: u64 = 0;
    real_alpha_equivalent_graphs(e1, e2, &mut map1, &mut map2, &mut depth)
}

fn real_alpha_equivalent_graphs(
    e1: &Expr,
    e2: &Expr,
    map1: &mut VarMap<Ident>,
    map2: &mut VarMap<Ident>,
    depth: &mut u64,
) -> bool {
    match (e1, e2) {
        (Expr::Variable { name: n1, .. }, Expr::Variable { name: n2, .. }) => {
            determine_binding(*n1, *n2, map1, map2)
        }
        (
            Expr::Abstraction { bound: b1, body: body1, .. },
            Expr::Abstraction { bound: b2, body: body2, .. },
        ) => {
            let mock = intern(&format!(".{}_{}", b1.as_str(), depth));
            *depth += 1;
            let prior1 = map1.insert(*b1, mock);
            let prior2 = map2.insert(*b2, mock);
            let result = real_alpha_equivalent_graphs(body1, body2, map1, map2, depth);
            restore(map1, *b1, prior1);
            restore(map2, *b2, prior2);
            result
        }
        (
            Expr::Application { rator: r1, rand: a1, .. },
            Expr::Application { rator: r2, rand: a2, .. },
        ) => {
            real_alpha_equivalent_graphs(r1, r2, map1, map2, depth)
                && real_alpha_equivalent_graphs(a1, a2, map1, map2, depth)
        }
        _ => false,
    }
}

fn restore(map: &mut VarMap<Ident>, key: Ident, prior: Option<Ident>) {
    match prior {
        Some(v) => { map.insert(key, v); }
        None => { map.remove(key); }
    }
}

fn determine_binding(
    n1: Ident,
    n2: Ident,
    map1: &VarMap<Ident>,
    map2: &VarMap<Ident>,
) -> bool {
    match (map1.get(n1), map2.get(n2)) {
        (Some(m1), Some(m2)) => m1 == m2,
        (None, None) => n1 == n2,
        _ => false,
    }
}

/// Single-letter candidates `a`..`z`, `A`..`Z`, in that order - exactly the
/// original's exhaustive search.
fn single_letter_candidates() -> impl Iterator<Item = char> {
    ('a'..='z').chain('A'..='Z')
}

/// Find an identifier not present in `forbidden`.
///
/// Resolves the open question left undefined in the original (which loops
/// forever once all 52 single letters are taken): once `a`..`z`, `A`..`Z`
/// are exhausted, continue with letter+counter names `a0`, `b0`, ...,
/// `z0`, `A0`, ..., `a1`, ... This is deterministic, always terminates,
/// and can never collide with a bare single-letter identifier.
pub fn find_nonfree_var(forbidden: &VarSet) -> Ident {
    for c in single_letter_candidates() {
        let candidate = intern(&c.to_string());
        if !forbidden.contains(&candidate) {
            return candidate;
        }
    }
    let mut counter: u64 = 0;
    loop {
        for c in single_letter_candidates() {
            let candidate = intern(&format!("{}{}", c, counter));
            if !forbidden.contains(&candidate) {
                return candidate;
            }
        }
        counter += 1;
    }
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::atom::intern;

    fn parse_vars(names: &[&str]) -> VarSet {
        names.iter().map(|n| intern(n)).collect()
    }

    #[test]
    fn free_vars_excludes_bound() {
        let x = intern("analysis_tests::x");
        let y = intern("analysis_tests::y");
        // \x. x y  -- y is free, x is not
        let e = Expr::abstraction(x, Expr::application(Expr::variable(x), Expr::variable(y)));
        let fv = free_vars(&e);
        assert!(fv.contains(&y));
        assert!(!fv.contains(&x));
    }

    #[test]
    fn bound_vars_collects_all_binders() {
        let x = intern("analysis_tests::bx");
        let y = intern("analysis_tests::by");
        let e = Expr::abstraction(x, Expr::abstraction(y, Expr::variable(x)));
        let bv = bound_vars(&e);
        assert!(bv.contains(&x));
        assert!(bv.contains(&y));
    }

    #[test]
    fn equivalent_graphs_requires_exact_names() {
        let x = intern("analysis_tests::eq_x");
        let y = intern("analysis_tests::eq_y");
        let e1 = Expr::abstraction(x, Expr::variable(x));
        let e2 = Expr::abstraction(y, Expr::variable(y));
        assert!(!equivalent_graphs(&e1, &e2));
        assert!(equivalent_graphs(&e1, &e1.clone()));
    }

    #[test]
    fn alpha_equivalent_renames_bound_vars() {
        let x = intern("analysis_tests::alpha_x");
        let y = intern("analysis_tests::alpha_y");
        let e1 = Expr::abstraction(x, Expr::variable(x));
        let e2 = Expr::abstraction(y, Expr::variable(y));
        assert!(alpha_equivalent_graphs(&e1, &e2));
    }

    #[test]
    fn alpha_equivalent_distinguishes_free_vars() {
        let x = intern("analysis_tests::af_x");
        let f = intern("analysis_tests::af_f");
        let g = intern("analysis_tests::af_g");
        let e1 = Expr::abstraction(x, Expr::application(Expr::variable(f), Expr::variable(x)));
        let e2 = Expr::abstraction(x, Expr::application(Expr::variable(g), Expr::variable(x)));
        assert!(!alpha_equivalent_graphs(&e1, &e2));
    }

    #[test]
    fn alpha_equivalent_respects_shadowing() {
        // \x. \x. x  is alpha-equivalent to  \y. \z. z  (inner binder shadows)
        let x = intern("analysis_tests::sh_x");
        let y = intern("analysis_tests::sh_y");
        let z = intern("analysis_tests::sh_z");
        let e1 = Expr::abstraction(x, Expr::abstraction(x, Expr::variable(x)));
        let e2 = Expr::abstraction(y, Expr::abstraction(z, Expr::variable(z)));
        assert!(alpha_equivalent_graphs(&e1, &e2));
    }

    #[test]
    fn find_nonfree_var_avoids_forbidden_single_letters() {
        let forbidden = parse_vars(&["a", "b", "c"]);
        let found = find_nonfree_var(&forbidden);
        assert!(!forbidden.contains(&found));
    }

    #[test]
    fn find_nonfree_var_falls_back_past_52_letters() {
        let mut names: Vec<String> = Vec::new();
        for c in 'a'..='z' {
            names.push(c.to_string());
        }
        for c in 'A'..='Z' {
            names.push(c.to_string());
        }
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let forbidden = parse_vars(&refs);
        let found = find_nonfree_var(&forbidden);
        assert!(!forbidden.contains(&found));
        assert_eq!(found.as_str(), "a0");
    }
}
