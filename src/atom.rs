//! Process-wide atom table. Every identifier that enters the core -
//! parsed variable names, freshly generated names, Gödel-encoding names -
//! passes through here and comes back as an `Ident`, a small `Copy` handle
//! whose equality is the underlying interner slot's identity (not the
//! spelled-out string). This is what lets the rest of the crate compare
//! identifiers with `==` and mean "the very same atom", matching the
//! original's pointer-identity atom table.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use lasso::{Rodeo, Spur};

static TABLE: Lazy<Mutex<Rodeo>> = Lazy::new(|| Mutex::new(Rodeo::default()));

/// A handle into the atom table. `Copy`, `Eq`, `Hash`; two `Ident`s are
/// equal iff they were interned from equal strings, and comparing them
/// never touches the strings themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(Spur);

impl Ident {
    pub fn as_str(self) -> String {
        TABLE.lock().resolve(&self.0).to_owned()
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intern `s`, returning a stable handle. The table only ever grows; atoms
/// are never removed, matching the original's lifetime-of-the-process
/// atom table.
pub fn intern(s: &str) -> Ident {
    Ident(TABLE.lock().get_or_intern(s))
}

#[cfg(test)]
mod atom_tests {
    use super::*;

    #[test]
    fn same_spelling_same_identity() {
        let a = intern("x");
        let b = intern("x");
        assert_eq!(a, b);
    }

    #[test]
    fn different_spelling_different_identity() {
        let a = intern("x");
        let b = intern("y");
        assert_ne!(a, b);
    }

    #[test]
    fn roundtrips_through_string() {
        let a = intern("foobar");
        assert_eq!(a.as_str(), "foobar");
    }
}
