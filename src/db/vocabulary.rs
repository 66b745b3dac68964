/*!
What a clause may ask of a solve.

A clause does not own, or hold a reference to, the valuation of a solve.
Instead, each operation on a clause which needs to know the value of a literal, or needs to watch a literal, is given access to some structure implementing the traits of this module.

- [Vocabulary] gives the values of literals, the reasons for assignments, and watch lists.
- [UnitPropagationListener] accepts literals forced by a clause.
- [AtomMapper] gives the external name of an atom, for writing clauses.

The [atom database](crate::db::atom::AtomDB) implements [Vocabulary] and [UnitPropagationListener].

# Watch lists

The watch list *keyed by* a literal `l` holds the (keys of) clauses to notify when `l` becomes true.
So, a clause which watches some literal `h` registers under `-h`, as it is when `-h` becomes true that `h` becomes false.

```rust
# use ht_sat::config::Config;
# use ht_sat::context::Context;
# use ht_sat::db::vocabulary::Vocabulary;
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
    panic!("Insufficient literals");
};
let key = ctx.clause_db.store(vec![p, q, r], ht_sat::structures::clause::ClauseSource::Original, &mut ctx.atom_db).unwrap();

assert!(ctx.atom_db.watches(-p).contains(&key));
assert!(ctx.atom_db.watches(-r).contains(&key));
assert!(!ctx.atom_db.watches(-q).contains(&key));
```
*/

use std::collections::HashMap;

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The values, reasons, and watch lists of literals.
pub trait Vocabulary {
    /// Whether the literal is false on the current valuation.
    fn is_falsified(&self, literal: CLiteral) -> bool;

    /// Whether the literal is true on the current valuation.
    fn is_satisfied(&self, literal: CLiteral) -> bool;

    /// Whether the atom of the literal has no value on the current valuation.
    fn is_unassigned(&self, literal: CLiteral) -> bool;

    /// The watch list keyed by `literal`, i.e. the clauses to notify when `literal` becomes true.
    fn watches(&mut self, literal: CLiteral) -> &mut Vec<ClauseKey>;

    /// Registers `key` on the watch list keyed by `literal`.
    fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.watches(literal).push(key);
    }

    /// Removes one registration of `key` from the watch list keyed by `literal`, if some registration exists.
    fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) {
        let list = self.watches(literal);
        if let Some(index) = list.iter().position(|watcher| *watcher == key) {
            list.swap_remove(index);
        }
    }

    /// The key of the clause which forced the current value of the atom of `literal`, if any.
    fn reason_of(&self, literal: CLiteral) -> Option<ClauseKey>;

    /// A short representation of the value of the literal: `T`, `F`, or `?`.
    fn value_to_string(&self, literal: CLiteral) -> &'static str {
        if self.is_satisfied(literal) {
            "T"
        } else if self.is_falsified(literal) {
            "F"
        } else {
            "?"
        }
    }
}

/// Accepts literals forced by a clause.
pub trait UnitPropagationListener {
    /// Asserts `literal`, with `reason` as the clause which forced the literal.
    ///
    /// Returns:
    /// - `true` if the literal was already true, in which case the existing reason is unchanged.
    /// - `false` if the literal is false, i.e. a conflict.
    /// - `true` otherwise, after the literal has been assigned and placed on the trail.
    fn enqueue(&mut self, literal: CLiteral, reason: ClauseKey) -> bool;
}

/// Maps internal atoms to external names.
pub trait AtomMapper {
    /// The external name of `atom`.
    fn external_name(&self, atom: Atom) -> String;
}

/// The name of each atom is the atom.
pub struct IdentityMapper;

impl AtomMapper for IdentityMapper {
    fn external_name(&self, atom: Atom) -> String {
        atom.to_string()
    }
}

impl<S: std::hash::BuildHasher> AtomMapper for HashMap<Atom, String, S> {
    fn external_name(&self, atom: Atom) -> String {
        match self.get(&atom) {
            Some(name) => name.clone(),
            None => atom.to_string(),
        }
    }
}

/// The external form of `literal`, prefixed with `-` when the polarity of the literal is negative.
pub fn external_literal(literal: CLiteral, mapper: &impl AtomMapper) -> String {
    match literal.polarity() {
        true => mapper.external_name(literal.atom()),
        false => format!("-{}", mapper.external_name(literal.atom())),
    }
}
