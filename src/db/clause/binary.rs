//! Clauses of exactly two literals, where each literal watches the other.
//!
//! As there is no third literal to move a watch to, the watches of a binary clause never change.
//! When one literal becomes false the other literal is asserted, or the clause conflicts with the valuation.

use std::hash::{Hash, Hasher};

use crate::{
    config::Activity,
    db::{
        ClauseKey,
        vocabulary::{UnitPropagationListener, Vocabulary},
    },
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// A clause of two literals.
#[derive(Clone, Debug)]
pub struct BinaryClause {
    literals: [CLiteral; 2],
    activity: Activity,
}

impl BinaryClause {
    pub fn new(first: CLiteral, second: CLiteral) -> Self {
        BinaryClause {
            literals: [first, second],
            activity: 0.0,
        }
    }

    /// Registers the clause on the watch lists of the negation of each literal.
    pub fn register(&self, key: ClauseKey, voc: &mut impl Vocabulary) {
        voc.watch(self.literals[0].negate(), key);
        voc.watch(self.literals[1].negate(), key);
    }

    /// Called when `p` has become true, and so the literal `-p` has become false.
    ///
    /// The watch on `-p` is kept, and the other literal is asserted.
    pub fn propagate<S: Vocabulary + UnitPropagationListener>(
        &self,
        key: ClauseKey,
        p: CLiteral,
        solver: &mut S,
    ) -> bool {
        solver.watch(p, key);

        let [first, second] = self.literals;
        if first == p.negate() {
            solver.enqueue(second, key)
        } else {
            debug_assert_eq!(second, p.negate(), "Propagation on an unwatched literal");
            solver.enqueue(first, key)
        }
    }

    /// Pushes the negation of each literal of the clause which is false to `out`.
    pub fn calc_reason(
        &self,
        literal: Option<CLiteral>,
        voc: &impl Vocabulary,
        out: &mut Vec<CLiteral>,
    ) {
        debug_assert!(literal.map_or(true, |literal| !voc.is_falsified(literal)));

        for clause_literal in self.literals {
            if voc.is_falsified(clause_literal) {
                out.push(clause_literal.negate());
            }
        }
    }

    pub fn remove(&self, key: ClauseKey, voc: &mut impl Vocabulary) {
        voc.unwatch(self.literals[0].negate(), key);
        voc.unwatch(self.literals[1].negate(), key);
    }

    /// Whether some literal of the clause is true.
    pub fn simplify(&self, voc: &impl Vocabulary) -> bool {
        self.literals.iter().any(|literal| voc.is_satisfied(*literal))
    }

    /// Whether the clause is the reason for the value of either literal.
    pub fn locked(&self, key: ClauseKey, voc: &impl Vocabulary) -> bool {
        self.literals
            .iter()
            .any(|literal| voc.reason_of(*literal) == Some(key))
    }

    /// The index on the trail of the (most recent) assignment to the atom of the first literal, if any.
    pub fn assertion_level(&self, trail: &[CLiteral], _level: u32) -> Option<usize> {
        let atom = self.literals[0].atom();
        trail.iter().rposition(|literal| literal.atom() == atom)
    }

    /// Asserts the first literal if the second literal is false.
    pub fn assert_constraint_if_needed<S: Vocabulary + UnitPropagationListener>(
        &self,
        key: ClauseKey,
        solver: &mut S,
    ) -> bool {
        match solver.is_falsified(self.literals[1]) {
            true => solver.enqueue(self.literals[0], key),
            false => true,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }

    pub fn rescale_by(&mut self, factor: Activity) {
        self.activity *= factor;
    }
}

impl Clause for BinaryClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.literals.into_iter()
    }

    fn size(&self) -> usize {
        2
    }

    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        self.literals.get(index).copied()
    }
}

impl PartialEq for BinaryClause {
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = self.literals;
        other.literals == [a, b] || other.literals == [b, a]
    }
}

impl Eq for BinaryClause {}

impl Hash for BinaryClause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let [a, b] = self.literals;
        std::cmp::min(a, b).hash(state);
        std::cmp::max(a, b).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::atom::AtomDB;

    #[test]
    fn other_literal_forced() {
        let mut atom_db = AtomDB::default();
        let [p, q] = [1, 2].map(|_| atom_db.fresh_atom().unwrap() as CLiteral);
        let mut arena = slotmap::SlotMap::new();
        let key = ClauseKey::Original(arena.insert(()));

        let clause = BinaryClause::new(p, q);
        clause.register(key, &mut atom_db);
        assert!(atom_db.watches(-p).contains(&key));
        assert!(atom_db.watches(-q).contains(&key));

        atom_db.decide(-p);
        let watchers = std::mem::take(atom_db.watches(-p));
        assert_eq!(watchers, vec![key]);

        assert!(clause.propagate(key, -p, &mut atom_db));
        assert!(atom_db.is_satisfied(q));
        assert!(clause.locked(key, &atom_db));
        assert_eq!(*atom_db.watches(-p), vec![key]);

        atom_db.backjump(0);
        assert!(!clause.locked(key, &atom_db));
    }

    #[test]
    fn conflict() {
        let mut atom_db = AtomDB::default();
        let [p, q] = [1, 2].map(|_| atom_db.fresh_atom().unwrap() as CLiteral);
        let mut arena = slotmap::SlotMap::new();
        let key = ClauseKey::Original(arena.insert(()));

        let clause = BinaryClause::new(p, q);
        atom_db.decide(-q);
        atom_db.decide(-p);
        assert!(!clause.propagate(key, -p, &mut atom_db));

        let mut reason = Vec::default();
        clause.calc_reason(None, &atom_db, &mut reason);
        reason.sort_unstable();
        assert_eq!(reason, vec![-q, -p]);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(BinaryClause::new(1, -2), BinaryClause::new(-2, 1));
        assert_ne!(BinaryClause::new(1, -2), BinaryClause::new(1, 2));
    }
}
