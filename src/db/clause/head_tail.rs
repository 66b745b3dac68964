/*!
Clauses of three or more literals, which watch a *head* and a *tail*.

A head-tail clause keeps two literals apart from the rest:
- The head, which is watched.
- The tail, which is watched.
- The middle, a buffer of every other literal, in no particular order.

So, positionally the clause is `head, middle…, tail`.

# Propagation

When some watched literal becomes false, the clause looks for a replacement in the middle.
If some literal of the middle is not false, that literal swaps places with the watched literal, and the clause watches the new literal.
Otherwise, the clause keeps its watch and the *other* watched literal is asserted (or, if that literal is false, the clause conflicts with the valuation).

The middle is scanned from the front when replacing the head, and from the back when replacing the tail.

```rust
# use ht_sat::config::Config;
# use ht_sat::context::Context;
# use ht_sat::db::clause::head_tail::HTClause;
# use ht_sat::structures::clause::Clause;
let mut ctx = Context::from_config(Config::default());
let [p, q, r, s] = *ctx.fresh_literals(4).as_slice() else {
    panic!("Insufficient literals");
};

let clause = HTClause::new(vec![p, q, r, s]);
assert_eq!(clause.head(), p);
assert_eq!(clause.tail(), s);
assert_eq!(clause.size(), 4);
assert_eq!(clause.as_dimacs(true), format!("{p} {q} {r} {s} 0"));
```

# Positions

As the literals in the head, middle, and tail change during propagation, the index of a literal is only meaningful until the next call to [propagate](HTClause::propagate).
The *set* of literals in the clause never changes.

# Equality

Two head-tail clauses are equal when the heads are equal, the tails are equal, and the middles contain the same literals (with the same multiplicity).
Hashing is consistent with this, by hashing a sorted copy of the middle.
Activity plays no part in either.
*/

use std::hash::{Hash, Hasher};

use crate::{
    config::Activity,
    db::{
        ClauseKey,
        vocabulary::{UnitPropagationListener, Vocabulary},
    },
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// A clause of three or more literals, watching a head and a tail.
#[derive(Clone, Debug)]
pub struct HTClause {
    head: CLiteral,
    middle: Box<[CLiteral]>,
    tail: CLiteral,
    activity: Activity,
}

impl HTClause {
    /// A clause from a list of literals, with the first literal as the head and the last as the tail.
    ///
    /// The storage of the list is kept by the clause.
    ///
    /// # Panics
    /// If the list contains fewer than three literals.
    pub fn new(mut literals: Vec<CLiteral>) -> Self {
        assert!(
            literals.len() >= 3,
            "A head-tail clause requires at least three literals, found {}",
            literals.len()
        );

        let Some(tail) = literals.pop() else {
            unreachable!("Length checked");
        };
        let head = literals.remove(0);

        HTClause {
            head,
            middle: literals.into_boxed_slice(),
            tail,
            activity: 0.0,
        }
    }

    /// A clause from the contents of a (reusable) buffer, leaving the buffer empty.
    ///
    /// # Panics
    /// If the buffer contains fewer than three literals.
    pub fn from_buffer(buffer: &mut Vec<CLiteral>) -> Self {
        HTClause::new(std::mem::take(buffer))
    }

    /// The head literal.
    pub fn head(&self) -> CLiteral {
        self.head
    }

    /// The tail literal.
    pub fn tail(&self) -> CLiteral {
        self.tail
    }

    /// The literals between the head and the tail.
    pub fn middle(&self) -> &[CLiteral] {
        &self.middle
    }

    /// Registers the clause on the watch lists of the negation of the head and the negation of the tail.
    pub fn register(&self, key: ClauseKey, voc: &mut impl Vocabulary) {
        voc.watch(self.head.negate(), key);
        voc.watch(self.tail.negate(), key);
    }

    /// Called when `p` has become true, and so the watched literal `-p` has become false.
    ///
    /// The caller has taken the clause off the watch list keyed by `p`.
    /// So, the clause either watches some replacement literal, or registers itself on the watch list of `p` again.
    ///
    /// Returns `false` on a conflict, and `true` otherwise.
    pub fn propagate<S: Vocabulary + UnitPropagationListener>(
        &mut self,
        key: ClauseKey,
        p: CLiteral,
        solver: &mut S,
    ) -> bool {
        let false_literal = p.negate();

        if self.head == false_literal {
            match self
                .middle
                .iter()
                .position(|literal| !solver.is_falsified(*literal))
            {
                Some(index) => {
                    self.head = self.middle[index];
                    self.middle[index] = false_literal;
                    log::trace!(target: targets::WATCHES, "{key} head to {}", self.head);
                    solver.watch(self.head.negate(), key);
                    true
                }

                None => {
                    solver.watch(p, key);
                    solver.enqueue(self.tail, key)
                }
            }
        } else {
            debug_assert_eq!(self.tail, false_literal, "Propagation on an unwatched literal");

            match self
                .middle
                .iter()
                .rposition(|literal| !solver.is_falsified(*literal))
            {
                Some(index) => {
                    self.tail = self.middle[index];
                    self.middle[index] = false_literal;
                    log::trace!(target: targets::WATCHES, "{key} tail to {}", self.tail);
                    solver.watch(self.tail.negate(), key);
                    true
                }

                None => {
                    solver.watch(p, key);
                    solver.enqueue(self.head, key)
                }
            }
        }
    }

    /// Pushes the negation of each literal of the clause which is false to `out`.
    ///
    /// `literal` is the literal the clause is the reason for, or `None` if the reason for a conflict is requested.
    pub fn calc_reason(
        &self,
        literal: Option<CLiteral>,
        voc: &impl Vocabulary,
        out: &mut Vec<CLiteral>,
    ) {
        debug_assert!(literal.map_or(true, |literal| !voc.is_falsified(literal)));

        for clause_literal in self.literals() {
            if voc.is_falsified(clause_literal) {
                out.push(clause_literal.negate());
            }
        }
    }

    /// Removes the clause from the watch lists of the negations of the current head and tail.
    pub fn remove(&self, key: ClauseKey, voc: &mut impl Vocabulary) {
        voc.unwatch(self.head.negate(), key);
        voc.unwatch(self.tail.negate(), key);
    }

    /// Whether the clause is satisfied, and so may be dropped from consideration.
    pub fn simplify(&self, voc: &impl Vocabulary) -> bool {
        self.is_satisfied(voc)
    }

    /// Whether some literal of the clause is true.
    pub fn is_satisfied(&self, voc: &impl Vocabulary) -> bool {
        self.literals().any(|literal| voc.is_satisfied(literal))
    }

    /// Whether the clause is the reason for the value of the head or the tail.
    pub fn locked(&self, key: ClauseKey, voc: &impl Vocabulary) -> bool {
        voc.reason_of(self.head) == Some(key) || voc.reason_of(self.tail) == Some(key)
    }

    /// The activity of the clause.
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Sets the activity of the clause.
    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }

    /// Multiplies the activity of the clause by `factor`.
    pub fn rescale_by(&mut self, factor: Activity) {
        self.activity *= factor;
    }

    /// The index on the trail of the (most recent) assignment to the atom of the head, if any.
    ///
    /// The trail is ordered oldest first.
    pub fn assertion_level(&self, trail: &[CLiteral], _level: u32) -> Option<usize> {
        let head_atom = self.head.atom();
        trail
            .iter()
            .rposition(|literal| literal.atom() == head_atom)
    }

    /// Asserts the head, with the clause as the reason.
    ///
    /// Used when the clause is added immediately after a backjump, with the tail and middle false.
    ///
    /// # Panics
    /// If the head has some value.
    pub fn assert_constraint<S: Vocabulary + UnitPropagationListener>(
        &self,
        key: ClauseKey,
        solver: &mut S,
    ) -> bool {
        assert!(
            solver.is_unassigned(self.head),
            "The head of an asserted clause must be unassigned"
        );
        solver.enqueue(self.head, key)
    }

    /// Asserts the head if the tail is false.
    ///
    /// Returns `false` on a conflict, and `true` otherwise.
    pub fn assert_constraint_if_needed<S: Vocabulary + UnitPropagationListener>(
        &self,
        key: ClauseKey,
        solver: &mut S,
    ) -> bool {
        match solver.is_falsified(self.tail) {
            true => solver.enqueue(self.head, key),
            false => true,
        }
    }

    fn sorted_middle(&self) -> Vec<CLiteral> {
        let mut middle = self.middle.to_vec();
        middle.sort_unstable();
        middle
    }
}

impl Clause for HTClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(self.head)
            .chain(self.middle.iter().copied())
            .chain(std::iter::once(self.tail))
    }

    fn size(&self) -> usize {
        self.middle.len() + 2
    }

    /// The literal at `index`, where the head is at `0` and the tail at `size() - 1`.
    ///
    /// Valid only until the clause is next propagated.
    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        match index {
            0 => Some(self.head),
            i if i <= self.middle.len() => Some(self.middle[i - 1]),
            i if i == self.middle.len() + 1 => Some(self.tail),
            _ => None,
        }
    }
}

impl PartialEq for HTClause {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
            && self.tail == other.tail
            && self.middle.len() == other.middle.len()
            && self.sorted_middle() == other.sorted_middle()
    }
}

impl Eq for HTClause {}

impl Hash for HTClause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
        self.sorted_middle().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::db::atom::AtomDB;

    fn hash_of(clause: &HTClause) -> u64 {
        let mut hasher = DefaultHasher::new();
        clause.hash(&mut hasher);
        hasher.finish()
    }

    fn db_with_atoms(count: usize) -> (AtomDB, ClauseKey) {
        let mut atom_db = AtomDB::default();
        for _ in 0..count {
            atom_db.fresh_atom().unwrap();
        }
        let mut arena = slotmap::SlotMap::new();
        let key = ClauseKey::Original(arena.insert(()));
        (atom_db, key)
    }

    #[test]
    #[should_panic]
    fn two_literals_is_too_short() {
        let _ = HTClause::new(vec![1, 2]);
    }

    #[test]
    fn construction() {
        let mut buffer = vec![1, -2, 3, -4];
        let clause = HTClause::from_buffer(&mut buffer);

        assert!(buffer.is_empty());
        assert_eq!(clause.head(), 1);
        assert_eq!(clause.middle(), &[-2, 3]);
        assert_eq!(clause.tail(), -4);
        assert_eq!(clause.size(), 4);
        assert_eq!(clause.literal_at(0), Some(1));
        assert_eq!(clause.literal_at(2), Some(3));
        assert_eq!(clause.literal_at(3), Some(-4));
        assert_eq!(clause.literal_at(4), None);
        assert_eq!(clause.as_dimacs(true), "1 -2 3 -4 0");
    }

    #[test]
    fn head_moves_to_middle_literal() {
        let (mut atom_db, key) = db_with_atoms(5);
        let mut clause = HTClause::new(vec![1, 2, 3, 4, 5]);
        clause.register(key, &mut atom_db);

        atom_db.decide(-2);
        atom_db.decide(-3);
        atom_db.decide(-1);
        atom_db.watches(-1).clear();
        let trail_length = atom_db.trail.literals.len();

        assert!(clause.propagate(key, -1, &mut atom_db));
        assert_eq!(clause.head(), 4);
        assert_eq!(clause.tail(), 5);
        assert_eq!(atom_db.trail.literals.len(), trail_length);
        assert!(atom_db.watches(-4).contains(&key));
        assert!(!atom_db.watches(-1).contains(&key));
        assert!(!clause.locked(key, &atom_db));
    }

    #[test]
    fn head_false_forces_unassigned_tail() {
        let (mut atom_db, key) = db_with_atoms(4);
        let mut clause = HTClause::new(vec![1, 2, 3, 4]);

        atom_db.decide(-2);
        atom_db.decide(-3);
        atom_db.decide(-1);

        assert!(clause.propagate(key, -1, &mut atom_db));
        assert!(atom_db.is_satisfied(4));
        assert_eq!(atom_db.reason_of(4), Some(key));
        assert!(atom_db.watches(-1).contains(&key));
        assert!(clause.locked(key, &atom_db));
    }

    #[test]
    fn head_false_with_false_tail_conflicts() {
        let (mut atom_db, key) = db_with_atoms(4);
        let mut clause = HTClause::new(vec![1, 2, 3, 4]);

        atom_db.decide(-2);
        atom_db.decide(-3);
        atom_db.decide(-4);
        atom_db.decide(-1);

        assert!(!clause.propagate(key, -1, &mut atom_db));
        assert!(atom_db.watches(-1).contains(&key));

        let mut reason = Vec::default();
        clause.calc_reason(None, &atom_db, &mut reason);
        reason.sort_unstable();
        assert_eq!(reason, vec![-4, -3, -2, -1]);
    }

    #[test]
    fn tail_moves_to_last_middle_literal() {
        let (mut atom_db, key) = db_with_atoms(5);
        let mut clause = HTClause::new(vec![1, 2, 3, 4, 5]);

        atom_db.decide(-5);
        assert!(clause.propagate(key, -5, &mut atom_db));
        assert_eq!(clause.tail(), 4);
        assert_eq!(clause.middle(), &[2, 3, 5]);
        assert_eq!(clause.size(), 5);
    }

    #[test]
    fn tail_false_forces_head() {
        let (mut atom_db, key) = db_with_atoms(3);
        let mut clause = HTClause::new(vec![1, 2, 3]);

        atom_db.decide(-2);
        atom_db.decide(-3);
        assert!(clause.propagate(key, -3, &mut atom_db));
        assert!(atom_db.is_satisfied(1));

        let mut reason = Vec::default();
        clause.calc_reason(Some(1), &atom_db, &mut reason);
        reason.sort_unstable();
        assert_eq!(reason, vec![-3, -2]);
    }

    #[test]
    fn remove_unwatches_current_head_and_tail() {
        let (mut atom_db, key) = db_with_atoms(4);
        let mut clause = HTClause::new(vec![1, 2, 3, 4]);
        clause.register(key, &mut atom_db);

        atom_db.decide(-1);
        atom_db.watches(-1).clear();
        assert!(clause.propagate(key, -1, &mut atom_db));
        assert_eq!(clause.head(), 2);

        clause.remove(key, &mut atom_db);
        for literal in [1, 2, 3, 4] {
            assert!(atom_db.watches(literal).is_empty());
            assert!(atom_db.watches(-literal).is_empty());
        }
    }

    #[test]
    fn equality_ignores_middle_order() {
        let mut clause = HTClause::new(vec![1, 2, 3, 4, 5]);
        let permuted = HTClause::new(vec![1, 4, 2, 3, 5]);
        let other_head = HTClause::new(vec![2, 1, 3, 4, 5]);
        let other_middle = HTClause::new(vec![1, 2, 2, 4, 5]);

        clause.set_activity(3.0);

        assert_eq!(clause, clause.clone());
        assert_eq!(clause, permuted);
        assert_eq!(permuted, clause);
        assert_eq!(hash_of(&clause), hash_of(&permuted));

        assert_ne!(clause, other_head);
        assert_ne!(clause, other_middle);
        assert_ne!(other_middle, clause);
    }

    #[test]
    fn assertion_level_is_newest_trail_index() {
        let clause = HTClause::new(vec![2, 3, 4]);
        let trail = vec![1, -2, 5, 6];
        assert_eq!(clause.assertion_level(&trail, 0), Some(1));
        assert_eq!(clause.assertion_level(&[1, 5], 0), None);
    }

    #[test]
    #[should_panic]
    fn assert_constraint_on_assigned_head() {
        let (mut atom_db, key) = db_with_atoms(3);
        let clause = HTClause::new(vec![1, 2, 3]);
        atom_db.decide(1);
        clause.assert_constraint(key, &mut atom_db);
    }

    #[test]
    fn assert_constraint_if_needed() {
        let (mut atom_db, key) = db_with_atoms(3);
        let clause = HTClause::new(vec![1, 2, 3]);

        assert!(clause.assert_constraint_if_needed(key, &mut atom_db));
        assert!(atom_db.is_unassigned(1));

        atom_db.decide(-2);
        atom_db.decide(-3);
        assert!(clause.assert_constraint_if_needed(key, &mut atom_db));
        assert!(atom_db.is_satisfied(1));
        assert!(clause.is_satisfied(&atom_db));
        assert!(clause.simplify(&atom_db));
    }

    #[test]
    fn value_annotations() {
        let (mut atom_db, _) = db_with_atoms(3);
        let clause = HTClause::new(vec![1, -2, 3]);
        atom_db.decide(2);
        atom_db.decide(3);

        let names: std::collections::HashMap<crate::structures::atom::Atom, String> =
            [(1, "a".to_string()), (2, "b".to_string())].into_iter().collect();
        assert_eq!(
            clause.as_string_with(&atom_db, &names),
            "a[?] -b[F] 3[T]"
        );
        assert_eq!(clause.as_external(&names), "a -b 3 0");
    }

    #[test]
    fn activity() {
        let mut clause = HTClause::new(vec![1, 2, 3]);
        clause.set_activity(8.0);
        clause.rescale_by(0.25);
        assert_eq!(clause.activity(), 2.0);
    }
}
