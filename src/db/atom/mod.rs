/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- Watch lists for each atom in the form of [WatchDB] structs, indexed by atoms.
- The current (often partial) [valuation](Valuation).
- For each atom, the key of the clause which forced the value of the atom, if any.
- For each atom, the decision level on which the atom was valued.
- The [trail](Trail) of assignments.

The atom database is the concrete [vocabulary](crate::db::vocabulary) of a solve.

# The true atom

Atom `0` is created with the database and valued true at the base level, without a reason.
So, atoms read from a formula or created by a caller start at `1`.
*/

pub mod watch_db;

use watch_db::WatchDB;

use crate::{
    db::{
        LevelIndex,
        trail::Trail,
        vocabulary::{UnitPropagationListener, Vocabulary},
    },
    misc::log::targets::{self},
    structures::{
        atom::{ATOM_MAX, Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::AtomDBError,
};

use super::ClauseKey;

/// The atom database.
pub struct AtomDB {
    /// Watch lists for each atom in the form of [WatchDB] structs, indexed by atoms in the `watch_dbs` field.
    watch_dbs: Vec<WatchDB>,

    /// The current (often partial) [valuation](Valuation).
    valuation: CValuation,

    /// For each atom, the clause which forced the value of the atom, if any.
    reasons: Vec<Option<ClauseKey>>,

    /// A record of which decision an atom was valued on.
    levels: Vec<Option<LevelIndex>>,

    /// The trail of assignments.
    pub trail: Trail,
}

#[derive(Debug, PartialEq, Eq)]
/// The status of the valuation of an atom, relative to some literal.
pub enum AtomValue {
    /// The atom has no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom is not the same as the polarity of the literal.
    Different,
}

impl Default for AtomDB {
    fn default() -> Self {
        let mut db = AtomDB {
            watch_dbs: Vec::default(),
            valuation: Vec::default(),
            reasons: Vec::default(),
            levels: Vec::default(),
            trail: Trail::default(),
        };
        db.push_atom();
        db.valuation[TOP_ATOM as usize] = Some(true);
        db.levels[TOP_ATOM as usize] = Some(0);
        db
    }
}

impl AtomDB {
    /// A count of atoms in the [AtomDB], including the true atom.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// A fresh atom --- on Ok the atom is part of the language of the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                return Err(AtomDBError::AtomsExhausted);
            }
        };

        self.push_atom();
        Ok(atom)
    }

    fn push_atom(&mut self) {
        self.watch_dbs.push(WatchDB::default());
        self.valuation.push(None);
        self.reasons.push(None);
        self.levels.push(None);
    }

    /// The value of an atom, if the atom has a value.
    ///
    /// An atom outside the database has no value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// Which decision an atom was valued on, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// The key to the clause which forced the value of `atom`, if the value was forced.
    pub fn reason_for(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons.get(atom as usize).copied().flatten()
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// The status of `literal` on the current valuation.
    pub fn value_status(&self, literal: CLiteral) -> AtomValue {
        match self.value_of(literal.atom()) {
            None => AtomValue::NotSet,
            Some(value) if value == literal.polarity() => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Opens a fresh decision level and makes `literal` true on that level, without a reason.
    ///
    /// If the atom of `literal` already has a value, no level is opened and the status of the value is returned.
    ///
    /// # Panics
    /// If the atom of `literal` is not part of the database.
    pub fn decide(&mut self, literal: CLiteral) -> AtomValue {
        match self.value_status(literal) {
            AtomValue::NotSet => {
                self.trail.open_level();
                log::trace!(target: targets::VALUATION, "Decision {literal} at level {}", self.level());
                self.assign(literal, None);
                AtomValue::NotSet
            }
            status => status,
        }
    }

    /// Undoes every assignment made on a level above `level`, and resets the propagation head to the first remaining unexamined assignment.
    pub fn backjump(&mut self, level: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {level}", self.level());

        for literal in self.trail.clear_assigments_above(level) {
            self.clear_value(literal.atom());
        }
    }

    fn assign(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.reasons[atom] = reason;
        self.levels[atom] = Some(self.trail.level());
        self.trail.store_assignment(literal);
    }

    fn clear_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        let atom = atom as usize;
        self.valuation[atom] = None;
        self.reasons[atom] = None;
        self.levels[atom] = None;
    }

    /// The count of clauses watching some literal of `atom`.
    pub fn watcher_count(&self, atom: Atom) -> usize {
        match self.watch_dbs.get(atom as usize) {
            Some(watch_db) => watch_db.watcher_count(),
            None => 0,
        }
    }
}

impl Vocabulary for AtomDB {
    fn is_falsified(&self, literal: CLiteral) -> bool {
        self.value_status(literal) == AtomValue::Different
    }

    fn is_satisfied(&self, literal: CLiteral) -> bool {
        self.value_status(literal) == AtomValue::Same
    }

    fn is_unassigned(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()).is_none()
    }

    /// # Panics
    /// If the atom of `literal` is not part of the database.
    fn watches(&mut self, literal: CLiteral) -> &mut Vec<ClauseKey> {
        let watch_db = &mut self.watch_dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &mut watch_db.positive,
            false => &mut watch_db.negative,
        }
    }

    fn reason_of(&self, literal: CLiteral) -> Option<ClauseKey> {
        self.reason_for(literal.atom())
    }
}

impl UnitPropagationListener for AtomDB {
    fn enqueue(&mut self, literal: CLiteral, reason: ClauseKey) -> bool {
        match self.value_status(literal) {
            AtomValue::Same => true,
            AtomValue::Different => false,
            AtomValue::NotSet => {
                log::trace!(target: targets::PROPAGATION, "{literal} forced by {reason}");
                self.assign(literal, Some(reason));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_true_atom() {
        let atom_db = AtomDB::default();
        assert_eq!(atom_db.count(), 1);
        assert_eq!(atom_db.value_of(TOP_ATOM), Some(true));
        assert_eq!(atom_db.level(), 0);
    }

    #[test]
    fn decide_and_backjump() {
        let mut atom_db = AtomDB::default();
        let p = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
        let q = CLiteral::new(atom_db.fresh_atom().unwrap(), false);

        assert_eq!(atom_db.decide(p), AtomValue::NotSet);
        assert_eq!(atom_db.level(), 1);
        assert_eq!(atom_db.decide(p), AtomValue::Same);
        assert_eq!(atom_db.decide(-p), AtomValue::Different);
        assert_eq!(atom_db.level(), 1);

        assert_eq!(atom_db.decide(q), AtomValue::NotSet);
        assert_eq!(atom_db.level_of(q.atom()), Some(2));
        assert!(atom_db.is_satisfied(q));
        assert!(atom_db.is_falsified(-q));

        atom_db.backjump(1);
        assert!(atom_db.is_unassigned(q));
        assert!(atom_db.is_satisfied(p));
        assert_eq!(atom_db.trail.literals, vec![p]);

        atom_db.backjump(0);
        assert!(atom_db.is_unassigned(p));
        assert!(atom_db.trail.literals.is_empty());
        assert_eq!(atom_db.trail.q_head, 0);
    }

    #[test]
    fn value_to_string() {
        let mut atom_db = AtomDB::default();
        let p = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
        let q = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
        atom_db.decide(p);

        assert_eq!(atom_db.value_to_string(p), "T");
        assert_eq!(atom_db.value_to_string(-p), "F");
        assert_eq!(atom_db.value_to_string(q), "?");
    }

    #[test]
    fn unwatch_removes_one_registration() {
        let mut atom_db = AtomDB::default();
        let p = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
        let mut arena = slotmap::SlotMap::new();
        let key = ClauseKey::Original(arena.insert(()));

        atom_db.watch(p, key);
        atom_db.watch(p, key);
        assert_eq!(atom_db.watches(p).len(), 2);
        assert!(atom_db.watches(-p).is_empty());

        atom_db.unwatch(p, key);
        assert_eq!(atom_db.watches(p).len(), 1);
        assert_eq!(atom_db.watcher_count(p.atom()), 1);
    }
}
