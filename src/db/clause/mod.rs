/*!
A database of clause related things.

Clauses are stored in one of two arenas, distinguished by [source](crate::structures::clause::ClauseSource):
- Original clauses, e.g. read from a formula.
- Addition clauses, e.g. learnt during analysis.

Access to a stored clause is through the [key](ClauseKey) returned when the clause was stored.
As the arenas are generational, the key of a removed clause does not give access to any clause stored later.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
In particular, a clause is registered on watch lists when stored, and unregistered when removed.

# Initial watches

When a clause is stored, literals may be reordered so the clause watches literals which are not false, if possible.
Otherwise, false literals from the highest levels are watched.
So, if one literal is not false it is the head and the tail is false from the highest level among the remaining literals, and if every literal is false the head and tail are from the two highest levels.
After a backjump which unassigns any literal of the clause, one of the watched literals is unassigned, and if the other remains false then [assert_constraint_if_needed](db_clause::dbClause::assert_constraint_if_needed) asserts the clause.

If exactly one literal is not false, that literal is asserted when the clause is stored.
*/

pub mod binary;
pub mod db_clause;
pub mod head_tail;
pub mod unit;

use slotmap::{DefaultKey, SlotMap};

use crate::{
    config::{Activity, Config, dbs::ClauseDBConfig},
    db::{ClauseKey, atom::AtomDB, vocabulary::Vocabulary},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseKind, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::ClauseDBError,
};

use binary::BinaryClause;
use db_clause::{ClauseBody, dbClause};
use head_tail::HTClause;
use unit::UnitClause;

/// A database of clause related things.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    pub config: ClauseDBConfig,

    /// Original clauses.
    original: SlotMap<DefaultKey, dbClause>,

    /// Addition clauses.
    addition: SlotMap<DefaultKey, dbClause>,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),
            original: SlotMap::default(),
            addition: SlotMap::default(),
        }
    }

    /// Stores a clause, registers the clause on watch lists, and asserts a literal of the clause if the clause is asserting on the current valuation.
    ///
    /// Errors:
    /// - [EmptyClause](ClauseDBError::EmptyClause) if the clause has no literals, in which case nothing is stored.
    /// - [DecisionMade](ClauseDBError::DecisionMade) if the clause is a unit clause and some decision has been made, in which case nothing is stored.
    /// - [UnsatisfiableUnit](ClauseDBError::UnsatisfiableUnit) if the clause is a unit clause whose literal is false, after the clause is stored.
    /// - [Unsatisfiable](ClauseDBError::Unsatisfiable) if every literal of the clause is false, after the clause is stored.
    pub fn store(
        &mut self,
        mut clause: CClause,
        source: ClauseSource,
        atom_db: &mut AtomDB,
    ) -> Result<ClauseKey, ClauseDBError> {
        let body = match ClauseKind::of(&clause) {
            ClauseKind::Empty => return Err(ClauseDBError::EmptyClause),

            ClauseKind::Unit => {
                if atom_db.trail.decision_is_made() {
                    return Err(ClauseDBError::DecisionMade);
                }
                ClauseBody::Unit(UnitClause::new(clause[0]))
            }

            ClauseKind::Binary => {
                order_for_watching(&mut clause, atom_db);
                let mut binary = BinaryClause::new(clause[0], clause[1]);
                binary.set_activity(self.config.initial_activity.value);
                ClauseBody::Binary(binary)
            }

            ClauseKind::HeadTail => {
                order_for_watching(&mut clause, atom_db);
                let mut head_tail = HTClause::new(clause);
                head_tail.set_activity(self.config.initial_activity.value);
                ClauseBody::HeadTail(head_tail)
            }
        };

        let key = match source {
            ClauseSource::Original => ClauseKey::Original(
                self.original
                    .insert_with_key(|k| dbClause::new(ClauseKey::Original(k), source, body)),
            ),
            ClauseSource::Resolution => ClauseKey::Addition(
                self.addition
                    .insert_with_key(|k| dbClause::new(ClauseKey::Addition(k), source, body)),
            ),
        };

        let stored = self.get(&key)?;
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", stored.as_dimacs(false));
        stored.register(atom_db);

        match stored.assert_constraint_if_needed(atom_db) {
            true => Ok(key),
            false => match stored.body() {
                ClauseBody::Unit(_) => Err(ClauseDBError::UnsatisfiableUnit(key)),
                _ => Err(ClauseDBError::Unsatisfiable(key)),
            },
        }
    }

    /// Stores the contents of `buffer` as an addition clause, leaving the buffer empty.
    ///
    /// Typically, `buffer` is a clause learnt by analysis of a conflict and the context has backjumped to the level on which the clause asserts some literal.
    /// If so, the literal is asserted with the stored clause as the reason.
    pub fn learn(
        &mut self,
        buffer: &mut CClause,
        atom_db: &mut AtomDB,
    ) -> Result<ClauseKey, ClauseDBError> {
        self.store(std::mem::take(buffer), ClauseSource::Resolution, atom_db)
    }

    /// The clause stored under `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&dbClause, ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(k) => self.original.get(*k),
            ClauseKey::Addition(k) => self.addition.get(*k),
        };
        clause.ok_or(ClauseDBError::Missing)
    }

    /// The clause stored under `key`, mutably.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut dbClause, ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(k) => self.original.get_mut(*k),
            ClauseKey::Addition(k) => self.addition.get_mut(*k),
        };
        clause.ok_or(ClauseDBError::Missing)
    }

    /// Removes the clause stored under `key` from the database and from every watch list the clause is registered on.
    ///
    /// A clause which is the reason for some assignment is not removed.
    pub fn remove(
        &mut self,
        key: &ClauseKey,
        atom_db: &mut AtomDB,
    ) -> Result<dbClause, ClauseDBError> {
        let clause = self.get(key)?;
        if clause.locked(atom_db) {
            return Err(ClauseDBError::Locked);
        }
        clause.remove(atom_db);

        log::trace!(target: targets::CLAUSE_DB, "Removed {key}");
        let removed = match key {
            ClauseKey::Original(k) => self.original.remove(*k),
            ClauseKey::Addition(k) => self.addition.remove(*k),
        };
        removed.ok_or(ClauseDBError::Missing)
    }

    /// Pushes the reason the clause stored under `key` gives for `literal` (or for a conflict, if `literal` is `None`) to `out`.
    pub fn reason(
        &self,
        key: &ClauseKey,
        literal: Option<CLiteral>,
        atom_db: &AtomDB,
        out: &mut Vec<CLiteral>,
    ) -> Result<(), ClauseDBError> {
        let clause = self.get(key)?;
        log::trace!(target: targets::REASON, "Reason from {key} for {literal:?}");
        clause.calc_reason(literal, atom_db, out);
        Ok(())
    }

    /// Bumps the activity of the clause stored under `key`, and decays the bump applied to future clauses.
    ///
    /// If the activity of the clause exceeds the maximum bump, the activity of every clause is rescaled.
    pub fn bump_activity(&mut self, key: &ClauseKey) -> Result<(), ClauseDBError> {
        let bump = self.config.bump.value;
        let clause = self.get_mut(key)?;
        let activity = clause.activity() + bump;
        clause.set_activity(activity);

        if activity > self.config.bump.max {
            self.rescale_activities(1.0 / self.config.bump.max);
        }

        self.config.bump.value *= 1.0 / (1.0 - self.config.decay.value);
        if self.config.bump.value > self.config.bump.max {
            self.rescale_activities(1.0 / self.config.bump.max);
        }
        Ok(())
    }

    /// Multiplies the activity of every clause, and the bump applied to future clauses, by `factor`.
    pub fn rescale_activities(&mut self, factor: Activity) {
        log::trace!(target: targets::CLAUSE_DB, "Rescale activity by {factor}");
        for clause in self.original.values_mut().chain(self.addition.values_mut()) {
            clause.rescale_by(factor);
        }
        self.config.bump.value *= factor;
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition.len()
    }

    /// A count of all clauses.
    pub fn total_count(&self) -> usize {
        self.original.len() + self.addition.len()
    }

    /// An iterator over all stored clauses, original clauses first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.original.values().chain(self.addition.values())
    }

    /// An iterator over all addition clauses.
    pub fn addition_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.addition.values()
    }
}

/// Places the two literals best to watch at the front and back of `literals`, without disturbing the order of literals which are not moved.
///
/// Literals which are not false are best, followed by false literals from higher levels.
/// A literal already at the front (or back) is only moved if the literal is false.
fn order_for_watching(literals: &mut [CLiteral], atom_db: &AtomDB) {
    let last = literals.len() - 1;

    let priority = |literal: CLiteral| match atom_db.is_falsified(literal) {
        true => (false, atom_db.level_of(literal.atom())),
        false => (true, None),
    };

    // The first index from `start` with the greatest priority.
    let best_from = |literals: &[CLiteral], start: usize| {
        (start + 1..literals.len()).fold(start, |best, index| {
            match priority(literals[index]) > priority(literals[best]) {
                true => index,
                false => best,
            }
        })
    };

    if atom_db.is_falsified(literals[0]) {
        let index = best_from(literals, 0);
        literals.swap(0, index);
    }

    if atom_db.is_falsified(literals[last]) {
        let index = best_from(literals, 1);
        literals.swap(last, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::atom::AtomValue;

    fn setup(count: usize) -> (ClauseDB, AtomDB) {
        let mut atom_db = AtomDB::default();
        for _ in 0..count {
            atom_db.fresh_atom().unwrap();
        }
        (ClauseDB::new(&Config::default()), atom_db)
    }

    #[test]
    fn empty_clause() {
        let (mut clause_db, mut atom_db) = setup(1);
        assert_eq!(
            clause_db.store(vec![], ClauseSource::Original, &mut atom_db),
            Err(ClauseDBError::EmptyClause)
        );
        assert_eq!(clause_db.total_count(), 0);
    }

    #[test]
    fn unit_clauses() {
        let (mut clause_db, mut atom_db) = setup(2);

        let key = clause_db
            .store(vec![-1], ClauseSource::Original, &mut atom_db)
            .unwrap();
        assert!(atom_db.is_satisfied(-1));
        assert_eq!(atom_db.reason_of(-1), Some(key));
        assert!(clause_db.get(&key).unwrap().locked(&atom_db));
        assert_eq!(clause_db.remove(&key, &mut atom_db), Err(ClauseDBError::Locked));

        let result = clause_db.store(vec![1], ClauseSource::Original, &mut atom_db);
        assert!(matches!(result, Err(ClauseDBError::UnsatisfiableUnit(_))));
        assert_eq!(clause_db.original_count(), 2);

        assert_eq!(atom_db.decide(2), AtomValue::NotSet);
        assert_eq!(
            clause_db.store(vec![2], ClauseSource::Original, &mut atom_db),
            Err(ClauseDBError::DecisionMade)
        );
    }

    #[test]
    fn watches_avoid_false_literals() {
        let (mut clause_db, mut atom_db) = setup(4);
        atom_db.decide(-1);
        atom_db.decide(-4);

        let key = clause_db
            .store(vec![1, 2, 3, 4], ClauseSource::Original, &mut atom_db)
            .unwrap();

        let Ok(stored) = clause_db.get(&key) else {
            panic!("Missing clause");
        };
        let ClauseBody::HeadTail(clause) = stored.body() else {
            panic!("Unexpected shape");
        };
        assert!(!atom_db.is_falsified(clause.head()));
        assert!(!atom_db.is_falsified(clause.tail()));
        assert_eq!(stored.size(), 4);
        assert!(atom_db.watches(-clause.head()).contains(&key));
        assert!(atom_db.watches(-clause.tail()).contains(&key));
    }

    #[test]
    fn asserting_clause_is_asserted() {
        let (mut clause_db, mut atom_db) = setup(3);
        atom_db.decide(-1);
        atom_db.decide(-2);

        let mut buffer = vec![1, 2, 3];
        let key = clause_db.learn(&mut buffer, &mut atom_db).unwrap();

        assert!(buffer.is_empty());
        assert_eq!(clause_db.addition_count(), 1);
        assert!(atom_db.is_satisfied(3));
        assert_eq!(atom_db.reason_of(3), Some(key));

        let ClauseBody::HeadTail(clause) = clause_db.get(&key).unwrap().body() else {
            panic!("Unexpected shape");
        };
        assert_eq!(clause.head(), 3);
        assert_eq!(clause.tail(), 2);
        assert!(clause_db.get(&key).unwrap().locked(&atom_db));
    }

    #[test]
    fn falsified_clause() {
        let (mut clause_db, mut atom_db) = setup(2);
        atom_db.decide(-1);
        atom_db.decide(-2);

        let result = clause_db.store(vec![1, 2], ClauseSource::Original, &mut atom_db);
        assert!(matches!(result, Err(ClauseDBError::Unsatisfiable(_))));
    }

    #[test]
    fn falsified_clause_watches_highest_levels() {
        let (mut clause_db, mut atom_db) = setup(3);
        atom_db.decide(-1);
        atom_db.decide(-3);
        atom_db.decide(-2);

        let result = clause_db.store(vec![1, 2, 3], ClauseSource::Original, &mut atom_db);
        let Err(ClauseDBError::Unsatisfiable(key)) = result else {
            panic!("Expected an unsatisfiable clause, found {result:?}");
        };

        let ClauseBody::HeadTail(clause) = clause_db.get(&key).unwrap().body() else {
            panic!("Unexpected shape");
        };
        assert_eq!(clause.head(), 2);
        assert_eq!(clause.tail(), 3);

        atom_db.backjump(2);
        assert!(atom_db.is_unassigned(2));
        assert!(clause_db.get(&key).unwrap().assert_constraint_if_needed(&mut atom_db));
        assert!(atom_db.is_satisfied(2));
        assert_eq!(atom_db.reason_of(2), Some(key));
    }

    #[test]
    fn removal() {
        let (mut clause_db, mut atom_db) = setup(3);
        let key = clause_db
            .store(vec![1, 2, 3], ClauseSource::Original, &mut atom_db)
            .unwrap();

        let removed = clause_db.remove(&key, &mut atom_db).unwrap();
        assert_eq!(removed.key(), key);
        assert_eq!(clause_db.get(&key).map(|_| ()), Err(ClauseDBError::Missing));
        assert!(atom_db.watches(-1).is_empty());
        assert!(atom_db.watches(-3).is_empty());

        let fresh = clause_db
            .store(vec![1, 2, 3], ClauseSource::Original, &mut atom_db)
            .unwrap();
        assert_ne!(fresh, key);
        assert!(clause_db.get(&key).is_err());
    }

    #[test]
    fn activity() {
        let (mut clause_db, mut atom_db) = setup(3);
        let mut buffer = vec![1, 2, 3];
        let key = clause_db.learn(&mut buffer, &mut atom_db).unwrap();

        clause_db.bump_activity(&key).unwrap();
        assert_eq!(clause_db.get(&key).unwrap().activity(), 1.0);
        assert!(clause_db.config.bump.value > 1.0);

        clause_db.rescale_activities(0.5);
        assert_eq!(clause_db.get(&key).unwrap().activity(), 0.5);
    }
}
