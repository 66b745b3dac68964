/*!
The context --- to which clauses are added and within which propagation takes place.

A context bundles:
- A [configuration](Config).
- An [atom database](AtomDB), the vocabulary of the context.
- A [clause database](ClauseDB).

The databases are separate fields so a clause borrowed from the clause database may be given mutable access to the atom database, e.g. during [propagation](crate::procedures::bcp).

# Example
```rust
# use ht_sat::context::{Context, ContextState};
# use ht_sat::config::Config;
# use ht_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = CLiteral::new(the_context.fresh_atom().unwrap(), true);
let q = CLiteral::new(the_context.fresh_atom().unwrap(), true);

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());
assert!(the_context.propagate().is_ok());

assert_eq!(the_context.atom_db.value_of(p.atom()), Some(false));
assert_eq!(the_context.atom_db.value_of(q.atom()), Some(true));

assert!(the_context.add_clause(-q).is_err());
assert!(matches!(the_context.state, ContextState::Unsatisfiable(_)));
```
*/

use crate::{
    config::Config,
    db::{
        ClauseKey, LevelIndex,
        atom::{AtomDB, AtomValue},
        clause::ClauseDB,
    },
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a context.
pub enum ContextState {
    /// No inconsistency has been found.
    Input,

    /// The clauses of the context are unsatisfiable, witnessed by the clause with the given key being false at the base level.
    Unsatisfiable(ClauseKey),

    /// The empty clause was added, and so the clauses of the context are unsatisfiable.
    EmptyClause,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Unsatisfiable(_) | Self::EmptyClause => write!(f, "Unsatisfiable"),
        }
    }
}

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added, with the given key.
    Added(ClauseKey),

    /// The clause contains some literal and the negation of the literal, and so was not added.
    Tautology,
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    /// A context with the given configuration, containing only the true atom.
    pub fn from_config(config: Config) -> Self {
        Context {
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::new(&config),
            config,
            state: ContextState::Input,
        }
    }

    /// A fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        Ok(self.atom_db.fresh_atom()?)
    }

    /// Up to `count` fresh atoms, as positive literals.
    ///
    /// Fewer literals are returned only if the atoms of the context are exhausted.
    pub fn fresh_literals(&mut self, count: usize) -> Vec<CLiteral> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            match self.atom_db.fresh_atom() {
                Ok(atom) => literals.push(CLiteral::new(atom, true)),
                Err(_) => break,
            }
        }
        literals
    }

    /// Adds a clause to the context, as an original clause.
    ///
    /// Duplicate literals are removed, and tautologies are not added.
    ///
    /// If every literal of the clause is false at the base level, or the clause is empty, the context is marked unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        let mut literals: CClause = Vec::with_capacity(clause.size());

        for literal in clause.literals() {
            if literal.atom() as usize >= self.atom_db.count() {
                return Err(err::AtomDBError::UnknownAtom(literal.atom()).into());
            }
            if literals.contains(&literal.negate()) {
                return Ok(ClauseOk::Tautology);
            }
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }

        match self
            .clause_db
            .store(literals, ClauseSource::Original, &mut self.atom_db)
        {
            Ok(key) => Ok(ClauseOk::Added(key)),

            Err(
                e @ (err::ClauseDBError::UnsatisfiableUnit(key)
                | err::ClauseDBError::Unsatisfiable(key)),
            ) => {
                if !self.atom_db.trail.decision_is_made() {
                    self.state = ContextState::Unsatisfiable(key);
                }
                Err(e.into())
            }

            Err(err::ClauseDBError::EmptyClause) => {
                self.state = ContextState::EmptyClause;
                Err(err::ClauseDBError::EmptyClause.into())
            }

            Err(e) => Err(e.into()),
        }
    }

    /// Makes a decision on `literal`, opening a fresh level if the atom of the literal has no value.
    ///
    /// # Panics
    /// If the atom of `literal` is not an atom of the context.
    pub fn decide(&mut self, literal: CLiteral) -> AtomValue {
        self.atom_db.decide(literal)
    }

    /// Undoes every assignment made above `level`.
    pub fn backjump(&mut self, level: LevelIndex) {
        self.atom_db.backjump(level)
    }

    /// The literals which forced the value of `literal`, if the value was forced by some clause.
    ///
    /// As each literal returned is true, the conjunction of the literals implies `literal`.
    pub fn reason_literals(&self, literal: CLiteral) -> Result<Option<Vec<CLiteral>>, ErrorKind> {
        let Some(key) = self.atom_db.reason_for(literal.atom()) else {
            return Ok(None);
        };
        let mut reason = Vec::default();
        self.clause_db
            .reason(&key, Some(literal), &self.atom_db, &mut reason)?;
        Ok(Some(reason))
    }

    /// The literals which together conflict with the clause stored under `key`.
    pub fn conflict_literals(&self, key: ClauseKey) -> Result<Vec<CLiteral>, ErrorKind> {
        let mut reason = Vec::default();
        self.clause_db.reason(&key, None, &self.atom_db, &mut reason)?;
        Ok(reason)
    }
}
