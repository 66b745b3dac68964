/*!
Databases for holding information relevant to a solve.

- [The atom database](crate::db::atom)
  + The vocabulary of a solve: values of atoms, reasons for forced assignments, the trail of assignments, and watch lists.
- [The clause database](crate::db::clause)
  + An arena of clauses, accessed through [keys](ClauseKey).

The [vocabulary](crate::db::vocabulary) traits describe what a clause may ask of a solve, and are implemented by the atom database.
*/

pub mod atom;
pub mod clause;
pub mod keys;
pub mod trail;
pub mod vocabulary;

pub use keys::ClauseKey;

/// The index of a decision level.
pub type LevelIndex = u32;
