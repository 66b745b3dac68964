/*!
(The internal representation of) an atom (aka. a 'variable').

Each (internal) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That the atoms are [0..*m*) for some *m*.

This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`, without taking too much space.

# Notes
- The atom `0` is fixed internally with a value of true, and so the first atom of a formula is `1`.
  This matches the integer representation of [literals](crate::structures::literal), where `0` has no negation.
- External names of atoms are given by an [AtomMapper](crate::db::vocabulary::AtomMapper).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom which is always true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
