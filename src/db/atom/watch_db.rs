/*!
A structure to record which clauses are watching an atom.

In short, a clause of two or more literals watches two of its literals, and is examined only when one of those literals becomes false.
For, so long as neither watched literal is false, the clause can neither assert some literal nor conflict with the valuation.

Each atom has two watch lists:
- Clauses to examine when the atom becomes true (i.e. clauses watching the negative literal of the atom).
- Clauses to examine when the atom becomes false (i.e. clauses watching the positive literal of the atom).

Unit clauses never watch any atom.

Binary and head-tail clauses are not distinguished, as the clause shape is available from the key of the clause in the [clause database](crate::db::clause).

The [WatchDB] structure does not have any associated mutating methods.
Instead, access to the lists of a [WatchDB] is through the [Vocabulary](crate::db::vocabulary::Vocabulary) implementation of the [AtomDB](crate::db::atom::AtomDB), keyed by literal.
*/

use crate::db::ClauseKey;

/// The watchers of an atom, distinguished by which value of the atom the watchers are interested in.
#[derive(Default)]
pub struct WatchDB {
    /// Clauses to notify when the atom becomes true.
    pub(super) positive: Vec<ClauseKey>,

    /// Clauses to notify when the atom becomes false.
    pub(super) negative: Vec<ClauseKey>,
}

impl WatchDB {
    /// The count of watchers for both values of the atom.
    pub fn watcher_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }
}
