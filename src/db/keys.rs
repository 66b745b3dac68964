use slotmap::{DefaultKey, Key};

use crate::structures::clause::ClauseSource;

/// A key to access a clause stored in the clause database.
///
/// Clauses are stored in an arena, and a key contains the (generational) key of the arena.
/// So, a key to a removed clause is never mistaken for a key to some clause stored later.
///
/// Watch lists and reasons store keys, rather than references to clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause.
    Original(DefaultKey),

    /// The key to an addition, e.g. a clause learnt during analysis.
    Addition(DefaultKey),
}

impl ClauseKey {
    /// The source of the clause the key is for.
    pub fn source(&self) -> ClauseSource {
        match self {
            Self::Original(_) => ClauseSource::Original,
            Self::Addition(_) => ClauseSource::Resolution,
        }
    }

    /// The key to the arena.
    pub fn arena_key(&self) -> DefaultKey {
        match self {
            Self::Original(key) | Self::Addition(key) => *key,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({:?})", key.data()),
            Self::Addition(key) => write!(f, "Addition({:?})", key.data()),
        }
    }
}
