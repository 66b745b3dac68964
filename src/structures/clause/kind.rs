use super::Clause;

/// The shape a clause takes when stored, determined by the number of literals.
///
/// See the [clause database](crate::db::clause) for the structure used for each shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    /// No literals, and so never stored.
    Empty,

    /// One literal, asserted when stored.
    Unit,

    /// Two literals, each watching the other.
    Binary,

    /// Three or more literals, watching a head and a tail.
    HeadTail,
}

impl ClauseKind {
    /// The shape of `clause`.
    pub fn of(clause: &impl Clause) -> Self {
        match clause.size() {
            0 => Self::Empty,
            1 => Self::Unit,
            2 => Self::Binary,
            _ => Self::HeadTail,
        }
    }
}
