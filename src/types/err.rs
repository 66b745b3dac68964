//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some of these are internally expected --- e.g. BCP errors are used to report a conflict to whatever drives propagation.
//!   A conflict is an ordinary outcome of propagation, and the error only carries the key of the conflicting clause.
//!
//! Broken preconditions (e.g. building a head-tail clause from two literals) are not errors, and panic.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// Some atom was used which is not part of the database.
    UnknownAtom(crate::structures::atom::Atom),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// No clause is stored with the key.
    /// Perhaps the clause was removed…?
    Missing,

    /// The clause is the reason for some assignment, and may not be removed.
    Locked,

    /// A unit clause was stored, though the literal of the clause is already false.
    UnsatisfiableUnit(ClauseKey),

    /// A clause was stored, though every literal of the clause is already false.
    Unsatisfiable(ClauseKey),

    /// A unit clause was stored after some decision was made.
    /// Unit clauses are only asserted at the base level.
    DecisionMade,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A literal which could not be read as an integer.
    Literal(String),

    /// A clause without a terminating `0`.
    Unterminated,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
