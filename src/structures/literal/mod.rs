//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is an integer, whose absolute value is the atom and whose sign is the polarity.
//!
//! ```rust
//! # use ht_sat::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let literal = CLiteral::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().negate(), literal);
//! assert_eq!(literal.negate().atom(), literal.atom());
//! ```
//!
//! Negation is an involution, and the atom of a literal is independent of polarity.

mod int_literal;
pub use int_literal::IntLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;
