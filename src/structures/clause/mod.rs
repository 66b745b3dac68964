//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use ht_sat::structures::literal::{CLiteral, Literal};
//! # use ht_sat::structures::clause::Clause;
//! let clause: Vec<CLiteral> = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//!
//! let mut some_valuation = vec![Some(true); 42];
//!
//! some_valuation[23] = Some(false);
//! some_valuation[15] = Some(false);
//! assert_eq!(clause.asserts(&some_valuation), None);
//!
//! some_valuation[41] = None;
//! assert_eq!(clause.asserts(&some_valuation), Some(-41));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! Clauses stored in the [clause database](crate::db::clause) also implement the trait, though there the order of literals is not stable.

mod int_clause;
mod literal_impl;
mod kind;
pub use kind::ClauseKind;

use crate::{
    db::vocabulary::{AtomMapper, Vocabulary, external_literal},
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// The clause trait.
///
/// Implementations give positional access to literals, and the remaining methods follow.
pub trait Clause {
    /// An iterator over all literals in the clause, in positional order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The literal at the given index of the clause, if it exists.
    fn literal_at(&self, index: usize) -> Option<CLiteral>;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            match dimacs_string.is_empty() {
                true => dimacs_string += "0",
                false => dimacs_string += " 0",
            }
        }
        dimacs_string
    }

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut asserted_literal = None;
        for literal in self.literals() {
            if let Some(existing_value) = valuation.value_of(literal.atom()).flatten() {
                match existing_value == literal.polarity() {
                    true => return None,
                    false => continue,
                }
            } else if asserted_literal.is_none() {
                asserted_literal = Some(literal);
            } else {
                return None;
            }
        }
        asserted_literal
    }

    /// The clause in DIMACS form, with each atom written through `mapper`.
    fn as_external(&self, mapper: &impl AtomMapper) -> String {
        let mut external = String::default();
        for literal in self.literals() {
            external.push_str(&external_literal(literal, mapper));
            external.push(' ');
        }
        external.push('0');
        external
    }

    /// The clause with each atom written through `mapper` and each literal annotated with its value on `voc`.
    fn as_string_with(&self, voc: &impl Vocabulary, mapper: &impl AtomMapper) -> String {
        self.literals()
            .map(|literal| {
                format!(
                    "{}[{}]",
                    external_literal(literal, mapper),
                    voc.value_to_string(literal)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns whether the clause is unsatisfiable on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.literals().all(|literal| {
            valuation
                .value_of(literal.atom())
                .is_some_and(|value_presence| {
                    value_presence.is_some_and(|value| value != literal.polarity())
                })
        })
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution (during analysis, etc.)
    Resolution,
}
