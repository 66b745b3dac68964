//! Clauses of a single literal.
//!
//! A unit clause is asserted when stored, with the clause as the reason for the literal.
//! So, a unit clause never watches a literal.

use crate::{
    db::{
        ClauseKey,
        vocabulary::{UnitPropagationListener, Vocabulary},
    },
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// A clause of one literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitClause {
    literal: CLiteral,
}

impl UnitClause {
    pub fn new(literal: CLiteral) -> Self {
        UnitClause { literal }
    }

    pub fn literal(&self) -> CLiteral {
        self.literal
    }

    /// Asserts the literal, with the clause as the reason.
    pub fn assert_constraint(&self, key: ClauseKey, solver: &mut impl UnitPropagationListener) -> bool {
        solver.enqueue(self.literal, key)
    }

    /// Unit clauses do not watch literals, and so are not propagated.
    /// Still, the only consequence of the clause is the literal.
    pub fn propagate(&self, key: ClauseKey, _p: CLiteral, solver: &mut impl UnitPropagationListener) -> bool {
        debug_assert!(false, "Propagation of a unit clause");
        log::warn!(target: targets::PROPAGATION, "Propagation of unit clause {key}");
        solver.enqueue(self.literal, key)
    }

    /// Pushes the negation of the literal to `out`, if the literal is false.
    pub fn calc_reason(&self, voc: &impl Vocabulary, out: &mut Vec<CLiteral>) {
        if voc.is_falsified(self.literal) {
            out.push(self.literal.negate());
        }
    }

    pub fn simplify(&self, voc: &impl Vocabulary) -> bool {
        voc.is_satisfied(self.literal)
    }

    pub fn locked(&self, key: ClauseKey, voc: &impl Vocabulary) -> bool {
        voc.reason_of(self.literal) == Some(key)
    }

    pub fn assertion_level(&self, trail: &[CLiteral], _level: u32) -> Option<usize> {
        let atom = self.literal.atom();
        trail.iter().rposition(|literal| literal.atom() == atom)
    }
}

impl Clause for UnitClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(self.literal)
    }

    fn size(&self) -> usize {
        1
    }

    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        match index {
            0 => Some(self.literal),
            _ => None,
        }
    }
}
