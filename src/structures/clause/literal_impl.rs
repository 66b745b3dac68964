//! Implementation of clause trait for a (single) literal.

use crate::structures::{clause::Clause, literal::CLiteral};

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        match index {
            0 => Some(*self),
            _ => None,
        }
    }
}
