//! Implementation of clause trait for a vector of literals.

use crate::structures::{
    clause::{CClause, Clause},
    literal::CLiteral,
};

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        self.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_form() {
        let clause: CClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");

        let empty: CClause = Vec::default();
        assert_eq!(empty.as_dimacs(true), "0");
    }

    #[test]
    fn external_forms() {
        use crate::db::{atom::AtomDB, vocabulary::IdentityMapper};

        let clause: CClause = vec![1, -2];
        assert_eq!(clause.as_external(&IdentityMapper), "1 -2 0");
        let unit: CLiteral = -2;
        assert_eq!(unit.as_external(&IdentityMapper), "-2 0");

        let mut atom_db = AtomDB::default();
        for _ in 0..2 {
            atom_db.fresh_atom().unwrap();
        }
        atom_db.decide(2);
        assert_eq!(clause.as_string_with(&atom_db, &IdentityMapper), "1[?] -2[F]");
    }

    #[test]
    fn unsatisfiable() {
        let clause: CClause = vec![1, -2];
        let mut valuation = vec![Some(true), Some(false), Some(true)];
        assert!(clause.unsatisfiable_on(&valuation));

        valuation[2] = None;
        assert!(!clause.unsatisfiable_on(&valuation));
        assert_eq!(clause.asserts(&valuation), Some(-2));
    }
}
