//! Key structures, such as atoms, literals, and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//!  A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//!  The conjunction of clauses in the [clause database](crate::db::clause) is a formula.
//!
//! ## (Boolean) values
//!
//! Values are [true] and [false], and a partial assignment of values to atoms is a [valuation].

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
