//! Methods for building a context from some input.
//!
//! - [DIMACS](crate::builder::dimacs), for reading a formula in conjunctive normal form, and single clauses.

pub mod dimacs;
