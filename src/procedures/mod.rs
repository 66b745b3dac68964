//! Procedures of a context.
//!
//! - [Boolean constraint propagation](crate::procedures::bcp), over a single literal or the whole trail.
//! - The [implication graph](crate::procedures::implication) of the current valuation, for inspection.

pub mod bcp;
pub mod implication;
