//! Head-tail clauses and boolean constraint propagation for conflict-driven clause-learning solvers.
//!
//! ht_sat is the propagation core of a satisfiability solver: the representation of clauses, the choice of which literals a clause watches, and the propagation of assignments forced when a watched literal becomes false.
//! Deciding on literals, restarting, and choosing which clauses to forget are left to whatever drives the core.
//!
//! # Orientation
//!
//! The library is designed around a [context](crate::context), which bundles:
//! - An [atom database](crate::db::atom), which is the *vocabulary* of a solve: the current valuation, the reason for each forced assignment, the trail of assignments, and a watch list for each literal.
//! - A [clause database](crate::db::clause), which stores clauses in an arena and hands out [keys](crate::db::ClauseKey).
//!
//! Clauses come in three shapes, distinguished by [ClauseBody](crate::db::clause::db_clause::ClauseBody):
//! - A [unit clause](crate::db::clause::unit), asserted as soon as it is added.
//! - A [binary clause](crate::db::clause::binary), where each literal watches the other.
//! - A [head-tail clause](crate::db::clause::head_tail), for three or more literals, which watches a head and a tail and keeps all other literals in a middle buffer.
//!
//! Clauses never hold references to the vocabulary, or to each other.
//! Instead, operations which need the vocabulary are given access to it through the [Vocabulary](crate::db::vocabulary::Vocabulary) and [UnitPropagationListener](crate::db::vocabulary::UnitPropagationListener) traits, and watch lists store keys.
//!
//! Useful starting points, then, may be:
//! - The [head-tail clause](crate::db::clause::head_tail), and in particular its `propagate` method.
//! - The [propagation loop](crate::procedures::bcp), which walks watch lists.
//! - The [vocabulary traits](crate::db::vocabulary), which describe what a clause may ask of a solve.
//!
//! # Example
//!
//! ```rust
//! # use ht_sat::config::Config;
//! # use ht_sat::context::Context;
//! # use ht_sat::structures::literal::{CLiteral, Literal};
//! let mut ctx = Context::from_config(Config::default());
//!
//! let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! assert!(ctx.add_clause(vec![p, q, r]).is_ok());
//!
//! ctx.decide(-p);
//! assert!(ctx.propagate().is_ok());
//! ctx.decide(-q);
//! assert!(ctx.propagate().is_ok());
//!
//! assert_eq!(ctx.atom_db.value_of(r.atom()), Some(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, logs related to watch lists may be filtered by the `watches` target.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
