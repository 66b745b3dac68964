/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The binary installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to watch lists
    pub const WATCHES: &str = "watches";

    /// Logs related to undoing assignments
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to the reasons for an assignment
    pub const REASON: &str = "reason";

    /// Logs related to reading a formula
    pub const PARSE: &str = "parse";
}
