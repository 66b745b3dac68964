/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Some structures clone parts of the configuration, e.g. the [clause database](crate::db::clause::ClauseDB) keeps a copy of [ClauseDBConfig], as the bump applied to activity is revised during use.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::ClauseDBConfig;

/// The representation of the activity of a clause.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,
}
