//! Configuration of databases, typically derived from the configuration of a context.

use super::{Activity, ConfigOption};

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each bump.
    pub decay: ConfigOption<Activity>,

    /// The activity of a clause when first stored.
    pub initial_activity: ConfigOption<Activity>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 1.0 - Activity::EPSILON,
                value: 50.0 * 1e-3,
            },

            initial_activity: ConfigOption {
                name: "initial_activity",
                min: 0.0,
                max: Activity::MAX,
                value: 0.0,
            },
        }
    }
}
