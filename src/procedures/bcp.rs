/*!
Context methods for boolean constraint propagation.

See [Context::bcp] and [Context::propagate] for the relevant context methods.

# Overview
Propagates a literal having become true.

This is done by examining each clause on the watch list keyed by the literal, as each such clause watches the negation of the literal, which is now false.
Each clause either:
- Watches some other literal, and so leaves the list.
- Keeps the watch, and asserts some literal.
- Keeps the watch, and conflicts with the current valuation.

# Complications

A clause is given mutable access to the atom database while the watch list being walked belongs to the atom database.
So, the watch list is taken from the atom database for the walk, and clauses which keep their watch register themselves on the (now empty) list again.
Once the walk is complete the allocation of the taken list is returned to the atom database, together with the registrations made during the walk.

On a conflict, the keys of clauses which have not been examined are returned to the list before the conflict is reported.

# Example

```rust
# use ht_sat::config::Config;
# use ht_sat::context::Context;
# use ht_sat::types::err::BCPError;
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
    panic!("Insufficient literals");
};

assert!(ctx.add_clause(vec![p, q, r]).is_ok());
assert!(ctx.add_clause(vec![p, q, -r]).is_ok());

ctx.decide(-p);
assert!(ctx.propagate().is_ok());

ctx.decide(-q);
assert!(matches!(ctx.propagate(), Err(BCPError::Conflict(_))));
```
*/

use crate::{
    context::Context,
    db::vocabulary::Vocabulary,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

impl Context {
    /// Propagates `literal` having become true.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let mut watchers = std::mem::take(self.atom_db.watches(literal));

        let mut index = 0;
        while index < watchers.len() {
            let key = watchers[index];
            index += 1;

            let db_clause = match self.clause_db.get_mut(&key) {
                Ok(stored) => stored,
                Err(_) => {
                    log::trace!(target: targets::PROPAGATION, "Dropped stale watch {key}");
                    continue;
                }
            };

            if !db_clause.propagate(literal, &mut self.atom_db) {
                log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction.");
                self.atom_db
                    .watches(literal)
                    .extend_from_slice(&watchers[index..]);
                return Err(err::BCPError::Conflict(key));
            }
        }

        watchers.clear();
        let live = self.atom_db.watches(literal);
        watchers.append(live);
        *live = watchers;

        Ok(())
    }

    /// Applies [bcp](Context::bcp) to each assignment on the trail which has not been propagated, until every assignment has been propagated or a conflict is found.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(&literal) = self
            .atom_db
            .trail
            .literals
            .get(self.atom_db.trail.q_head)
        {
            self.atom_db.trail.q_head += 1;
            self.bcp(literal)?;
        }
        Ok(())
    }
}
