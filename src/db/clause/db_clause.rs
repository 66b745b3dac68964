/*!
A clause as stored in the clause database.

A [dbClause] pairs the [body](ClauseBody) of a clause with the key of the clause and the source of the clause.
The body is one of three shapes, fixed by the count of literals in the clause:

- [Unit](ClauseBody::Unit), a single literal.
- [Binary](ClauseBody::Binary), two literals.
- [HeadTail](ClauseBody::HeadTail), three or more literals.

Methods on a [dbClause] dispatch to the shape of the body.

# Equality

Clauses are equal when the bodies are equal, regardless of key, source, or activity.
A clause of one shape is never equal to a clause of another shape.
*/

use std::hash::{Hash, Hasher};

use crate::{
    config::Activity,
    db::{
        ClauseKey,
        vocabulary::{UnitPropagationListener, Vocabulary},
    },
    structures::{
        clause::{Clause, ClauseSource},
        literal::CLiteral,
    },
};

use super::{binary::BinaryClause, head_tail::HTClause, unit::UnitClause};

/// The shape of a stored clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClauseBody {
    Unit(UnitClause),
    Binary(BinaryClause),
    HeadTail(HTClause),
}

/// A clause together with the key and source of the clause.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbClause {
    key: ClauseKey,
    source: ClauseSource,
    body: ClauseBody,
}

impl dbClause {
    /// A clause with some key, from some source.
    pub fn new(key: ClauseKey, source: ClauseSource, body: ClauseBody) -> Self {
        dbClause { key, source, body }
    }

    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    pub fn body(&self) -> &ClauseBody {
        &self.body
    }

    /// Registers the clause on the watch lists of the negations of the watched literals.
    ///
    /// Unit clauses do not watch any literal.
    pub fn register(&self, voc: &mut impl Vocabulary) {
        match &self.body {
            ClauseBody::Unit(_) => {}
            ClauseBody::Binary(clause) => clause.register(self.key, voc),
            ClauseBody::HeadTail(clause) => clause.register(self.key, voc),
        }
    }

    /// Called when `p` has become true and some watched literal of the clause is `-p`.
    ///
    /// Returns `false` on a conflict, and `true` otherwise.
    pub fn propagate<S: Vocabulary + UnitPropagationListener>(
        &mut self,
        p: CLiteral,
        solver: &mut S,
    ) -> bool {
        match &mut self.body {
            ClauseBody::Unit(clause) => clause.propagate(self.key, p, solver),
            ClauseBody::Binary(clause) => clause.propagate(self.key, p, solver),
            ClauseBody::HeadTail(clause) => clause.propagate(self.key, p, solver),
        }
    }

    /// Pushes the negation of each false literal of the clause to `out`.
    pub fn calc_reason(
        &self,
        literal: Option<CLiteral>,
        voc: &impl Vocabulary,
        out: &mut Vec<CLiteral>,
    ) {
        match &self.body {
            ClauseBody::Unit(clause) => clause.calc_reason(voc, out),
            ClauseBody::Binary(clause) => clause.calc_reason(literal, voc, out),
            ClauseBody::HeadTail(clause) => clause.calc_reason(literal, voc, out),
        }
    }

    /// Removes the clause from every watch list it is registered on.
    pub fn remove(&self, voc: &mut impl Vocabulary) {
        match &self.body {
            ClauseBody::Unit(_) => {}
            ClauseBody::Binary(clause) => clause.remove(self.key, voc),
            ClauseBody::HeadTail(clause) => clause.remove(self.key, voc),
        }
    }

    /// Whether the clause is satisfied.
    pub fn simplify(&self, voc: &impl Vocabulary) -> bool {
        match &self.body {
            ClauseBody::Unit(clause) => clause.simplify(voc),
            ClauseBody::Binary(clause) => clause.simplify(voc),
            ClauseBody::HeadTail(clause) => clause.simplify(voc),
        }
    }

    /// Whether the clause is the reason for some assignment.
    pub fn locked(&self, voc: &impl Vocabulary) -> bool {
        match &self.body {
            ClauseBody::Unit(clause) => clause.locked(self.key, voc),
            ClauseBody::Binary(clause) => clause.locked(self.key, voc),
            ClauseBody::HeadTail(clause) => clause.locked(self.key, voc),
        }
    }

    pub fn assertion_level(&self, trail: &[CLiteral], level: u32) -> Option<usize> {
        match &self.body {
            ClauseBody::Unit(clause) => clause.assertion_level(trail, level),
            ClauseBody::Binary(clause) => clause.assertion_level(trail, level),
            ClauseBody::HeadTail(clause) => clause.assertion_level(trail, level),
        }
    }

    /// Asserts the first literal of the clause if every other literal is false, as arranged when the clause was stored.
    pub fn assert_constraint_if_needed<S: Vocabulary + UnitPropagationListener>(
        &self,
        solver: &mut S,
    ) -> bool {
        match &self.body {
            ClauseBody::Unit(clause) => clause.assert_constraint(self.key, solver),
            ClauseBody::Binary(clause) => clause.assert_constraint_if_needed(self.key, solver),
            ClauseBody::HeadTail(clause) => clause.assert_constraint_if_needed(self.key, solver),
        }
    }

    /// The activity of the clause, with unit clauses always inactive.
    pub fn activity(&self) -> Activity {
        match &self.body {
            ClauseBody::Unit(_) => 0.0,
            ClauseBody::Binary(clause) => clause.activity(),
            ClauseBody::HeadTail(clause) => clause.activity(),
        }
    }

    pub fn set_activity(&mut self, activity: Activity) {
        match &mut self.body {
            ClauseBody::Unit(_) => {}
            ClauseBody::Binary(clause) => clause.set_activity(activity),
            ClauseBody::HeadTail(clause) => clause.set_activity(activity),
        }
    }

    pub fn rescale_by(&mut self, factor: Activity) {
        match &mut self.body {
            ClauseBody::Unit(_) => {}
            ClauseBody::Binary(clause) => clause.rescale_by(factor),
            ClauseBody::HeadTail(clause) => clause.rescale_by(factor),
        }
    }
}

impl Clause for dbClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        let literals: Box<dyn Iterator<Item = CLiteral> + '_> = match &self.body {
            ClauseBody::Unit(clause) => Box::new(clause.literals()),
            ClauseBody::Binary(clause) => Box::new(clause.literals()),
            ClauseBody::HeadTail(clause) => Box::new(clause.literals()),
        };
        literals
    }

    fn size(&self) -> usize {
        match &self.body {
            ClauseBody::Unit(clause) => clause.size(),
            ClauseBody::Binary(clause) => clause.size(),
            ClauseBody::HeadTail(clause) => clause.size(),
        }
    }

    /// The literal at `index`.
    ///
    /// Valid only until the clause is next propagated.
    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        match &self.body {
            ClauseBody::Unit(clause) => clause.literal_at(index),
            ClauseBody::Binary(clause) => clause.literal_at(index),
            ClauseBody::HeadTail(clause) => clause.literal_at(index),
        }
    }
}

impl PartialEq for dbClause {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for dbClause {}

impl Hash for dbClause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body.hash(state);
    }
}
