/*!
The implication graph of the current valuation.

Nodes of the graph are assigned literals, together with the level on which the literal was assigned.
For each literal forced by some clause, there is an edge from each literal of the reason (see [calc_reason](crate::db::clause::db_clause::dbClause::calc_reason)) to the forced literal, labelled with the key of the clause.

If the graph is built for a conflict, an additional conflict node has an edge from each literal of the reason for the conflict.

The graph is intended for inspection (e.g. written in [DOT](https://graphviz.org/doc/info/lang.html) form), and is not used during propagation.

```rust
# use ht_sat::config::Config;
# use ht_sat::context::Context;
# use ht_sat::types::err::BCPError;
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = *ctx.fresh_literals(3).as_slice() else {
    panic!("Insufficient literals");
};

assert!(ctx.add_clause(vec![-p, q]).is_ok());
assert!(ctx.add_clause(vec![-p, -q, r]).is_ok());
assert!(ctx.add_clause(vec![-q, -r]).is_ok());

ctx.decide(p);
let Err(BCPError::Conflict(key)) = ctx.propagate() else {
    panic!("Expected a conflict");
};

let graph = ctx.implication_graph(Some(key)).unwrap();
assert_eq!(graph.conflict_decisions(), vec![p]);
assert!(graph.as_dot().contains("digraph"));
```
*/

use petgraph::{
    Direction,
    dot::Dot,
    stable_graph::{NodeIndex, StableGraph},
    visit::{Dfs, Reversed},
};

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

/// A node of the implication graph.
#[derive(Clone, Debug)]
pub struct ImplicationNode {
    /// The assigned literal, or `None` for the conflict.
    pub literal: Option<CLiteral>,

    /// The level of the assignment.
    pub level: LevelIndex,
}

impl std::fmt::Display for ImplicationNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literal {
            Some(literal) => write!(f, "{literal} @ {}", self.level),
            None => write!(f, "⊥ @ {}", self.level),
        }
    }
}

/// An edge of the implication graph, labelled with the clause responsible for the implication.
#[derive(Clone, Copy, Debug)]
pub struct ImplicationEdge {
    pub key: ClauseKey,
}

impl std::fmt::Display for ImplicationEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// The implication graph.
#[derive(Debug)]
pub struct ImplicationGraph {
    atom_indicies: Vec<Option<NodeIndex>>,
    conflict_index: Option<NodeIndex>,
    pub graph: StableGraph<ImplicationNode, ImplicationEdge>,
}

impl ImplicationGraph {
    fn new(atom_count: usize) -> Self {
        ImplicationGraph {
            atom_indicies: vec![None; atom_count],
            conflict_index: None,
            graph: StableGraph::new(),
        }
    }

    fn add_literal(&mut self, literal: CLiteral, level: LevelIndex) -> NodeIndex {
        let index = self.graph.add_node(ImplicationNode {
            literal: Some(literal),
            level,
        });
        if let Some(slot) = self.atom_indicies.get_mut(literal.atom() as usize) {
            *slot = Some(index);
        }
        index
    }

    fn add_antecedents(&mut self, antecedents: &[CLiteral], to: NodeIndex, key: ClauseKey) {
        for antecedent in antecedents {
            if let Some(from) = self.node_of(*antecedent) {
                self.graph.add_edge(from, to, ImplicationEdge { key });
            }
        }
    }

    /// The node of `literal`, if the literal is part of the graph.
    pub fn node_of(&self, literal: CLiteral) -> Option<NodeIndex> {
        let index = (*self.atom_indicies.get(literal.atom() as usize)?)?;
        match self.graph.node_weight(index)?.literal == Some(literal) {
            true => Some(index),
            false => None,
        }
    }

    /// The conflict node, if the graph was built for a conflict.
    pub fn conflict(&self) -> Option<NodeIndex> {
        self.conflict_index
    }

    /// The literals which directly imply the literal at `index`.
    pub fn antecedents(&self, index: NodeIndex) -> Vec<CLiteral> {
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .filter_map(|antecedent| self.graph.node_weight(antecedent)?.literal)
            .collect()
    }

    /// The decisions from which the conflict follows, in order of assignment.
    ///
    /// Empty, if the graph was not built for a conflict or the conflict follows from no decision.
    pub fn conflict_decisions(&self) -> Vec<CLiteral> {
        let Some(conflict) = self.conflict_index else {
            return Vec::default();
        };

        let reversed = Reversed(&self.graph);
        let mut dfs = Dfs::new(reversed, conflict);
        let mut decisions = Vec::default();

        while let Some(index) = dfs.next(reversed) {
            let Some(node) = self.graph.node_weight(index) else {
                continue;
            };
            let is_root = self
                .graph
                .neighbors_directed(index, Direction::Incoming)
                .next()
                .is_none();
            if let (Some(literal), true, true) = (node.literal, is_root, node.level > 0) {
                decisions.push((node.level, literal));
            }
        }

        decisions.sort_unstable();
        decisions.into_iter().map(|(_, literal)| literal).collect()
    }

    /// The graph in DOT form.
    pub fn as_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

impl Context {
    /// The implication graph of the current valuation, with a conflict node for the clause stored under `conflict`, if given.
    ///
    /// For documentation see [procedures::implication](crate::procedures::implication).
    pub fn implication_graph(
        &self,
        conflict: Option<ClauseKey>,
    ) -> Result<ImplicationGraph, ErrorKind> {
        let mut implication_graph = ImplicationGraph::new(self.atom_db.count());
        let mut reason = Vec::default();

        for &literal in &self.atom_db.trail.literals {
            let level = self.atom_db.level_of(literal.atom()).unwrap_or(0);
            let index = implication_graph.add_literal(literal, level);

            if let Some(key) = self.atom_db.reason_for(literal.atom()) {
                reason.clear();
                self.clause_db
                    .reason(&key, Some(literal), &self.atom_db, &mut reason)?;
                implication_graph.add_antecedents(&reason, index, key);
            }
        }

        if let Some(key) = conflict {
            let index = implication_graph.graph.add_node(ImplicationNode {
                literal: None,
                level: self.atom_db.level(),
            });
            implication_graph.conflict_index = Some(index);

            reason.clear();
            self.clause_db
                .reason(&key, None, &self.atom_db, &mut reason)?;
            implication_graph.add_antecedents(&reason, index, key);
        }

        Ok(implication_graph)
    }
}
