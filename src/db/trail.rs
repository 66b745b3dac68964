use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// The assignments made during a solve, in order of assignment.
///
/// Levels are marked by the index of the first assignment made on the level, and the propagation head marks the first assignment whose consequences have not been examined.
#[derive(Default)]
pub struct Trail {
    /// Assigned literals, newest last.
    pub literals: Vec<CLiteral>,

    /// Indicies at which a new level begins.
    pub level_indicies: Vec<usize>,

    /// Location of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment made on the top decision level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Marks the start of a fresh level.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// Removes levels above the given level index, if they exist, and returns the assignments made on those levels.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the assignments.
    pub fn clear_assigments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indicies stores with zero-indexing.
        // So, the first assignment of level one is literals[level_indicies[0]], and everything from there on is above level zero.
        if let Some(&level_start) = self.level_indicies.get(level as usize) {
            self.level_indicies.truncate(level as usize);
            self.q_head = std::cmp::min(self.q_head, level_start);
            self.literals.split_off(level_start)
        } else {
            Vec::default()
        }
    }
}
