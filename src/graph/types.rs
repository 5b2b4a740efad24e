//! Reference graph shapes
//!
//! A [`TailCycleShape`] lays nodes `0..tail_length` out as a straight tail
//! feeding into a ring of `cycle_length` nodes.

use std::fmt;

use serde::Serialize;

use super::FunctionalGraph;
use crate::error::TortoiseHareError;

/// A tail of zero or more nodes followed by a cycle of at least one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TailCycleShape {
    tail_length: usize,
    cycle_length: usize,
}

impl TailCycleShape {
    pub fn new(tail_length: usize, cycle_length: usize) -> Result<Self, TortoiseHareError> {
        if cycle_length == 0 {
            return Err(TortoiseHareError::InvalidShape {
                message: "cycle length must be at least 1".to_string(),
            });
        }
        if tail_length.checked_add(cycle_length).is_none() {
            return Err(TortoiseHareError::InvalidShape {
                message: format!(
                    "tail of {tail_length} plus cycle of {cycle_length} nodes does not fit in a node index"
                ),
            });
        }

        Ok(Self {
            tail_length,
            cycle_length,
        })
    }

    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    pub fn node_count(&self) -> usize {
        self.tail_length + self.cycle_length
    }

    /// First node on the cycle
    pub fn cycle_start(&self) -> usize {
        self.tail_length
    }

    pub fn is_cycle_node(&self, node: usize) -> bool {
        node >= self.tail_length
    }

    /// Successor of `node`
    ///
    /// Total over all of `usize`: indices past the last node are folded back
    /// onto the cycle.
    pub fn successor(&self, node: usize) -> usize {
        if node < self.tail_length {
            node + 1
        } else {
            let offset = (node - self.tail_length) % self.cycle_length;
            self.tail_length + (offset + 1) % self.cycle_length
        }
    }

    /// Owned successor function, suitable for
    /// [`crate::detector::CycleDetector::configure`]
    pub fn successor_fn(&self) -> impl Fn(&usize) -> usize + Send + Sync + 'static {
        let shape = *self;
        move |node: &usize| shape.successor(*node)
    }

    pub fn to_functional_graph(&self) -> Result<FunctionalGraph, TortoiseHareError> {
        FunctionalGraph::from_successors((0..self.node_count()).map(|n| self.successor(n)).collect())
    }
}

impl fmt::Display for TailCycleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tail={} cycle={}", self.tail_length, self.cycle_length)
    }
}
