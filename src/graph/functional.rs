use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::error::TortoiseHareError;

/// Tail and cycle facts about the path leaving a start node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleFacts {
    /// Nodes visited before the first cycle node (μ)
    pub tail_length: usize,
    pub cycle_start: usize,
    /// Nodes on the cycle (λ)
    pub cycle_length: usize,
}

/// Functional graph over nodes `0..n` given by an explicit successor table
///
/// Node `i` has exactly one out-edge, to `successors[i]`.
#[derive(Debug, Clone)]
pub struct FunctionalGraph {
    graph: DiGraph<usize, ()>,
    successors: Vec<usize>,
}

impl FunctionalGraph {
    pub fn from_successors(successors: Vec<usize>) -> Result<Self, TortoiseHareError> {
        if successors.is_empty() {
            return Err(TortoiseHareError::InvalidSuccessorTable {
                message: "table must contain at least one node".to_string(),
            });
        }

        let node_count = successors.len();
        if let Some((node, &target)) = successors
            .iter()
            .enumerate()
            .find(|&(_, &target)| target >= node_count)
        {
            return Err(TortoiseHareError::InvalidSuccessorTable {
                message: format!(
                    "node {node} points to {target}, but the table only has {node_count} nodes"
                ),
            });
        }

        let mut graph = DiGraph::with_capacity(node_count, node_count);
        let indices: Vec<NodeIndex> = (0..node_count).map(|n| graph.add_node(n)).collect();
        for (node, &target) in successors.iter().enumerate() {
            graph.add_edge(indices[node], indices[target], ());
        }

        Ok(Self { graph, successors })
    }

    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.node_count()
    }

    pub fn successor(&self, node: usize) -> Option<usize> {
        self.successors.get(node).copied()
    }

    /// Owned successor function for the detector
    ///
    /// Only positions inside the table may be passed in; every position
    /// reachable from such a start stays inside it.
    pub fn successor_fn(&self) -> impl Fn(&usize) -> usize + Send + Sync + 'static {
        let table = self.successors.clone();
        move |node: &usize| table[*node]
    }

    /// All cycles of the graph, each sorted, ordered by smallest node
    ///
    /// A cycle is a strongly connected component with more than one node or a
    /// single node pointing at itself.
    pub fn cyclic_components(&self) -> Vec<Vec<usize>> {
        let mut cycles: Vec<Vec<usize>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || scc.iter().any(|&idx| self.graph.contains_edge(idx, idx))
            })
            .map(|scc| {
                let mut nodes: Vec<usize> = scc.into_iter().map(|idx| self.graph[idx]).collect();
                nodes.sort_unstable();
                nodes
            })
            .collect();

        cycles.sort();
        cycles
    }

    /// Walk from `start` to the first node on a cycle
    ///
    /// This is computed from the strongly connected components and does not
    /// share any logic with the pointer chase, so it serves as an oracle for
    /// detector results.
    pub fn analyze(&self, start: usize) -> Result<CycleFacts, TortoiseHareError> {
        if !self.contains(start) {
            return Err(TortoiseHareError::InvalidSuccessorTable {
                message: format!(
                    "start position {start} is outside the table of {} nodes",
                    self.node_count()
                ),
            });
        }

        let cycle_sizes: HashMap<usize, usize> = self
            .cyclic_components()
            .into_iter()
            .flat_map(|cycle| {
                let len = cycle.len();
                cycle.into_iter().map(move |node| (node, len))
            })
            .collect();

        let mut node = start;
        let mut tail_length = 0;
        // Every walk in a finite functional graph reaches a cycle within
        // node_count steps.
        loop {
            if let Some(&cycle_length) = cycle_sizes.get(&node) {
                return Ok(CycleFacts {
                    tail_length,
                    cycle_start: node,
                    cycle_length,
                });
            }
            node = self.successors[node];
            tail_length += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(matches!(
            FunctionalGraph::from_successors(vec![]),
            Err(TortoiseHareError::InvalidSuccessorTable { .. })
        ));
    }

    #[test]
    fn test_out_of_range_target_is_rejected() {
        match FunctionalGraph::from_successors(vec![1, 2, 7]) {
            Err(TortoiseHareError::InvalidSuccessorTable { message }) => {
                assert!(message.contains("node 2 points to 7"));
            }
            other => panic!("Expected InvalidSuccessorTable, got {other:?}"),
        }
    }

    #[test]
    fn test_cyclic_components_with_several_cycles() {
        // 0 -> 1 -> 2 -> 1, 3 -> 3, 4 -> 5 -> 6 -> 4
        let graph = FunctionalGraph::from_successors(vec![1, 2, 1, 3, 5, 6, 4]).unwrap();

        assert_eq!(
            graph.cyclic_components(),
            vec![vec![1, 2], vec![3], vec![4, 5, 6]]
        );
    }

    #[test]
    fn test_analyze_tail_and_cycle() {
        let graph = FunctionalGraph::from_successors(vec![1, 2, 3, 4, 5, 6, 7, 3]).unwrap();

        assert_eq!(
            graph.analyze(0).unwrap(),
            CycleFacts {
                tail_length: 3,
                cycle_start: 3,
                cycle_length: 5,
            }
        );
        assert_eq!(
            graph.analyze(5).unwrap(),
            CycleFacts {
                tail_length: 0,
                cycle_start: 5,
                cycle_length: 5,
            }
        );
    }

    #[test]
    fn test_analyze_self_loop() {
        let graph = FunctionalGraph::from_successors(vec![0]).unwrap();

        assert_eq!(
            graph.analyze(0).unwrap(),
            CycleFacts {
                tail_length: 0,
                cycle_start: 0,
                cycle_length: 1,
            }
        );
    }

    #[test]
    fn test_analyze_rejects_start_outside_table() {
        let graph = FunctionalGraph::from_successors(vec![0, 0]).unwrap();
        assert!(graph.analyze(2).is_err());
    }

    #[test]
    fn test_successor_fn_matches_table() {
        let graph = FunctionalGraph::from_successors(vec![2, 0, 1]).unwrap();
        let next = graph.successor_fn();

        for node in 0..3 {
            assert_eq!(Some(next(&node)), graph.successor(node));
        }
    }
}
