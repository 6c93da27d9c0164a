//! BFS cycle detection, cycle reconstruction and the cycle cover variants.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use netlistx_core::{Cost, Graph, NetlistError, NodeId, WeightMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PdConfig;
use crate::engine::{ensure_weighted, pd_cover_with, Certificate, ViolationSource};

/// Per-node BFS record.
///
/// `depth` starts at the node count for the root of a search tree and
/// decreases by one per traversed edge. It is only meaningful for
/// ancestor walks and parity tests, not as a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsInfo {
    /// Node this one was discovered from; the root is its own parent.
    pub parent: NodeId,
    /// Descending depth counter.
    pub depth: i64,
}

/// BFS records keyed by node.
pub type BfsTable = BTreeMap<NodeId, BfsInfo>;

/// First back-edge found by [`find_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleWitness {
    /// BFS records of the search tree that closed the cycle.
    pub info: BfsTable,
    /// Node being expanded when the back-edge was seen.
    pub parent: NodeId,
    /// Already visited endpoint of the back-edge.
    pub child: NodeId,
}

impl CycleWitness {
    /// Returns whether the witnessed cycle has odd length.
    ///
    /// Both endpoints hang off the same tree, so equal depth parity means
    /// the two tree paths plus the closing edge add up to an odd count.
    pub fn is_odd(&self) -> Result<bool, NetlistError> {
        let parent = lookup(&self.info, self.parent)?;
        let child = lookup(&self.info, self.child)?;
        Ok((parent.depth - child.depth).rem_euclid(2) == 0)
    }

    /// Rebuilds the cycle through the lowest common ancestor.
    pub fn cycle(&self) -> Result<Vec<NodeId>, NetlistError> {
        construct_cycle(&self.info, self.parent, self.child)
    }
}

fn lookup(info: &BfsTable, node: NodeId) -> Result<BfsInfo, NetlistError> {
    info.get(&node).copied().ok_or_else(|| {
        NetlistError::cycle("missing-bfs-info", "node has no BFS record")
            .with_context("node", node.as_raw())
    })
}

fn broken_chain(node: NodeId) -> NetlistError {
    NetlistError::cycle("broken-parent-chain", "parent chains never meet")
        .with_context("node", node.as_raw())
        .with_hint("reconstruct only witnesses produced by a single BFS tree")
}

/// Walks the parent chains of `parent` and `child` to their common ancestor
/// and returns the cycle as an ordered node sequence starting at that
/// ancestor.
pub fn construct_cycle(
    info: &BfsTable,
    parent: NodeId,
    child: NodeId,
) -> Result<Vec<NodeId>, NetlistError> {
    let info_parent = lookup(info, parent)?;
    let info_child = lookup(info, child)?;

    // node_a is the deeper endpoint
    let (mut node_a, mut depth_a, mut node_b, depth_b) = if info_parent.depth < info_child.depth {
        (parent, info_parent.depth, child, info_child.depth)
    } else {
        (child, info_child.depth, parent, info_parent.depth)
    };

    let mut cycle = VecDeque::new();
    let mut budget = info.len();
    while depth_a < depth_b {
        if budget == 0 {
            return Err(broken_chain(node_a));
        }
        budget -= 1;
        cycle.push_back(node_a);
        node_a = lookup(info, node_a)?.parent;
        depth_a = lookup(info, node_a)?.depth;
    }

    let mut budget = info.len();
    while node_a != node_b {
        if budget == 0 {
            return Err(broken_chain(node_a));
        }
        budget -= 1;
        cycle.push_back(node_a);
        cycle.push_front(node_b);
        node_a = lookup(info, node_a)?.parent;
        node_b = lookup(info, node_b)?.parent;
    }

    cycle.push_front(node_b);
    Ok(cycle.into())
}

/// Breadth-first search for the first cycle avoiding `coverset`.
///
/// Every uncovered node seeds a fresh search tree at depth
/// `node_count`. The search stops at the first neighbor that was already
/// visited and is not the expanding node's own parent.
pub fn find_cycle<G>(
    ugraph: &G,
    coverset: &BTreeSet<NodeId>,
) -> Result<Option<CycleWitness>, NetlistError>
where
    G: Graph + ?Sized,
{
    let depth_limit = ugraph.node_count() as i64;

    for source in ugraph.nodes() {
        if coverset.contains(&source) {
            continue;
        }
        let mut info = BfsTable::new();
        info.insert(
            source,
            BfsInfo {
                parent: source,
                depth: depth_limit,
            },
        );
        let mut queue = VecDeque::from([source]);

        while let Some(parent) = queue.pop_front() {
            let BfsInfo {
                parent: succ,
                depth: depth_now,
            } = lookup(&info, parent)?;
            for &child in ugraph.neighbors(parent)? {
                if coverset.contains(&child) {
                    continue;
                }
                if !info.contains_key(&child) {
                    info.insert(
                        child,
                        BfsInfo {
                            parent,
                            depth: depth_now - 1,
                        },
                    );
                    queue.push_back(child);
                    continue;
                }
                if succ == child {
                    continue;
                }
                debug!(source = ?source, parent = ?parent, child = ?child, "back-edge found");
                return Ok(Some(CycleWitness {
                    info,
                    parent,
                    child,
                }));
            }
        }
    }

    Ok(None)
}

/// Which witnesses a [`CycleViolations`] source accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleParity {
    /// Any cycle.
    Any,
    /// Only odd cycles; an even first witness yields nothing.
    Odd,
}

/// Yields at most one cycle per query, found by a fresh BFS.
#[derive(Debug, Clone, Copy)]
pub struct CycleViolations<'g, G: ?Sized> {
    graph: &'g G,
    parity: CycleParity,
}

impl<'g, G: Graph + ?Sized> CycleViolations<'g, G> {
    /// Creates the source for `graph`.
    pub fn new(graph: &'g G, parity: CycleParity) -> Self {
        Self { graph, parity }
    }
}

impl<G: Graph + ?Sized> ViolationSource<NodeId> for CycleViolations<'_, G> {
    fn violations(&mut self, solution: &BTreeSet<NodeId>) -> Result<Vec<Vec<NodeId>>, NetlistError> {
        let Some(witness) = find_cycle(self.graph, solution)? else {
            return Ok(Vec::new());
        };
        if self.parity == CycleParity::Odd && !witness.is_odd()? {
            return Ok(Vec::new());
        }
        Ok(vec![witness.cycle()?])
    }
}

/// Cycle cover through the primal-dual engine, one witnessed cycle per round.
pub fn min_cycle_cover<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    min_cycle_cover_with(ugraph, weight, coverset, &PdConfig::default())
}

/// [`min_cycle_cover`] with an explicit configuration.
pub fn min_cycle_cover_with<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
    config: &PdConfig,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, ugraph.node_count())?;
    let source = CycleViolations::new(ugraph, CycleParity::Any);
    pd_cover_with(source, weight, coverset, config)
}

/// Odd cycle cover through the primal-dual engine.
pub fn min_odd_cycle_cover<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    min_odd_cycle_cover_with(ugraph, weight, coverset, &PdConfig::default())
}

/// [`min_odd_cycle_cover`] with an explicit configuration.
pub fn min_odd_cycle_cover_with<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
    config: &PdConfig,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, ugraph.node_count())?;
    let source = CycleViolations::new(ugraph, CycleParity::Odd);
    pd_cover_with(source, weight, coverset, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u64) -> NodeId {
        NodeId::from_raw(i)
    }

    fn record(parent: u64, depth: i64) -> BfsInfo {
        BfsInfo {
            parent: n(parent),
            depth,
        }
    }

    #[test]
    fn reconstructs_along_a_single_chain() {
        let info: BfsTable = [
            (n(0), record(0, 3)),
            (n(1), record(0, 2)),
            (n(2), record(1, 1)),
            (n(3), record(2, 0)),
        ]
        .into_iter()
        .collect();
        let cycle = construct_cycle(&info, n(1), n(3)).unwrap();
        assert_eq!(cycle, vec![n(1), n(3), n(2)]);
    }

    #[test]
    fn reconstructs_through_common_ancestor() {
        // 0 -> {1, 2}, 1 -> 3, 2 -> 4, closing edge 3-4
        let info: BfsTable = [
            (n(0), record(0, 5)),
            (n(1), record(0, 4)),
            (n(2), record(0, 4)),
            (n(3), record(1, 3)),
            (n(4), record(2, 3)),
        ]
        .into_iter()
        .collect();
        let cycle = construct_cycle(&info, n(3), n(4)).unwrap();
        assert_eq!(cycle, vec![n(0), n(1), n(3), n(4), n(2)]);
    }

    #[test]
    fn missing_records_are_errors() {
        let info: BfsTable = [(n(0), record(0, 1))].into_iter().collect();
        let err = construct_cycle(&info, n(0), n(7)).unwrap_err();
        assert_eq!(err.info().code, "missing-bfs-info");
    }

    #[test]
    fn disjoint_trees_do_not_loop_forever() {
        let info: BfsTable = [(n(0), record(0, 2)), (n(1), record(1, 2))]
            .into_iter()
            .collect();
        let err = construct_cycle(&info, n(0), n(1)).unwrap_err();
        assert_eq!(err.info().code, "broken-parent-chain");
    }
}
