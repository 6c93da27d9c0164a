//! Minimum weighted maximal independent set.

use std::collections::BTreeSet;

use netlistx_core::{Cost, GapMap, Graph, NetlistError, NodeId, WeightMap};
use tracing::debug;

use crate::engine::{distinct, ensure_weighted, Certificate};

fn block<G: Graph + ?Sized>(
    ugraph: &G,
    node: NodeId,
    dep: &mut BTreeSet<NodeId>,
) -> Result<(), NetlistError> {
    dep.insert(node);
    dep.extend(ugraph.neighbors(node)?.iter().copied());
    Ok(())
}

/// Primal-dual maximal independent set.
///
/// Nodes are visited in graph order. For every node that is neither
/// dependent nor already selected, the minimum-gap node among itself and
/// its non-dependent neighbors is selected (the visited node wins ties) and
/// its closed neighborhood becomes dependent. When a neighbor was chosen,
/// its gap is charged against the visited node's other candidates.
///
/// Nodes already in `indset` are kept and their neighborhoods are blocked
/// before the pass starts.
pub fn min_maximal_independent_set<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    indset: &mut BTreeSet<NodeId>,
    dep: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, ugraph.node_count())?;
    for node in indset.iter().copied() {
        block(ugraph, node, dep)?;
    }

    let mut gap = GapMap::from_weights(weight);
    let mut certificate = Certificate::zero();
    let mut selected = 0usize;

    for utx in ugraph.nodes() {
        if dep.contains(&utx) || indset.contains(&utx) {
            continue;
        }
        let candidates = distinct(
            std::iter::once(utx).chain(
                ugraph
                    .neighbors(utx)?
                    .iter()
                    .copied()
                    .filter(|vtx| !dep.contains(vtx)),
            ),
        );
        let Some((min_vtx, min_val)) = gap.argmin(candidates.iter().copied())? else {
            continue;
        };

        indset.insert(min_vtx);
        block(ugraph, min_vtx, dep)?;
        certificate.charge(weight.get(min_vtx)?, min_val);
        selected += 1;
        debug!(visited = ?utx, node = ?min_vtx, paid = ?min_val, "selected independent node");

        if min_vtx == utx {
            continue;
        }
        for vtx in candidates.iter().copied().filter(|vtx| *vtx != utx) {
            gap.deduct(vtx, min_val)?;
        }
    }

    Ok(certificate.finish("min_maximal_independent_set", selected))
}
