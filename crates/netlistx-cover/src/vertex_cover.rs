//! Weighted vertex cover on graphs and hypergraphs.

use std::collections::BTreeSet;

use netlistx_core::{Cost, GapMap, Graph, Hypergraph, NetlistError, NodeId, WeightMap};
use tracing::debug;

use crate::engine::{distinct, ensure_weighted, pd_cover, Certificate, ViolationSource};

/// Yields every edge with neither endpoint in the solution.
#[derive(Debug, Clone, Copy)]
pub struct EdgeViolations<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> EdgeViolations<'g, G> {
    /// Creates the source for `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<G: Graph + ?Sized> ViolationSource<NodeId> for EdgeViolations<'_, G> {
    fn violations(&mut self, solution: &BTreeSet<NodeId>) -> Result<Vec<Vec<NodeId>>, NetlistError> {
        Ok(self
            .graph
            .edges()
            .filter(|(u, v)| !solution.contains(u) && !solution.contains(v))
            .map(|(u, v)| vec![u, v])
            .collect())
    }
}

/// Yields the members of every net not yet hit by the solution.
#[derive(Debug, Clone, Copy)]
pub struct NetViolations<'h, H: ?Sized> {
    hyprgraph: &'h H,
}

impl<'h, H: Hypergraph + ?Sized> NetViolations<'h, H> {
    /// Creates the source for `hyprgraph`.
    pub fn new(hyprgraph: &'h H) -> Self {
        Self { hyprgraph }
    }
}

impl<H: Hypergraph + ?Sized> ViolationSource<NodeId> for NetViolations<'_, H> {
    fn violations(&mut self, solution: &BTreeSet<NodeId>) -> Result<Vec<Vec<NodeId>>, NetlistError> {
        let mut sets = Vec::new();
        for net in self.hyprgraph.nets() {
            let members = self.hyprgraph.net_members(net)?;
            if members.iter().any(|node| solution.contains(node)) {
                continue;
            }
            sets.push(members.to_vec());
        }
        Ok(sets)
    }
}

/// Minimum weighted vertex cover through the generic primal-dual engine.
pub fn min_vertex_cover<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, ugraph.node_count())?;
    pd_cover(EdgeViolations::new(ugraph), weight, coverset)
}

/// Minimum weighted hypergraph vertex cover through the generic engine.
pub fn min_hyper_vertex_cover<H, W>(
    hyprgraph: &H,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    H: Hypergraph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, hyprgraph.module_count())?;
    pd_cover(NetViolations::new(hyprgraph), weight, coverset)
}

/// Single forward pass vertex cover over plain edges.
///
/// The cheaper endpoint of each uncovered edge (by remaining gap, the second
/// endpoint on ties) joins the cover and its gap is charged to the other
/// endpoint. A zero-gap endpoint is free for every later edge, so no edge is
/// revisited.
pub fn min_vertex_cover_fast<G, W>(
    ugraph: &G,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    G: Graph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, ugraph.node_count())?;
    let mut gap = GapMap::from_weights(weight);
    let mut certificate = Certificate::zero();
    let mut selected = 0usize;

    for (utx, vtx) in ugraph.edges() {
        if coverset.contains(&utx) || coverset.contains(&vtx) {
            continue;
        }
        let (lo, hi) = if gap.get(utx)? < gap.get(vtx)? {
            (utx, vtx)
        } else {
            (vtx, utx)
        };
        let paid = gap.get(lo)?;
        coverset.insert(lo);
        certificate.charge(weight.get(lo)?, paid);
        selected += 1;
        gap.deduct(hi, paid)?;
        gap.clear(lo)?;
        debug!(node = ?lo, paid = ?paid, "covered edge");
    }

    Ok(certificate.finish("min_vertex_cover_fast", selected))
}

/// Single pass hypergraph vertex cover.
///
/// Nets are visited once in order; a net already hit by the cover is
/// skipped, otherwise its first minimum-gap member is selected and the gap
/// is deducted from every member.
pub fn min_hyper_vertex_cover_fast<H, W>(
    hyprgraph: &H,
    weight: &WeightMap<NodeId, W>,
    coverset: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    H: Hypergraph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, hyprgraph.module_count())?;
    let mut gap = GapMap::from_weights(weight);
    let mut certificate = Certificate::zero();
    let mut selected = 0usize;

    for net in hyprgraph.nets() {
        let members = hyprgraph.net_members(net)?;
        if members.iter().any(|node| coverset.contains(node)) {
            continue;
        }
        let members = distinct(members.iter().copied());
        let Some((min_vtx, min_val)) = gap.argmin(members.iter().copied())? else {
            continue;
        };
        coverset.insert(min_vtx);
        certificate.charge(weight.get(min_vtx)?, min_val);
        selected += 1;
        for node in &members {
            gap.deduct(*node, min_val)?;
        }
        debug!(net = ?net, node = ?min_vtx, paid = ?min_val, "covered net");
    }

    Ok(certificate.finish("min_hyper_vertex_cover_fast", selected))
}
