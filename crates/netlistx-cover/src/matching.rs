//! Minimum weighted maximal matching over hypergraph nets.

use std::collections::BTreeSet;

use netlistx_core::{Cost, GapMap, Hypergraph, NetId, NetlistError, NodeId, WeightMap};
use tracing::debug;

use crate::engine::{distinct, ensure_weighted, Certificate};

fn is_blocked<H: Hypergraph + ?Sized>(
    hyprgraph: &H,
    net: NetId,
    dep: &BTreeSet<NodeId>,
) -> Result<bool, NetlistError> {
    Ok(hyprgraph
        .net_members(net)?
        .iter()
        .any(|node| dep.contains(node)))
}

fn cover<H: Hypergraph + ?Sized>(
    hyprgraph: &H,
    net: NetId,
    dep: &mut BTreeSet<NodeId>,
) -> Result<(), NetlistError> {
    dep.extend(hyprgraph.net_members(net)?.iter().copied());
    Ok(())
}

/// Primal-dual maximal matching where two nets conflict when they share a
/// member.
///
/// Nets are visited in order. A net with a member in `dep` is skipped.
/// Otherwise the minimum-gap net among itself and every unblocked net
/// reachable through its members is matched (the visited net wins ties) and
/// all of the matched net's members become dependent. When another net was
/// matched, its gap is charged against every candidate.
///
/// Nets already in `matchset` are kept and their members are blocked before
/// the pass starts.
pub fn min_maximal_matching<H, W>(
    hyprgraph: &H,
    weight: &WeightMap<NetId, W>,
    matchset: &mut BTreeSet<NetId>,
    dep: &mut BTreeSet<NodeId>,
) -> Result<Certificate<W>, NetlistError>
where
    H: Hypergraph + ?Sized,
    W: Cost,
{
    ensure_weighted(weight, hyprgraph.nets().len())?;
    for net in matchset.iter().copied() {
        cover(hyprgraph, net, dep)?;
    }

    let mut gap = GapMap::from_weights(weight);
    let mut certificate = Certificate::zero();
    let mut selected = 0usize;

    for net in hyprgraph.nets() {
        if matchset.contains(&net) || is_blocked(hyprgraph, net, dep)? {
            continue;
        }

        let mut reachable = vec![net];
        for node in hyprgraph.net_members(net)? {
            for &other in hyprgraph.incident_nets(*node)? {
                if !is_blocked(hyprgraph, other, dep)? {
                    reachable.push(other);
                }
            }
        }
        let candidates = distinct(reachable);
        let Some((min_net, min_val)) = gap.argmin(candidates.iter().copied())? else {
            continue;
        };

        matchset.insert(min_net);
        cover(hyprgraph, min_net, dep)?;
        certificate.charge(weight.get(min_net)?, min_val);
        selected += 1;
        debug!(visited = ?net, net = ?min_net, paid = ?min_val, "matched net");

        if min_net == net {
            continue;
        }
        for other in &candidates {
            gap.deduct(*other, min_val)?;
        }
    }

    Ok(certificate.finish("min_maximal_matching", selected))
}
