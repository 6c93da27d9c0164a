use std::collections::BTreeSet;

use netlistx_core::{Handle, NetId, NetlistError, NodeId};

pub(crate) fn unknown_node(node: NodeId) -> NetlistError {
    NetlistError::graph("unknown-node", "node does not exist").with_context("node", node.as_raw())
}

pub(crate) fn unknown_net(net: NetId) -> NetlistError {
    NetlistError::graph("unknown-net", "net does not exist").with_context("net", net.as_raw())
}

/// Orders an undirected edge so that duplicates collapse to one key.
pub(crate) fn edge_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Ensures that the pin list is sorted and contains no duplicates.
pub(crate) fn canonicalize_pins(nodes: &[NodeId]) -> Vec<NodeId> {
    let set: BTreeSet<NodeId> = nodes.iter().copied().collect();
    set.into_iter().collect()
}

/// Returns an error unless `node` lies in `0..count`.
pub(crate) fn check_node(node: NodeId, count: usize) -> Result<(), NetlistError> {
    if node.index() < count {
        Ok(())
    } else {
        Err(unknown_node(node))
    }
}
