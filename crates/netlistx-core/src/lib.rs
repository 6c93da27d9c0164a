#![deny(missing_docs)]
#![doc = "Core handles, capability traits and weight ledgers for the netlistx primal-dual solvers."]

use std::fmt::Debug;
use std::hash::Hash;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
pub mod weights;

pub use errors::{ErrorInfo, NetlistError};
pub use rng::{derive_substream_seed, RngHandle};
pub use weights::{Cost, GapMap, WeightMap};

/// Dense integer handle usable as an index into array-backed ledgers.
pub trait Handle: Copy + Eq + Ord + Hash + Debug {
    /// Short label used in error context (`"node"`, `"net"`).
    const KIND: &'static str;

    /// Returns the dense index of the handle.
    fn index(self) -> usize;

    /// Creates a handle from its dense index.
    fn from_index(index: usize) -> Self;
}

/// Identifier for a node (module) of a [`Graph`] or [`Hypergraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl Handle for NodeId {
    const KIND: &'static str = "node";

    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Self(index as u64)
    }
}

/// Identifier for a net (hyperedge) of a [`Hypergraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NetId(u64);

impl NetId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl Handle for NetId {
    const KIND: &'static str = "net";

    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Self(index as u64)
    }
}

/// Read-only undirected graph capabilities consumed by the solvers.
///
/// Implementations must keep `nodes` and `edges` in a fixed order so that
/// every solver run over the same graph is reproducible.
pub trait Graph {
    /// Returns the number of nodes; also seeds BFS depth counters.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all edges as unordered endpoint pairs.
    fn edges(&self) -> Box<dyn Iterator<Item = (NodeId, NodeId)> + '_>;

    /// Returns the neighbors of the provided node.
    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], NetlistError>;
}

/// Read-only hypergraph (netlist) capabilities consumed by the solvers.
pub trait Hypergraph {
    /// Returns the number of modules (nodes) in the hypergraph.
    fn module_count(&self) -> usize;

    /// Returns an iterator over all net identifiers.
    fn nets(&self) -> Box<dyn ExactSizeIterator<Item = NetId> + '_>;

    /// Returns the member nodes of a net.
    fn net_members(&self, net: NetId) -> Result<&[NodeId], NetlistError>;

    /// Returns the nets incident to a node.
    fn incident_nets(&self, node: NodeId) -> Result<&[NetId], NetlistError>;
}
