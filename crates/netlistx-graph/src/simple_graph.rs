use std::collections::BTreeSet;

use netlistx_core::{Graph, Handle, NetlistError, NodeId};

use crate::ids::{check_node, edge_key, unknown_node};

/// Undirected simple graph backed by adjacency lists.
///
/// Edges are kept in insertion order; that order drives every single-pass
/// solver run over the graph.
#[derive(Debug, Clone, Default)]
pub struct SimpleGraph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
    keys: BTreeSet<(NodeId, NodeId)>,
}

impl SimpleGraph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            keys: BTreeSet::new(),
        }
    }

    /// Creates a graph from raw endpoint pairs.
    pub fn from_edges(node_count: usize, edges: &[(u64, u64)]) -> Result<Self, NetlistError> {
        let mut graph = Self::new(node_count);
        for &(u, v) in edges {
            graph.add_edge(NodeId::from_raw(u), NodeId::from_raw(v))?;
        }
        Ok(graph)
    }

    /// Appends a new isolated node.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.adjacency.len());
        self.adjacency.push(Vec::new());
        id
    }

    /// Connects `u` and `v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<(), NetlistError> {
        check_node(u, self.adjacency.len())?;
        check_node(v, self.adjacency.len())?;
        if u == v {
            return Err(NetlistError::graph("self-loop", "edges must join two distinct nodes")
                .with_context("node", u.as_raw()));
        }
        if !self.keys.insert(edge_key(u, v)) {
            return Err(NetlistError::graph("duplicate-edge", "edge already exists")
                .with_context("u", u.as_raw())
                .with_context("v", v.as_raw()));
        }
        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
        self.edges.push((u, v));
        Ok(())
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.keys.contains(&edge_key(u, v))
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: NodeId) -> Result<usize, NetlistError> {
        Ok(self.neighbors(node)?.len())
    }
}

impl Graph for SimpleGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new((0..self.adjacency.len()).map(NodeId::from_index))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (NodeId, NodeId)> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], NetlistError> {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_node(node))
    }
}
