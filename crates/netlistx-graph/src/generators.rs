use netlistx_core::rng::RngHandle;
use netlistx_core::{NetlistError, NodeId};
use rand::seq::SliceRandom;

use crate::netlist::Netlist;
use crate::simple_graph::SimpleGraph;

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> Result<SimpleGraph, NetlistError> {
    let mut graph = SimpleGraph::new(n);
    for i in 1..n as u64 {
        graph.add_edge(NodeId::from_raw(i - 1), NodeId::from_raw(i))?;
    }
    Ok(graph)
}

/// Cycle on `n` nodes; fewer than three nodes yields a path.
pub fn cycle_graph(n: usize) -> Result<SimpleGraph, NetlistError> {
    let mut graph = path_graph(n)?;
    if n >= 3 {
        graph.add_edge(NodeId::from_raw(n as u64 - 1), NodeId::from_raw(0))?;
    }
    Ok(graph)
}

/// Complete graph on `n` nodes.
pub fn complete_graph(n: usize) -> Result<SimpleGraph, NetlistError> {
    let mut graph = SimpleGraph::new(n);
    for u in 0..n as u64 {
        for v in (u + 1)..n as u64 {
            graph.add_edge(NodeId::from_raw(u), NodeId::from_raw(v))?;
        }
    }
    Ok(graph)
}

/// Erdős–Rényi style graph: each pair is joined with probability `edge_prob`.
pub fn gen_random_graph(
    n: usize,
    edge_prob: f64,
    rng: &mut RngHandle,
) -> Result<SimpleGraph, NetlistError> {
    let mut graph = SimpleGraph::new(n);
    for u in 0..n as u64 {
        for v in (u + 1)..n as u64 {
            if rng.chance(edge_prob) {
                graph.add_edge(NodeId::from_raw(u), NodeId::from_raw(v))?;
            }
        }
    }
    Ok(graph)
}

/// Random netlist with `num_nets` nets of `2..=max_pins` distinct modules each.
pub fn gen_random_netlist(
    num_modules: usize,
    num_nets: usize,
    max_pins: usize,
    rng: &mut RngHandle,
) -> Result<Netlist, NetlistError> {
    if num_modules == 0 && num_nets > 0 {
        return Err(NetlistError::config(
            "empty-netlist",
            "random nets require at least one module",
        ));
    }
    let mut netlist = Netlist::with_modules(num_modules);
    let modules: Vec<NodeId> = (0..num_modules as u64).map(NodeId::from_raw).collect();
    let upper = max_pins.clamp(1, num_modules.max(1));
    let lower = 2.min(upper);
    for _ in 0..num_nets {
        let pins = lower + rng.below(upper - lower + 1);
        netlist.add_net(&sample_subset(&modules, pins, rng))?;
    }
    Ok(netlist)
}

/// Random weights in `low..=high`, one per handle.
pub fn gen_weights(len: usize, low: u32, high: u32, rng: &mut RngHandle) -> Vec<u32> {
    (0..len).map(|_| rng.weight_in(low, high)).collect()
}

fn sample_subset(nodes: &[NodeId], count: usize, rng: &mut RngHandle) -> Vec<NodeId> {
    let mut buffer: Vec<NodeId> = nodes.to_vec();
    buffer.shuffle(rng);
    buffer.truncate(count.min(buffer.len()));
    buffer.sort();
    buffer
}
