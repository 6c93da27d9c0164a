#![deny(missing_docs)]

//! Concrete graph and netlist containers implementing the `netlistx-core`
//! capability traits, plus deterministic generators for tests and benches.

mod flags;
mod generators;
mod ids;
mod netlist;
mod simple_graph;

pub use flags::NetlistConfig;
pub use generators::{
    complete_graph, cycle_graph, gen_random_graph, gen_random_netlist, gen_weights, path_graph,
};
pub use netlist::Netlist;
pub use simple_graph::SimpleGraph;
