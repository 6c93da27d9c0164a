#![deny(missing_docs)]

//! Primal-dual approximation solvers over the `netlistx-core` graph and
//! hypergraph capabilities.
//!
//! Every solver takes a caller-owned solution set that may be pre-seeded,
//! extends it in place and returns a [`Certificate`] with the primal cost of
//! the selection and the dual value raised to pay for it.

mod config;
mod cycle;
mod engine;
mod independent;
mod matching;
mod vertex_cover;

pub use config::PdConfig;
pub use cycle::{
    construct_cycle, find_cycle, min_cycle_cover, min_cycle_cover_with, min_odd_cycle_cover,
    min_odd_cycle_cover_with, BfsInfo, BfsTable, CycleParity, CycleViolations, CycleWitness,
};
pub use engine::{pd_cover, pd_cover_with, Certificate, Solution, ViolationSource};
pub use independent::min_maximal_independent_set;
pub use matching::min_maximal_matching;
pub use vertex_cover::{
    min_hyper_vertex_cover, min_hyper_vertex_cover_fast, min_vertex_cover, min_vertex_cover_fast,
    EdgeViolations, NetViolations,
};
