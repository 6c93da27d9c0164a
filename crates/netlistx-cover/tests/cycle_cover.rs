use std::collections::BTreeSet;

use netlistx_core::{NetlistError, NodeId, WeightMap};
use netlistx_cover::{
    construct_cycle, find_cycle, min_cycle_cover, min_cycle_cover_with, min_odd_cycle_cover,
    min_odd_cycle_cover_with, BfsInfo, BfsTable, Certificate, PdConfig,
};
use netlistx_graph::{complete_graph, cycle_graph, path_graph, SimpleGraph};

fn n(i: u64) -> NodeId {
    NodeId::from_raw(i)
}

fn unit(len: usize) -> WeightMap<NodeId, u32> {
    WeightMap::uniform(len, 1)
}

fn two_triangles() -> SimpleGraph {
    SimpleGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap()
}

#[test]
fn triangle_witness_and_reconstruction() {
    let graph = complete_graph(3).unwrap();
    let witness = find_cycle(&graph, &BTreeSet::new()).unwrap().unwrap();
    assert_eq!((witness.parent, witness.child), (n(1), n(2)));
    assert_eq!(witness.info[&n(0)], BfsInfo { parent: n(0), depth: 3 });
    assert_eq!(witness.info[&n(2)].depth, 2);
    assert!(witness.is_odd().unwrap());
    assert_eq!(witness.cycle().unwrap(), vec![n(0), n(1), n(2)]);
}

#[test]
fn square_witness_is_even() {
    let graph = cycle_graph(4).unwrap();
    let witness = find_cycle(&graph, &BTreeSet::new()).unwrap().unwrap();
    assert!(!witness.is_odd().unwrap());
    assert_eq!(witness.cycle().unwrap(), vec![n(0), n(3), n(2), n(1)]);
}

#[test]
fn uneven_witnesses_rebuild_simple_cycles() {
    let hexagon = cycle_graph(6).unwrap();
    let witness = find_cycle(&hexagon, &BTreeSet::new()).unwrap().unwrap();
    let cycle = witness.cycle().unwrap();
    assert_eq!(cycle, vec![n(0), n(5), n(4), n(3), n(2), n(1)]);

    // square 0-1-2-3 with a pendant path hanging off node 2
    let graph =
        SimpleGraph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (4, 5)]).unwrap();
    let cycle = find_cycle(&graph, &BTreeSet::new()).unwrap().unwrap().cycle().unwrap();
    let distinct: BTreeSet<_> = cycle.iter().copied().collect();
    assert_eq!(distinct.len(), cycle.len());
    assert_eq!(distinct, BTreeSet::from([n(0), n(1), n(2), n(3)]));
}

#[test]
fn forests_and_covered_cycles_have_no_witness() {
    assert!(find_cycle(&path_graph(5).unwrap(), &BTreeSet::new()).unwrap().is_none());
    assert!(find_cycle(&SimpleGraph::new(0), &BTreeSet::new()).unwrap().is_none());
    let covered = BTreeSet::from([n(2)]);
    assert!(find_cycle(&complete_graph(3).unwrap(), &covered).unwrap().is_none());
}

#[test]
fn reconstruction_along_parent_chain() {
    let info: BfsTable = [(0, 0, 3), (1, 0, 2), (2, 1, 1), (3, 2, 0)]
        .into_iter()
        .map(|(node, parent, depth)| {
            (
                n(node),
                BfsInfo {
                    parent: n(parent),
                    depth,
                },
            )
        })
        .collect();
    let cycle = construct_cycle(&info, n(1), n(3)).unwrap();
    assert!(cycle.len() >= 2);
    assert_eq!(cycle, vec![n(1), n(3), n(2)]);
}

#[test]
fn reconstruction_requires_records() {
    let err = construct_cycle(&BfsTable::new(), n(0), n(1)).unwrap_err();
    assert!(matches!(err, NetlistError::Cycle(ref info) if info.code == "missing-bfs-info"));
}

#[test]
fn triangle_cycle_covers() {
    let graph = complete_graph(3).unwrap();

    let mut cover = BTreeSet::new();
    let cert = min_cycle_cover(&graph, &unit(3), &mut cover).unwrap();
    assert_eq!(cover, BTreeSet::from([n(0)]));
    assert_eq!(cert, Certificate { primal: 1, dual: 1 });

    let mut cover = BTreeSet::new();
    let cert = min_odd_cycle_cover(&graph, &unit(3), &mut cover).unwrap();
    assert_eq!(cover.len(), 1);
    assert!(cert.primal >= 1);
}

#[test]
fn odd_cover_ignores_even_witness() {
    let graph = cycle_graph(4).unwrap();
    let mut cover = BTreeSet::new();
    let cert = min_odd_cycle_cover(&graph, &unit(4), &mut cover).unwrap();
    assert!(cover.is_empty());
    assert_eq!(cert, Certificate::zero());

    let cert = min_cycle_cover(&graph, &unit(4), &mut cover).unwrap();
    assert_eq!(cover, BTreeSet::from([n(0)]));
    assert_eq!(cert.primal, 1);
}

#[test]
fn single_call_resolves_one_witness() {
    let graph = two_triangles();
    let mut cover = BTreeSet::new();
    min_cycle_cover(&graph, &unit(6), &mut cover).unwrap();
    assert_eq!(cover, BTreeSet::from([n(0)]));

    // calling again picks up the next cycle
    min_cycle_cover(&graph, &unit(6), &mut cover).unwrap();
    assert_eq!(cover, BTreeSet::from([n(0), n(3)]));
    assert!(find_cycle(&graph, &cover).unwrap().is_none());
}

#[test]
fn until_feasible_breaks_every_cycle() {
    let graph = two_triangles();
    let config = PdConfig::until_feasible();

    let mut cover = BTreeSet::new();
    let cert = min_cycle_cover_with(&graph, &unit(6), &mut cover, &config).unwrap();
    assert_eq!(cover, BTreeSet::from([n(0), n(3)]));
    assert_eq!(cert, Certificate { primal: 2, dual: 2 });

    let mut cover = BTreeSet::new();
    min_odd_cycle_cover_with(&complete_graph(5).unwrap(), &unit(5), &mut cover, &config).unwrap();
    let witness = find_cycle(&complete_graph(5).unwrap(), &cover).unwrap();
    assert!(witness.map_or(true, |w| !w.is_odd().unwrap()));
}

#[test]
fn empty_graph_cycle_covers_cost_nothing() {
    let graph = SimpleGraph::new(0);
    let mut cover = BTreeSet::new();
    assert_eq!(
        min_cycle_cover(&graph, &unit(0), &mut cover).unwrap(),
        Certificate::zero()
    );
    assert_eq!(
        min_odd_cycle_cover(&graph, &unit(0), &mut cover).unwrap(),
        Certificate::zero()
    );
    assert!(cover.is_empty());
}
