use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netlistx_core::rng::RngHandle;
use netlistx_core::WeightMap;
use netlistx_cover::{
    min_cycle_cover_with, min_hyper_vertex_cover, min_maximal_independent_set,
    min_maximal_matching, min_vertex_cover, min_vertex_cover_fast, PdConfig,
};
use netlistx_graph::{gen_random_graph, gen_random_netlist, gen_weights};

fn cover_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let graph = gen_random_graph(400, 0.02, &mut rng).unwrap();
    let weight = WeightMap::from_vec(gen_weights(400, 1, 50, &mut rng));
    let netlist = gen_random_netlist(1_000, 1_500, 5, &mut rng).unwrap();
    let module_weight = netlist.module_weights();
    let net_weight = WeightMap::from_vec(gen_weights(1_500, 1, 50, &mut rng));

    c.bench_function("min_vertex_cover_400", |b| {
        b.iter(|| {
            let mut cover = BTreeSet::new();
            black_box(min_vertex_cover(&graph, &weight, &mut cover).unwrap());
        });
    });

    c.bench_function("min_vertex_cover_fast_400", |b| {
        b.iter(|| {
            let mut cover = BTreeSet::new();
            black_box(min_vertex_cover_fast(&graph, &weight, &mut cover).unwrap());
        });
    });

    c.bench_function("min_cycle_cover_until_feasible_400", |b| {
        let config = PdConfig::until_feasible();
        b.iter(|| {
            let mut cover = BTreeSet::new();
            black_box(min_cycle_cover_with(&graph, &weight, &mut cover, &config).unwrap());
        });
    });

    c.bench_function("min_maximal_independent_set_400", |b| {
        b.iter(|| {
            let (mut indset, mut dep) = (BTreeSet::new(), BTreeSet::new());
            black_box(
                min_maximal_independent_set(&graph, &weight, &mut indset, &mut dep).unwrap(),
            );
        });
    });

    c.bench_function("min_hyper_vertex_cover_1500", |b| {
        b.iter(|| {
            let mut cover = BTreeSet::new();
            black_box(min_hyper_vertex_cover(&netlist, &module_weight, &mut cover).unwrap());
        });
    });

    c.bench_function("min_maximal_matching_1500", |b| {
        b.iter(|| {
            let (mut matchset, mut dep) = (BTreeSet::new(), BTreeSet::new());
            black_box(
                min_maximal_matching(&netlist, &net_weight, &mut matchset, &mut dep).unwrap(),
            );
        });
    });
}

criterion_group!(benches, cover_bench);
criterion_main!(benches);
