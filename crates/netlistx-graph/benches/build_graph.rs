use netlistx_core::rng::RngHandle;
use netlistx_graph::{gen_random_graph, gen_random_netlist};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("gen_random_graph_500", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(7);
            black_box(gen_random_graph(500, 0.02, &mut rng).unwrap());
        });
    });

    c.bench_function("gen_random_netlist_2000", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(7);
            black_box(gen_random_netlist(2_000, 3_000, 5, &mut rng).unwrap());
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
