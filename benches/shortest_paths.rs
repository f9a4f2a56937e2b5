use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphalgo::{algorithm::*, graph::*};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("2000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("20000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, dijkstra, prim, kruskal);
criterion_main!(benches);

fn random_graph(vertex_size: usize, edge_size: usize, undirected: bool) -> WeightedGraph<usize, u64> {
    let mut rng = rand::thread_rng();
    let mut g = WeightedGraph::new();
    for v in 0..vertex_size {
        g.add_vertex(v);
    }
    for _ in 0..edge_size {
        let u = rng.gen::<usize>() % vertex_size;
        let v = rng.gen::<usize>() % vertex_size;
        let w = rng.gen_range(1..1000);
        if undirected {
            g.add_undirected_edge(u, v, w);
        } else {
            g.add_edge(u, v, w);
        }
    }
    g
}

fn dijkstra(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let g = random_graph(vertex_size, edge_size, false);
    let source = VertexId::new(0);
    c.bench_function("dijkstra/array_scan", |b| {
        b.iter(|| black_box(g.dijkstra(&source)))
    });
    c.bench_function("dijkstra/heap", |b| {
        b.iter(|| black_box(g.dijkstra_heap(&source)))
    });
    c.bench_function("bellman_ford", |b| {
        b.iter(|| black_box(g.bellman_ford(&source)))
    });
}

fn prim(c: &mut Criterion) {
    let g = random_graph(*VERTEX_SIZE, *EDGE_SIZE, true);
    c.bench_function("prim/array_scan", |b| b.iter(|| black_box(g.prim())));
    c.bench_function("prim/heap", |b| b.iter(|| black_box(g.prim_heap())));
}

fn kruskal(c: &mut Criterion) {
    let g = random_graph(*VERTEX_SIZE, *EDGE_SIZE, true);
    c.bench_function("kruskal", |b| b.iter(|| black_box(g.kruskal())));
}
