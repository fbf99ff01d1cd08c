//! Criterion benchmarks for u-autoconfig.
//!
//! Measures description parsing and component graph materialization on
//! synthetic component trees of increasing nesting depth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_autoconfig::algorithm::{
    register_algorithms, BoxedConstructive, BoxedImprover, Constructive, Improver, Solution,
};
use u_autoconfig::registry::{
    ComponentDescriptor, ComponentRegistry, ConstructorSpec, ParameterSpec,
};
use u_autoconfig::syntax::parse_description;
use u_autoconfig::Autoconfig;

// ===========================================================================
// Toy problem: a single score
// ===========================================================================

#[derive(Debug, Clone)]
struct Bench(f64);

impl Solution for Bench {
    fn score(&self) -> f64 {
        self.0
    }
}

#[derive(Debug)]
struct Greedy {
    alpha: f64,
}

impl Constructive<Bench> for Greedy {
    fn construct(&self, _solution: Bench) -> Bench {
        Bench(self.alpha)
    }
}

#[derive(Debug)]
struct Swap;

impl Improver<Bench> for Swap {
    fn improve(&self, solution: Bench) -> Bench {
        solution
    }
}

fn engine() -> Autoconfig {
    let mut registry = ComponentRegistry::new();
    register_algorithms::<Bench>(&mut registry).expect("register algorithms");
    registry
        .register(
            ComponentDescriptor::new::<Greedy>("GreedyConstructor").with_constructor(
                ConstructorSpec::new(
                    vec![ParameterSpec::double("alpha").with_bounds(0.0, 1.0)],
                    |args| {
                        Ok(Box::new(Greedy {
                            alpha: args.double("alpha")?,
                        }) as BoxedConstructive<Bench>)
                    },
                ),
            ),
        )
        .expect("register constructive");
    registry
        .register(
            ComponentDescriptor::new::<Swap>("SwapLS").with_constructor(ConstructorSpec::new(
                vec![],
                |_args| Ok(Box::new(Swap) as BoxedImprover<Bench>),
            )),
        )
        .expect("register improver");
    Autoconfig::new(registry)
}

/// `depth` levels of VND nested inside a simple algorithm.
fn description(depth: usize) -> String {
    let mut improver = "SwapLS()".to_string();
    for _ in 0..depth {
        improver = format!("VND(first={improver}, second=SwapLS(), maximize=false)");
    }
    format!(
        "MultiStart(iterations=10, algorithm=SimpleAlgorithm(\
         constructive=GreedyConstructor(alpha=0.5), improver={improver}))"
    )
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_description");

    for depth in [0usize, 4, 16] {
        let source = description(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, s| {
            b.iter(|| black_box(parse_description(black_box(s))))
        });
    }
    group.finish();
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");
    let engine = engine();

    for depth in [0usize, 4, 16] {
        let root = parse_description(&description(depth)).expect("valid description");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &root, |b, r| {
            b.iter(|| black_box(engine.parse(black_box(r))))
        });
    }
    group.finish();
}

fn bench_materialize_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize_many");
    group.sample_size(10);
    let engine = engine();
    let root = parse_description(&description(4)).expect("valid description");

    for count in [16usize, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| black_box(engine.materialize_many(black_box(&root), n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_materialize, bench_materialize_many);
criterion_main!(benches);
