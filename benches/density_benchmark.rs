use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use latmap::latmap_histogram::generate;
use latmap::{DensityMatrix, HeatMapConfig, LatencyHeatMap, OrderedFloat};
use rand::prelude::*;
use rand_distr::LogNormal;
use tracing_subscriber::EnvFilter;

// 2024-03-01T10:00:00Z
const T0: i64 = 1_709_287_200_000;

/// Generate log-normal latencies spread over `span_ms`
fn generate_samples(size: usize, span_ms: i64, seed: u64) -> (Vec<f64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(2.0, 0.8).unwrap();
    let latencies = (0..size).map(|_| dist.sample(&mut rng)).collect();
    let timestamps = (0..size).map(|_| T0 + rng.gen_range(0..span_ms)).collect();
    (latencies, timestamps)
}

/// Route `RUST_LOG` output from the library crates to stderr
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn bench_accumulate(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("DensityMatrix::accumulate");
    let sizes = [1_000, 10_000, 100_000];
    let rows: Vec<OrderedFloat<f64>> = generate(0.0, 200.0, 40)
        .unwrap()
        .into_iter()
        .map(OrderedFloat)
        .collect();
    let columns: Vec<i64> = (0..72).map(|i| T0 + i * 5 * 60 * 1000).collect();

    for &size in &sizes {
        let (latencies, timestamps) = generate_samples(size, 6 * 60 * 60 * 1000, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(latencies, timestamps),
            |b, (latencies, timestamps)| {
                b.iter(|| {
                    let mut m = DensityMatrix::new(rows.iter().copied(), columns.iter().copied(), 0u64);
                    for (l, t) in latencies.iter().zip(timestamps) {
                        m.accumulate(&OrderedFloat(*l), t, |c| c + 1);
                    }
                    black_box(m.total())
                })
            },
        );
    }

    group.finish();
}

fn bench_heat_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("LatencyHeatMap::new");
    let config = HeatMapConfig::default();

    for &size in &[10_000, 100_000] {
        let (latencies, timestamps) = generate_samples(size, 6 * 60 * 60 * 1000, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(latencies, timestamps),
            |b, (latencies, timestamps)| {
                b.iter(|| LatencyHeatMap::new(black_box(latencies), black_box(timestamps), &config))
            },
        );
    }

    group.finish();
}

fn bench_nice_scale(c: &mut Criterion) {
    c.bench_function("generate(0.0012, 4870.5, 40)", |b| {
        b.iter(|| generate(black_box(0.0012), black_box(4870.5), black_box(40)))
    });
}

criterion_group!(benches, bench_accumulate, bench_heat_map, bench_nice_scale);
criterion_main!(benches);
