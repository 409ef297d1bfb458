//! Builds a heat map from two hours of synthetic request latencies
//!
//! Run with `RUST_LOG=debug` to see the chosen axes.

use latmap_density::{time_axis::MINUTE_MS, HeatMapConfig, LatencyHeatMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};
use tracing_subscriber::EnvFilter;

fn main() -> latmap_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let fast = LogNormal::new(1.5, 0.4).unwrap();
    let slow = LogNormal::new(3.5, 0.3).unwrap();

    // 2024-03-01T10:00:00Z
    let start = 1_709_287_200_000i64;
    let span = 120 * MINUTE_MS;

    let mut latencies = Vec::new();
    let mut timestamps = Vec::new();
    for _ in 0..20_000 {
        let t = start + rng.gen_range(0..span);
        // A slow episode between minutes 40 and 55
        let degraded = (40 * MINUTE_MS..55 * MINUTE_MS).contains(&(t - start));
        let latency = if degraded && rng.gen_bool(0.6) {
            slow.sample(&mut rng)
        } else {
            fast.sample(&mut rng)
        };
        latencies.push(latency);
        timestamps.push(t);
    }

    let config = HeatMapConfig::default()
        .with_max_latency_buckets(12)
        .with_latency_range(0.0, 60.0);
    let heat_map = LatencyHeatMap::new(&latencies, &timestamps, &config)?;

    println!("=== Latency heat map ===");
    println!(
        "{} samples, {} latency rows, {} time columns of {} minutes",
        heat_map.total(),
        heat_map.density().row_count(),
        heat_map.density().column_count(),
        heat_map.time_interval_ms() / MINUTE_MS
    );

    let labels = heat_map.time_labels()?;
    println!("\nColumns start at {}", labels.first().map(String::as_str).unwrap_or("-"));
    println!("Requests per column: {:?}", heat_map.column_totals());

    println!("\nBusiest cell: {} requests", heat_map.max_count());
    for (bounds, row) in heat_map
        .density()
        .row_boundaries()
        .windows(2)
        .zip(heat_map.density().rows())
        .rev()
    {
        let line: String = row
            .iter()
            .map(|&count| match count {
                0 => ' ',
                1..=20 => '.',
                21..=100 => 'o',
                _ => '#',
            })
            .collect();
        println!("{:>6} |{}|", bounds[1].to_string(), line);
    }

    Ok(())
}
