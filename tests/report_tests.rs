//! Report aggregation over synthetic traffic

use anyhow::Result;
use latmap::latmap_histogram::FloatHistogramBuilder;
use latmap::{HeatMapConfig, LatencyRecord, LatencyReport, ReportConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};

// 2024-03-01T10:00:00Z
const T0: i64 = 1_709_287_200_000;

fn synthetic_records(seed: u64) -> Vec<LatencyRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let events = [("fast", 1.0), ("medium", 2.5), ("slow", 4.0)];
    let mut records = Vec::new();
    for (name, mu) in events {
        let dist = LogNormal::new(mu, 0.3).unwrap();
        for _ in 0..2_000 {
            let t = T0 + rng.gen_range(0..3 * 60 * 60 * 1000);
            records.push(LatencyRecord::new(name, t, dist.sample(&mut rng)));
        }
    }
    records
}

#[test]
fn test_report_over_lognormal_traffic() -> Result<()> {
    let records = synthetic_records(42);
    let report = LatencyReport::build(&records, &ReportConfig::default())?;

    let names: Vec<&str> = report.events().iter().map(|e| e.event()).collect();
    assert_eq!(names, vec!["slow", "medium", "fast"]);

    let combined = report.combined();
    assert_eq!(combined.summary().count(), records.len());
    assert_eq!(combined.histogram().total_count(), records.len());
    assert_eq!(combined.heat_map().total(), records.len() as u64);
    // three hours is under the five hour cut-over
    assert_eq!(combined.heat_map().time_interval_ms(), 5 * 60 * 1000);

    for event in report.events() {
        let p = event.percentiles();
        assert_eq!(p.len(), 5);
        assert!(p.values().windows(2).all(|w| w[0] <= w[1]));
        assert!(event.summary().skewness() > 0.0);
        let colors = event.heat_map_colors()?;
        assert_eq!(colors.len(), event.heat_map().density().row_count());
    }
    Ok(())
}

#[test]
fn test_heat_map_respects_bucket_limit() -> Result<()> {
    let records = synthetic_records(7);
    let config = ReportConfig::default()
        .with_heat_map(HeatMapConfig::default().with_max_latency_buckets(8))
        .with_histogram_buckets(4);
    let report = LatencyReport::build(&records, &config)?;

    let combined = report.combined();
    // at most one extra boundary below min
    assert!(combined.heat_map().latency_split_points().len() <= 10);
    // nice split points plus the two unbounded edge bins
    assert!(combined.histogram().len() <= 4 + 3);
    Ok(())
}

#[test]
fn test_histogram_matches_direct_build() -> Result<()> {
    let records = synthetic_records(3);
    let report = LatencyReport::build(&records, &ReportConfig::default())?;
    let fast = report.event("fast").expect("fast event");

    let latencies: Vec<f64> = records
        .iter()
        .filter(|r| r.event == "fast")
        .map(|r| r.latency)
        .collect();
    let direct = latmap::latmap_histogram::NiceScaleHistogramBuilder::new(10).build_f64(&latencies)?;
    assert_eq!(fast.histogram().counts(), direct.counts());
    Ok(())
}
