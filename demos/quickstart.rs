//! Quickstart example demonstrating basic usage of waveclust.
//!
//! Run with: cargo run --example quickstart

use waveclust::analysis::{analyze, AnalysisConfig};
use waveclust::core::SegmentSet;
use waveclust::transform::standardize_segments;

fn main() {
    println!("=== waveclust Quickstart ===\n");

    // 1. Build a bank of synthetic waveform segments
    //    Segments 0-7 oscillate slowly, segments 8-15 oscillate fast.
    let rows: Vec<Vec<f64>> = (0..16)
        .map(|k| {
            let period = if k < 8 { 40.0 } else { 12.0 };
            let phase = (k % 8) as f64 * 0.2; // small phase jitter within each family
            (0..120)
                .map(|i| {
                    let t = 2.0 * std::f64::consts::PI * i as f64 / period;
                    (t + phase).sin()
                })
                .collect()
        })
        .collect();

    let set = SegmentSet::new(rows).unwrap();
    println!(
        "Created {} segments with {} samples each",
        set.len(),
        set.segment_len()
    );

    // 2. Standardize each segment to zero mean and unit variance
    let set = standardize_segments(&set);

    // 3. Cluster by recursive bisection with the correlation metric
    let config = AnalysisConfig::default()
        .metric("corr")
        .max_cluster_size(4)
        .min_cluster_size(2)
        .seed(42);

    let report = analyze(&set, &config).unwrap();
    println!(
        "\nClustered into {} groups: {:?}",
        report.clusters.len(),
        report.cluster_sizes()
    );

    // 4. Per-cluster cohesion diagnostics
    println!("\n{:>4} {:>6} {:>10} {:>10} {:>10}", "idx", "size", "mean", "min", "max");
    println!("{:-<44}", "");
    for (idx, cluster) in report.clusters.iter().enumerate() {
        let stats = report.reports[idx].cohesion;
        println!(
            "{:>4} {:>6} {:>10.4} {:>10.4} {:>10.4}",
            idx,
            cluster.len(),
            stats.mean,
            stats.min,
            stats.max
        );
    }

    // 5. Closest pair of segments inside each cluster
    println!("\nClosest pairs:");
    for idx in 0..report.clusters.len() {
        match report.closest_pair_segments(idx) {
            Some((a, b)) => println!(
                "  cluster {}: segments {} and {} (distance {:.4})",
                idx, a, b, report.reports[idx].closest_pair.distance
            ),
            None => println!("  cluster {}: fewer than two members", idx),
        }
    }

    // 6. Where is each segment most active?
    println!("\nActivity windows (first 4 segments):");
    for (i, window) in report.activity.iter().take(4).enumerate() {
        println!(
            "  segment {}: samples {:?}, cumulative rise {:.3}",
            i,
            window.segment_range(),
            window.sum
        );
    }

    println!("\n=== Quickstart Complete ===");
}
