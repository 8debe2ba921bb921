//! Waveform Analysis Example
//!
//! This example walks through the full waveclust toolkit: distance
//! metrics, recursive bisection clustering, cluster diagnostics, and
//! activity localization on synthetic physiological-style segments.
//!
//! Run with: cargo run --example waveform_analysis

use waveclust::activity::{active_window, max_subarray};
use waveclust::analysis::{analyze, AnalysisConfig};
use waveclust::clustering::{bisect, closest_pair, cohesion, BisectConfig};
use waveclust::core::SegmentSet;
use waveclust::distance::{corr_distance, dtw_distance, dtw_window, Metric};
use waveclust::transform::standardize_segments;

fn main() {
    println!("=== Waveform Analysis Example ===\n");

    // =========================================================================
    // Distance Metrics
    // =========================================================================
    println!("--- Distance Metrics ---\n");

    let base: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
    let scaled: Vec<f64> = base.iter().map(|v| 3.0 * v + 7.0).collect();
    let inverted: Vec<f64> = base.iter().map(|v| -v).collect();
    let flat = vec![5.0; 50];

    println!("Correlation distance (1 - Pearson r):");
    println!("  d(base, base)     = {:.4}", corr_distance(&base, &base));
    println!(
        "  d(base, 3x + 7)   = {:.4} (scale and offset invariant)",
        corr_distance(&base, &scaled)
    );
    println!(
        "  d(base, -base)    = {:.4} (perfect anti-correlation)",
        corr_distance(&base, &inverted)
    );
    println!(
        "  d(base, flat)     = {:.4} (one side constant)",
        corr_distance(&base, &flat)
    );

    // DTW tolerates time shifts that correlation punishes
    let bump_a = vec![0.0, 1.0, 3.0, 4.0, 3.0, 1.0, 0.0, 0.0, 0.0];
    let bump_b = vec![0.0, 0.0, 0.0, 1.0, 3.0, 4.0, 3.0, 1.0, 0.0];

    println!("\nBounded DTW on a time-shifted bump:");
    println!("  A: {:?}", bump_a);
    println!("  B: {:?}", bump_b);
    for window in [1, 3, bump_a.len()] {
        println!(
            "  dtw(A, B, window={}) = {:.4}",
            window,
            dtw_distance(&bump_a, &bump_b, window)
        );
    }
    println!("  Note: a wider band lets the alignment absorb the shift");

    println!(
        "\nDefault band width for 625-sample segments: {}",
        dtw_window(625, 0.1)
    );

    // =========================================================================
    // Recursive Bisection Clustering
    // =========================================================================
    println!("\n--- Recursive Bisection Clustering ---\n");

    // Three waveform families: slow sine, fast sine, rising ramp
    let mut rows = Vec::new();
    for k in 0..4 {
        rows.push(sine_segment(100, 50.0, k as f64 * 0.1));
    }
    for k in 0..4 {
        rows.push(sine_segment(100, 10.0, k as f64 * 0.1));
    }
    for k in 0..4 {
        rows.push((0..100).map(|i| i as f64 * (1.0 + k as f64 * 0.05)).collect());
    }

    let set = SegmentSet::new(rows).unwrap();
    let set = standardize_segments(&set);

    println!("Built 12 segments in 3 natural families:");
    println!("  Segments 0-3:  slow oscillation");
    println!("  Segments 4-7:  fast oscillation");
    println!("  Segments 8-11: rising ramp");

    let config = BisectConfig::default()
        .max_cluster_size(4)
        .min_cluster_size(2)
        .seed(42);

    let metric = Metric::Correlation;
    let clusters = bisect(&set, metric, &config);

    println!("\nBisection produced {} clusters:", clusters.len());
    for (idx, cluster) in clusters.iter().enumerate() {
        println!("  cluster {}: members {:?}", idx, cluster.indices());
    }

    // =========================================================================
    // Cluster Diagnostics
    // =========================================================================
    println!("\n--- Cluster Diagnostics ---\n");

    println!(
        "{:>4} {:>6} {:>12} {:>10} {:>10} {:>10}",
        "idx", "size", "closest", "mean", "min", "max"
    );
    println!("{:-<58}", "");
    for (idx, cluster) in clusters.iter().enumerate() {
        let pair = closest_pair(&set, cluster.indices(), metric);
        let stats = cohesion(&set, cluster.indices(), metric);
        let pair_label = if pair.is_valid() {
            format!("({},{})", cluster.indices()[pair.i], cluster.indices()[pair.j])
        } else {
            "-".to_string()
        };
        println!(
            "{:>4} {:>6} {:>12} {:>10.4} {:>10.4} {:>10.4}",
            idx,
            cluster.len(),
            pair_label,
            stats.mean,
            stats.min,
            stats.max
        );
    }
    println!("\nLow mean distance means a tight cluster.");

    // =========================================================================
    // Activity Localization
    // =========================================================================
    println!("\n--- Activity Localization ---\n");

    // Flat baseline, a rising edge, then a flat plateau
    let mut segment = vec![0.0; 30];
    segment.extend((1..=40).map(|i| i as f64 * 0.025));
    segment.extend(std::iter::repeat(1.0).take(30));

    let window = active_window(&segment).unwrap();
    println!("Segment: 30 flat, 40 rising, 30 flat samples");
    println!(
        "Active part: samples {:?} (cumulative rise {:.3})",
        window.segment_range(),
        window.sum
    );
    println!("The window locks onto the rising edge and skips both plateaus.");

    // The same scan works on any value sequence
    let values = vec![-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0];
    if let Some(best) = max_subarray(&values) {
        println!(
            "\nMax subarray of {:?}:\n  [{}..={}] with sum {:.1}",
            values, best.start, best.end, best.sum
        );
    }

    // =========================================================================
    // Full Pipeline: Correlation vs DTW
    // =========================================================================
    println!("\n--- Full Pipeline: Correlation vs DTW ---\n");

    let corr_config = AnalysisConfig::default()
        .metric("corr")
        .max_cluster_size(4)
        .min_cluster_size(2)
        .seed(7);
    let corr_report = analyze(&set, &corr_config).unwrap();

    let dtw_config = AnalysisConfig::default()
        .metric("dtw")
        .dtw_window_fraction(0.1)
        .max_cluster_size(4)
        .min_cluster_size(2)
        .seed(7);
    let dtw_report = analyze(&set, &dtw_config).unwrap();

    println!("Correlation metric: {:?}", corr_report.cluster_sizes());
    println!("Bounded DTW metric: {:?}", dtw_report.cluster_sizes());
    println!("\nBoth partitions cover all {} segments.", set.len());

    // =========================================================================
    // AnalysisConfig Options
    // =========================================================================
    println!("\n--- AnalysisConfig Options ---\n");

    println!("AnalysisConfig::default()");
    println!("  .metric(name)             - \"corr\" or \"dtw\" (unknown names fall back to corr)");
    println!("  .dtw_window_fraction(f)   - Sakoe-Chiba band as a fraction of segment length");
    println!("  .max_segments(n)          - Cap on how many segments are analyzed");
    println!("  .max_cluster_size(n)      - Clusters at or below this size stop splitting");
    println!("  .min_cluster_size(n)      - Clusters at or below this size stop splitting");
    println!("  .max_depth(n)             - Recursion depth limit");
    println!("  .seed(n)                  - Fixed seed for reproducible partitions");

    println!("\n=== Waveform Analysis Complete ===");
}

fn sine_segment(len: usize, period: f64, phase: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period + phase).sin())
        .collect()
}
