//! End-to-end analysis runs on a small synthetic waveform bank.

use approx::assert_relative_eq;
use waveclust::analysis::{analyze, AnalysisConfig};
use waveclust::core::SegmentSet;
use waveclust::distance::Metric;
use waveclust::transform::standardize_segments;

const SAMPLES: usize = 120;

/// Six hand-picked waveforms: a sine, a phase-shifted copy, a faster
/// sine, a scaled-and-offset copy, a flat line, and the sine with a
/// spike added over samples 40..60.
fn toy_waveforms() -> SegmentSet {
    let t: Vec<f64> = (0..SAMPLES)
        .map(|i| 2.0 * std::f64::consts::PI * i as f64 / (SAMPLES - 1) as f64)
        .collect();

    let s1: Vec<f64> = t.iter().map(|&x| x.sin()).collect();
    let s2: Vec<f64> = t.iter().map(|&x| (x + 0.2).sin()).collect();
    let s3: Vec<f64> = t.iter().map(|&x| (2.0 * x).sin()).collect();
    let s4: Vec<f64> = t.iter().map(|&x| 0.5 * x.sin() + 0.3).collect();
    let s5 = vec![0.0; SAMPLES];
    let mut s6 = s1.clone();
    for x in &mut s6[40..60] {
        *x += 1.0;
    }

    SegmentSet::new(vec![s1, s2, s3, s4, s5, s6]).unwrap()
}

#[test]
fn correlation_analysis_of_the_toy_bank() {
    let set = standardize_segments(&toy_waveforms());
    let config = AnalysisConfig::default().metric("corr").seed(42);

    let report = analyze(&set, &config).unwrap();

    // Six segments sit below the default size ceiling: one cluster
    assert_eq!(report.cluster_sizes(), vec![6]);
    assert_eq!(report.reports.len(), 1);
    assert_eq!(report.activity.len(), 6);
    assert_eq!(report.metric, Metric::Correlation);

    // The scaled-and-offset copy correlates perfectly with the original
    assert_eq!(report.closest_pair_segments(0), Some((0, 3)));
    assert!(report.reports[0].closest_pair.distance.abs() < 1e-9);

    let stats = report.reports[0].cohesion;
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    // The flat segment keeps the spread wide
    assert!(stats.max >= 1.0 - 1e-9);
}

#[test]
fn dtw_analysis_agrees_on_the_closest_pair() {
    let set = standardize_segments(&toy_waveforms());
    let config = AnalysisConfig::default().metric("dtw").seed(42);

    let report = analyze(&set, &config).unwrap();

    // 10% of 120 samples
    assert_eq!(report.metric, Metric::BoundedDtw { window: 12 });
    assert_eq!(report.cluster_sizes(), vec![6]);
    assert_eq!(report.closest_pair_segments(0), Some((0, 3)));
}

#[test]
fn unrecognized_metric_name_runs_as_correlation() {
    let set = standardize_segments(&toy_waveforms());
    let config = AnalysisConfig::default().metric("mystery").seed(42);

    let report = analyze(&set, &config).unwrap();
    assert_eq!(report.metric, Metric::Correlation);
    assert_eq!(report.cluster_sizes(), vec![6]);
}

#[test]
fn spike_segment_activity_covers_the_jump() {
    let set = toy_waveforms();
    let report = analyze(&set, &AnalysisConfig::default().seed(42)).unwrap();

    // Segment 5 rises from the baseline at sample 0 to the top of the
    // spike at sample 40; the best difference run spans exactly that
    let spike = report.activity[5];
    assert_eq!(spike.start, 0);
    assert_eq!(spike.end, 39);
    assert_eq!(spike.segment_range(), 0..40);

    let t40 = 2.0 * std::f64::consts::PI * 40.0 / (SAMPLES - 1) as f64;
    assert_relative_eq!(spike.sum, t40.sin() + 1.0, epsilon = 1e-9);
}

#[test]
fn tight_limits_split_the_bank() {
    let set = standardize_segments(&toy_waveforms());
    let config = AnalysisConfig::default()
        .metric("corr")
        .max_cluster_size(2)
        .min_cluster_size(1)
        .seed(7);

    let report = analyze(&set, &config).unwrap();

    assert!(report.clusters.len() >= 2);
    let total: usize = report.cluster_sizes().iter().sum();
    assert_eq!(total, 6);

    // Reports stay aligned with their clusters
    assert_eq!(report.reports.len(), report.clusters.len());
    for (cluster, cluster_report) in report.clusters.iter().zip(report.reports.iter()) {
        if cluster.len() < 2 {
            assert!(!cluster_report.closest_pair.is_valid());
            assert_eq!(cluster_report.cohesion.mean, 0.0);
        } else {
            assert!(cluster_report.closest_pair.is_valid());
        }
    }
}
