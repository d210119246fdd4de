//! End-to-end tests for batch analysis, configuration and JSON export.

use netmetrics::export::{to_json_string, write_json, write_json_report};
use netmetrics::{
    run_analysis, AnalysisConfig, Directedness, GroupInfo, MemoryGraph, ProgressLog, SpanRange,
    VertexId,
};
use pretty_assertions::assert_eq;

/// Directed graph with a reciprocated pair, a duplicate edge, a self-loop, a
/// fan and a two-connector, split into two groups.
fn sample() -> MemoryGraph {
    let mut g = MemoryGraph::directed();
    for i in 1..=10 {
        g.add_named_vertex(format!("v{i}")).unwrap();
    }
    for (a, b) in [
        // fan: head 1, leaves 2 and 3
        (1, 2),
        (1, 3),
        // two-connector: anchors 4, 5 over span 6, 7
        (4, 6),
        (4, 7),
        (5, 6),
        (5, 7),
        // reciprocated pair plus a duplicate and a self-loop
        (8, 9),
        (9, 8),
        (8, 9),
        (10, 10),
    ] {
        g.add_edge(VertexId(a), VertexId(b)).unwrap();
    }
    g.set_groups(vec![
        GroupInfo::new("motifs").with_vertices((1..=7).map(VertexId)),
        GroupInfo::new("empty"),
        GroupInfo::new("rest").with_vertices((8..=10).map(VertexId)),
    ])
    .unwrap();
    g
}

// ============================================================================
// 1. Full analysis
// ============================================================================

#[test]
fn test_full_analysis() {
    let g = sample();
    let report = run_analysis(&g, &AnalysisConfig::default(), None).unwrap().unwrap();

    assert_eq!(report.directedness, Directedness::Directed);
    assert_eq!(report.vertices, 10);
    assert_eq!(report.edges, 10);

    let duplicates = report.duplicate_edges.unwrap();
    assert_eq!(duplicates.unique_edges, 7);
    assert_eq!(duplicates.edges_with_duplicates, 3);

    let overall = report.overall_metrics.as_ref().unwrap();
    assert_eq!(overall.self_loops, 1);
    assert_eq!(overall.unique_edges, 8);
    assert_eq!(overall.edges_with_duplicates, 2);
    assert_eq!(overall.components.connected_components, 4);

    let groups = report.group_metrics.as_ref().unwrap();
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(groups[&0].vertices, 7);
    assert_eq!(groups[&1].vertices, 3);
    assert_eq!(groups[&1].reciprocated_vertex_pair_ratio, Some(1.0));

    let dconnectors = report.dconnector_motifs.as_ref().unwrap();
    assert_eq!(dconnectors.len(), 1);
    assert_eq!(report.fans().count(), 1);
}

// ============================================================================
// 2. Configuration from JSON
// ============================================================================

#[test]
fn test_config_from_json_limits_work() {
    let g = sample();
    let config = AnalysisConfig::from_json_str(
        r#"{
            "edge_reciprocation": false,
            "vertex_reciprocation": false,
            "group_metrics": false,
            "fan_motifs": false,
            "dconnector_motifs": { "min": 3, "max": 5 }
        }"#,
    )
    .unwrap();

    let report = run_analysis(&g, &config, None).unwrap().unwrap();
    assert!(report.edge_reciprocation.is_none());
    assert!(report.group_metrics.is_none());
    assert!(report.fan_motifs.is_none());
    assert_eq!(report.dconnector_motifs, Some(Vec::new()));
}

#[test]
fn test_invalid_range_rejected_before_running() {
    let g = sample();
    let log = ProgressLog::new();
    let config = AnalysisConfig {
        dconnector_motifs: Some(SpanRange { min: 4, max: 2 }),
        ..AnalysisConfig::default()
    };
    assert!(run_analysis(&g, &config, Some(&log)).is_err());
    assert!(log.is_empty());
}

// ============================================================================
// 3. Cancellation
// ============================================================================

#[test]
fn test_cancelled_analysis_has_no_report() {
    let g = sample();
    let log = ProgressLog::cancel_after_reports(3);
    assert!(run_analysis(&g, &AnalysisConfig::default(), Some(&log)).unwrap().is_none());
}

// ============================================================================
// 4. JSON export
// ============================================================================

#[test]
fn test_export_json() {
    let g = sample();
    let report = run_analysis(&g, &AnalysisConfig::default(), None).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();

    assert_eq!(json["vertices"], 10);
    assert_eq!(json["duplicate_edges"]["edges_with_duplicates"], 3);
    assert_eq!(json["overall_metrics"]["connected_components"], 4);
    assert_eq!(json["group_metrics"]["1"]["vertices"], 3);
    assert_eq!(json["dconnector_motifs"][0]["kind"], "d_connector");
    assert_eq!(json["dconnector_motifs"][0]["anchor_vertices"], serde_json::json!([4, 5]));
    assert_eq!(json["fan_motifs"][0]["kind"], "fan");
    assert_eq!(json["fan_motifs"][0]["head_vertex"], 1);
}

#[test]
fn test_write_report_and_motifs() {
    let g = sample();
    let report = run_analysis(&g, &AnalysisConfig::default(), None).unwrap().unwrap();

    let mut out = Vec::new();
    write_json_report(&report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with('{'));
    assert!(text.ends_with("}\n"));

    let mut motifs_out = Vec::new();
    write_json(report.fan_motifs.as_deref().unwrap_or_default(), &mut motifs_out).unwrap();
    let motifs: serde_json::Value = serde_json::from_slice(&motifs_out).unwrap();
    assert_eq!(motifs.as_array().map(Vec::len), Some(1));
}
