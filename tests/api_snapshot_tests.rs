use plotxy::PlotError;
use plotxy::api::{AxisFix, PlotEngine, PlotEngineConfig, PlotSnapshot};
use plotxy::core::{BinSearch, CanvasSize};
use plotxy::render::NullRenderer;

#[test]
fn plot_engine_config_json_roundtrip() {
    let config = PlotEngineConfig::new(CanvasSize::new(1024, 768))
        .with_labels("Response", "time", "value")
        .with_tick_counts(8, 6)
        .with_bin_search(BinSearch::Neighborhood)
        .with_axis_fix(AxisFix::y(Some(-1.5), Some(2.25)))
        .with_equal_scale(true);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = PlotEngineConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn partial_config_json_takes_defaults() {
    let config = PlotEngineConfig::from_json_str(r#"{ "bottom_tick_count": 4, "title": "T" }"#)
        .expect("partial config");

    assert_eq!(config.bottom_tick_count, 4);
    assert_eq!(config.title, "T");
    assert_eq!(config.left_tick_count, 10);
    assert_eq!(config.layout.canvas, CanvasSize::new(600, 400));
    assert_eq!(config.snap_radius_px, 10.0);
    assert!(config.tracking);
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = PlotEngineConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn snapshot_captures_scale_ticks_curves_and_hover() {
    let mut engine = PlotEngine::new(NullRenderer::default(), PlotEngineConfig::default())
        .expect("engine init");
    engine
        .add_curve("b", vec![0.0, 5.0, 10.0], vec![0.0, 2.5, 5.0])
        .expect("add");
    engine.add_curve("a", vec![3.0], vec![1.0]).expect("add");
    engine.refresh().expect("refresh");
    engine.pointer_move(320.0, 186.0).expect("move");

    let snapshot = engine.snapshot();
    let names: Vec<&str> = snapshot.curves.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(snapshot.curves["b"].samples, 3);
    assert!(snapshot.curves["b"].contributes_to_range);
    assert!(!snapshot.curves["a"].contributes_to_range);
    assert_eq!(snapshot.bin_counts, (9, 5));
    assert_eq!(snapshot.indexed_points, 4);
    assert_eq!(snapshot.bottom_ticks.len(), 11);
    assert_eq!(snapshot.x_range.max, 10.0);
    assert_eq!(
        snapshot.hover.snap.as_ref().map(|snap| snap.curve.as_str()),
        Some("b")
    );

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"bottom_ticks\""));
    let parsed: PlotSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed.curves.len(), 2);
    assert_eq!(parsed.bin_counts, snapshot.bin_counts);
    assert_eq!(parsed.hover.snap.map(|snap| snap.point_index), Some(1));
}
