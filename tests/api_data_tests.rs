use plotxy::PlotError;
use plotxy::api::{PlotEngine, PlotEngineConfig};
use plotxy::core::AxisRange;
use plotxy::render::NullRenderer;

fn engine() -> PlotEngine<NullRenderer> {
    PlotEngine::new(NullRenderer::default(), PlotEngineConfig::default()).expect("engine init")
}

#[test]
fn mismatched_lengths_are_rejected() {
    let mut engine = engine();
    let err = engine
        .add_curve("bad", vec![1.0, 2.0, 3.0], vec![1.0, 2.0])
        .expect_err("length mismatch");
    assert!(matches!(
        err,
        PlotError::CurveLengthMismatch {
            x_len: 3,
            y_len: 2,
            ..
        }
    ));
    assert_eq!(engine.curve_count(), 0);
}

#[test]
fn non_finite_samples_are_rejected() {
    let mut engine = engine();
    let err = engine
        .add_curve("nan", vec![1.0, f64::NAN], vec![1.0, 2.0])
        .expect_err("nan sample");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn duplicate_and_unknown_names_are_reported() {
    let mut engine = engine();
    engine
        .add_curve("a", vec![0.0, 1.0], vec![0.0, 1.0])
        .expect("add");

    let err = engine
        .add_curve("a", vec![0.0, 1.0], vec![0.0, 1.0])
        .expect_err("duplicate");
    assert!(matches!(err, PlotError::DuplicateCurve(name) if name == "a"));

    let err = engine
        .change_curve("missing", vec![0.0], vec![0.0])
        .expect_err("unknown");
    assert!(matches!(err, PlotError::UnknownCurve(name) if name == "missing"));
}

#[test]
fn curve_names_keep_insertion_order() {
    let mut engine = engine();
    for name in ["zeta", "alpha", "mid"] {
        engine
            .add_curve(name, vec![0.0, 1.0], vec![0.0, 1.0])
            .expect("add");
    }
    let names: Vec<&str> = engine.curve_names().collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn changed_curve_drives_ranges_and_index() {
    let mut engine = engine();
    engine
        .add_curve("a", vec![0.0, 10.0], vec![0.0, 5.0])
        .expect("add");
    engine.refresh().expect("refresh");
    assert_eq!(engine.x_range(), AxisRange::new(0.0, 10.0));
    assert_eq!(engine.spatial_index().len(), 2);

    engine
        .change_curve("a", vec![-2.0, 0.0, 2.0], vec![1.0, 3.0, 2.0])
        .expect("change");
    assert_eq!(engine.curve("a").map(|curve| curve.len()), Some(3));
    engine.refresh().expect("refresh");
    assert_eq!(engine.x_range(), AxisRange::new(-2.0, 2.0));
    assert_eq!(engine.y_range(), AxisRange::new(1.0, 3.0));
    assert_eq!(engine.spatial_index().len(), 3);
}

#[test]
fn short_curves_do_not_affect_ranges() {
    let mut engine = engine();
    engine.add_curve("single", vec![7.0], vec![9.0]).expect("add");
    engine.add_curve("empty", Vec::new(), Vec::new()).expect("add");
    engine.refresh().expect("refresh");

    assert_eq!(engine.x_range(), AxisRange::new(0.0, 1.0));
    assert_eq!(engine.y_range(), AxisRange::new(0.0, 1.0));
    // (7, 9) projects far outside the unit plot and is not indexed.
    assert_eq!(engine.spatial_index().len(), 0);
}
