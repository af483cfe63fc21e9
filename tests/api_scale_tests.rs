use approx::assert_relative_eq;
use plotxy::PlotError;
use plotxy::api::{AxisFix, PlotEngine, PlotEngineConfig};
use plotxy::core::{AxisRange, CanvasSize, ScreenRect};
use plotxy::render::NullRenderer;

fn engine_with_curve(xs: Vec<f64>, ys: Vec<f64>) -> PlotEngine<NullRenderer> {
    let mut engine = PlotEngine::new(NullRenderer::default(), PlotEngineConfig::default())
        .expect("engine init");
    engine.add_curve("a", xs, ys).expect("add curve");
    engine.refresh().expect("refresh");
    engine
}

#[test]
fn constant_data_is_widened_with_three_target_ticks() {
    let engine = engine_with_curve(vec![2.0, 2.0], vec![3.0, 3.0]);
    assert_eq!(engine.x_range(), AxisRange::new(1.0, 3.0));
    assert_eq!(engine.y_range(), AxisRange::new(2.0, 4.0));
    assert_eq!(engine.bottom_ticks(), &[1.0, 1.5, 2.0, 2.5, 3.0]);
    assert_eq!(engine.left_ticks(), &[2.0, 2.5, 3.0, 3.5, 4.0]);
}

#[test]
fn equal_scale_shares_the_smaller_factor() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    let scale = engine.mapper().scale();
    assert_relative_eq!(scale.sfx, 54.1);
    assert_relative_eq!(scale.sfy, 63.6);

    engine.set_equal_scale(true).expect("equal scale");
    let scale = engine.mapper().scale();
    assert_relative_eq!(scale.sfx, 54.1);
    assert_relative_eq!(scale.sfy, 54.1);
    assert!(engine.config().equal_scale);
}

#[test]
fn axis_fix_overrides_data_bounds() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    engine
        .set_axis_fix(AxisFix::x(Some(-5.0), None))
        .expect("fix x min");
    assert_eq!(engine.x_range(), AxisRange::new(-5.0, 10.0));
    assert_eq!(engine.y_range(), AxisRange::new(0.0, 5.0));
    // Ticks extend outwards to the next multiple of the step.
    assert_eq!(engine.bottom_ticks().first(), Some(&-6.0));
    assert_eq!(engine.bottom_ticks().last(), Some(&10.0));

    engine
        .set_axis_fix(AxisFix::y(None, Some(20.0)))
        .expect("fix y max");
    assert_eq!(engine.x_range(), AxisRange::new(0.0, 10.0));
    assert_eq!(engine.y_range(), AxisRange::new(0.0, 20.0));

    engine.set_axis_fix(AxisFix::default()).expect("clear fix");
    assert_eq!(engine.y_range(), AxisRange::new(0.0, 5.0));
}

#[test]
fn inverted_axis_fix_is_rejected_and_rolled_back() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    engine
        .set_axis_fix(AxisFix::x(Some(-5.0), None))
        .expect("fix x min");

    let err = engine
        .set_axis_fix(AxisFix::x(Some(20.0), None))
        .expect_err("min above data max");
    assert!(matches!(err, PlotError::InvalidAxisRange { axis: "x", .. }));
    assert_eq!(engine.config().axis_fix, AxisFix::x(Some(-5.0), None));
    assert_eq!(engine.x_range(), AxisRange::new(-5.0, 10.0));

    let err = engine
        .set_axis_fix(AxisFix::y(Some(3.0), Some(1.0)))
        .expect_err("inverted pair");
    assert!(matches!(err, PlotError::InvalidAxisRange { axis: "y", .. }));

    let err = engine
        .set_axis_fix(AxisFix::y(Some(f64::INFINITY), None))
        .expect_err("non-finite");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn curve_data_crossing_an_axis_fix_is_rolled_back() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    engine
        .set_axis_fix(AxisFix::x(Some(5.0), None))
        .expect("fix x min");

    let err = engine
        .change_curve("a", vec![0.0, 3.0], vec![0.0, 5.0])
        .expect_err("data max below fixed min");
    assert!(matches!(err, PlotError::InvalidAxisRange { axis: "x", .. }));
    assert_eq!(engine.curve("a").expect("curve").xs(), &[0.0, 10.0]);
    assert_eq!(engine.x_range(), AxisRange::new(5.0, 10.0));

    engine.refresh().expect("refresh after rejected data");
    engine.pointer_move(300.0, 200.0).expect("pointer move");
}

#[test]
fn added_curve_crossing_an_axis_fix_is_not_kept() {
    let config = PlotEngineConfig::default().with_axis_fix(AxisFix::x(Some(0.5), None));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    let err = engine
        .add_curve("a", vec![0.0, 0.3], vec![1.0, 2.0])
        .expect_err("data max below fixed min");
    assert!(matches!(err, PlotError::InvalidAxisRange { axis: "x", .. }));
    assert_eq!(engine.curve_count(), 0);
    engine.refresh().expect("refresh after rejected data");
    assert_eq!(engine.x_range(), AxisRange::new(0.5, 1.0));
}

#[test]
fn resize_rebuilds_layout_and_bins() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    engine.pointer_move(320.0, 186.0).expect("move");

    engine.resize(CanvasSize::new(800, 600)).expect("resize");
    assert_eq!(engine.plot_area(), ScreenRect::new(40.0, 18.0, 755.0, 532.0));
    assert_eq!(engine.spatial_index().bin_counts(), (12, 8));
    assert!(!engine.hover_state().visible);
    assert_relative_eq!(engine.mapper().scale().sfx, 74.1);

    engine.refresh().expect("refresh");
    assert_eq!(engine.spatial_index().len(), 2);
    assert_eq!(engine.mapper().to_screen(10.0, 5.0), (788, 25));
}

#[test]
fn resize_to_unusable_canvas_fails_without_changes() {
    let mut engine = engine_with_curve(vec![0.0, 10.0], vec![0.0, 5.0]);
    let err = engine
        .resize(CanvasSize::new(50, 50))
        .expect_err("too small");
    assert!(matches!(err, PlotError::InvalidCanvas { .. }));
    assert_eq!(engine.config().layout.canvas, CanvasSize::new(600, 400));
}
