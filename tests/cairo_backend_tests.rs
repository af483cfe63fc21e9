#![cfg(feature = "cairo-backend")]

use plotxy::api::{PlotEngine, PlotEngineConfig};
use plotxy::render::CairoRenderer;

#[test]
fn cairo_renderer_draws_plot_frame() {
    let renderer = CairoRenderer::new(600, 400).expect("cairo surface");
    let config = PlotEngineConfig::default().with_labels("Demo", "x", "y");
    let mut engine = PlotEngine::new(renderer, config).expect("engine init");
    engine
        .add_curve("a", vec![0.0, 5.0, 10.0], vec![0.0, 2.5, 5.0])
        .expect("add curve");
    engine.refresh().expect("refresh");
    engine.pointer_move(320.0, 186.0).expect("move");

    let stats = engine.renderer().last_stats();
    // Three markers, one legend marker and the selection ring.
    assert_eq!(stats.circles_drawn, 5);
    assert!(stats.lines_drawn > 0);
    assert!(stats.texts_drawn > 0);
    assert!(stats.rects_drawn > 0);
}

#[test]
fn cairo_renderer_rejects_empty_surface() {
    assert!(CairoRenderer::new(0, 400).is_err());
}
