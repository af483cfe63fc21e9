#[test]
fn default_tracing_init_is_feature_gated() {
    let installed = plotxy::telemetry::init_default_tracing();
    assert_eq!(installed, cfg!(feature = "telemetry"));
}
