mod curve;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod render_frame_builder;
mod scale_coordinator;
mod series_projection;
mod snap_resolver;
mod snapshot_controller;
mod validation;

pub use curve::Curve;
pub use engine::PlotEngine;
pub use engine_config::{AxisFix, PlotEngineConfig};
pub use engine_snapshot::{CurveSummary, PlotSnapshot};
pub use render_frame_builder::CURVE_COLORS;
pub use snap_resolver::SnapPayload;
