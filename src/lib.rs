//! plotxy: interactive 2D x/y plotting core.
//!
//! Curves are mapped from real coordinates onto an integer pixel grid framed
//! by rulers and a legend. Axis ticks come from an R-style "pretty" planner and
//! hover snapping is served by a uniform-grid spatial index. Drawing goes
//! through backend-agnostic `RenderFrame`s so the engine stays headless.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AxisFix, PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
