pub mod bins;
pub mod layout;
pub mod mapper;
pub mod pretty;
pub mod types;

pub use bins::{BinEntry, BinSearch, NearestHit, PointId, SpatialIndex};
pub use layout::PlotLayout;
pub use mapper::{AxisRange, CoordinateMapper, ResolvedAxis, ScaleFactors, truncate_to_pixel};
pub use pretty::{TickPlan, format_tick_label, plan_ticks, pretty};
pub use types::{CanvasSize, ScreenRect};
