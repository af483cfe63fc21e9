use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{CurveSummary, PlotEngine, PlotSnapshot};

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            layout: self.config.layout,
            plot_area: self.plot_area(),
            x_range: self.x_axis.range,
            y_range: self.y_axis.range,
            scale: self.mapper.scale(),
            bottom_ticks: self.bottom_ticks.clone(),
            left_ticks: self.left_ticks.clone(),
            curves: self
                .curves
                .iter()
                .map(|(name, curve)| {
                    (
                        name.clone(),
                        CurveSummary {
                            samples: curve.len(),
                            contributes_to_range: curve.contributes_to_range(),
                        },
                    )
                })
                .collect(),
            bin_counts: self.index.bin_counts(),
            indexed_points: self.index.len(),
            hover: self.hover.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
