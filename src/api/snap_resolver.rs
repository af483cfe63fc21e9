use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::interaction::SnapHit;
use crate::render::Renderer;

use super::PlotEngine;
use super::series_projection::project_curve;

/// Back-reference from an indexed screen point to its curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPayload {
    pub curve_index: usize,
    pub point_index: usize,
    pub x_real: f64,
    pub y_real: f64,
}

impl<R: Renderer> PlotEngine<R> {
    /// Repopulates the snap index from all curves when it is stale.
    ///
    /// Skipped entirely while tracking is off; the index stays dirty and is
    /// rebuilt once tracking is enabled again.
    pub(super) fn rebuild_index_if_needed(&mut self) {
        if !self.config.tracking || !self.index_dirty {
            return;
        }

        self.index.clear();
        let mut rejected = 0_usize;
        for (curve_index, curve) in self.curves.values().enumerate() {
            for sample in project_curve(&self.mapper, curve_index, curve) {
                if !self.index.insert(sample.x, sample.y, sample.payload) {
                    rejected += 1;
                }
            }
        }
        self.index_dirty = false;

        debug!(
            indexed = self.index.len(),
            rejected,
            "rebuilt snap index"
        );
    }

    /// Nearest indexed point strictly within the snap radius of `(x, y)`.
    pub(super) fn snap_at(&self, x: f64, y: f64) -> Option<SnapHit> {
        let hit = self.index.find_nearest(x, y)?;
        if hit.distance >= self.config.snap_radius_px {
            trace!(distance = hit.distance, "nearest point outside snap radius");
            return None;
        }

        let payload = hit.entry.payload;
        let (curve, _) = self.curves.get_index(payload.curve_index)?;
        Some(SnapHit {
            curve: curve.clone(),
            point_index: payload.point_index,
            screen_x: hit.entry.x,
            screen_y: hit.entry.y,
            x_real: payload.x_real,
            y_real: payload.y_real,
            distance: hit.distance,
        })
    }
}
