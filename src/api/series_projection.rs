use crate::core::CoordinateMapper;

use super::{Curve, SnapPayload};

/// One curve sample projected into screen space, ready for indexing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ProjectedSample {
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) payload: SnapPayload,
}

/// Projects every sample of `curve` through `mapper`, keeping sample order.
#[cfg(not(feature = "parallel-projection"))]
pub(super) fn project_curve(
    mapper: &CoordinateMapper,
    curve_index: usize,
    curve: &Curve,
) -> Vec<ProjectedSample> {
    curve
        .points()
        .enumerate()
        .map(|(point_index, (x, y))| project_sample(mapper, curve_index, point_index, x, y))
        .collect()
}

/// Parallel variant; `collect` on an indexed iterator keeps sample order so
/// the index sees the same insertion sequence as the sequential path.
#[cfg(feature = "parallel-projection")]
pub(super) fn project_curve(
    mapper: &CoordinateMapper,
    curve_index: usize,
    curve: &Curve,
) -> Vec<ProjectedSample> {
    use rayon::prelude::*;

    curve
        .xs()
        .par_iter()
        .zip(curve.ys().par_iter())
        .enumerate()
        .map(|(point_index, (&x, &y))| project_sample(mapper, curve_index, point_index, x, y))
        .collect()
}

fn project_sample(
    mapper: &CoordinateMapper,
    curve_index: usize,
    point_index: usize,
    x: f64,
    y: f64,
) -> ProjectedSample {
    let (sx, sy) = mapper.to_screen(x, y);
    ProjectedSample {
        x: f64::from(sx),
        y: f64::from(sy),
        payload: SnapPayload {
            curve_index,
            point_index,
            x_real: x,
            y_real: y,
        },
    }
}
