use tracing::{debug, warn};

use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::validation::validate_curve_data;
use super::{Curve, PlotEngine};

impl<R: Renderer> PlotEngine<R> {
    /// Registers a new named curve.
    ///
    /// The plot is not redrawn; call `refresh` afterwards. Data that would
    /// cross an active axis fix is rejected and the curve is not added.
    pub fn add_curve(
        &mut self,
        name: impl Into<String>,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> PlotResult<()> {
        let name = name.into();
        if let Err(err) = validate_curve_data(&name, &xs, &ys) {
            warn!(curve = %name, error = %err, "rejecting curve data");
            return Err(err);
        }
        if self.curves.contains_key(&name) {
            return Err(PlotError::DuplicateCurve(name));
        }

        debug!(curve = %name, samples = xs.len(), "add curve");
        self.curves.insert(name.clone(), Curve::new(xs, ys));
        if let Err(err) = self.update_scale() {
            warn!(curve = %name, error = %err, "curve conflicts with axis fix");
            self.curves.shift_remove(&name);
            return Err(err);
        }
        self.index_dirty = true;
        Ok(())
    }

    /// Replaces the samples of an existing curve, keeping its legend slot.
    ///
    /// On an axis-fix conflict the previous samples are restored.
    pub fn change_curve(&mut self, name: &str, xs: Vec<f64>, ys: Vec<f64>) -> PlotResult<()> {
        if let Err(err) = validate_curve_data(name, &xs, &ys) {
            warn!(curve = %name, error = %err, "rejecting curve data");
            return Err(err);
        }
        let Some(curve) = self.curves.get_mut(name) else {
            return Err(PlotError::UnknownCurve(name.to_owned()));
        };

        debug!(curve = %name, samples = xs.len(), "change curve");
        let previous = std::mem::replace(curve, Curve::new(xs, ys));
        if let Err(err) = self.update_scale() {
            warn!(curve = %name, error = %err, "curve conflicts with axis fix");
            if let Some(curve) = self.curves.get_mut(name) {
                *curve = previous;
            }
            return Err(err);
        }
        self.index_dirty = true;
        Ok(())
    }
}
