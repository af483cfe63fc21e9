use serde::{Deserialize, Serialize};

/// Named sequence of `(x, y)` samples drawn as markers joined by segments.
///
/// Construction goes through `PlotEngine::add_curve`, which guarantees both
/// sequences have equal length and hold finite values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Curve {
    pub(super) fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Curves with fewer than two samples do not contribute to axis ranges.
    #[must_use]
    pub fn contributes_to_range(&self) -> bool {
        self.len() >= 2
    }
}
