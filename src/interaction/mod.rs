use serde::{Deserialize, Serialize};

use crate::core::ScreenRect;

/// Data point currently snapped to by the hover cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapHit {
    pub curve: String,
    pub point_index: usize,
    /// Indexed (truncated) screen position of the point.
    pub screen_x: f64,
    pub screen_y: f64,
    pub x_real: f64,
    pub y_real: f64,
    /// Screen distance between pointer and point.
    pub distance: f64,
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub pointer_x: f64,
    pub pointer_y: f64,
    /// Real coordinates under the pointer.
    pub x_real: f64,
    pub y_real: f64,
    pub snap: Option<SnapHit>,
}

impl HoverState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64, x_real: f64, y_real: f64) {
        self.visible = true;
        self.pointer_x = x;
        self.pointer_y = y;
        self.x_real = x_real;
        self.y_real = y_real;
    }

    pub fn set_snap(&mut self, snap: Option<SnapHit>) {
        self.snap = snap;
    }

    pub fn on_pointer_leave(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RubberBandMode {
    #[default]
    Idle,
    Dragging,
}

/// Drag-selection rectangle owned by a single plot.
///
/// `Idle --down--> Dragging --move--> Dragging --up--> Idle`. Moves while idle
/// are ignored, and a second `down` while dragging restarts from the new anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RubberBand {
    mode: RubberBandMode,
    anchor_x: f64,
    anchor_y: f64,
    rect: Option<ScreenRect>,
}

impl RubberBand {
    #[must_use]
    pub fn mode(self) -> RubberBandMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == RubberBandMode::Dragging
    }

    /// Current selection rectangle while dragging.
    #[must_use]
    pub fn rect(self) -> Option<ScreenRect> {
        self.rect
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.mode = RubberBandMode::Dragging;
        self.anchor_x = x;
        self.anchor_y = y;
        self.rect = Some(ScreenRect::new(x, y, 0.0, 0.0));
    }

    /// Stretches the rectangle between the anchor and `(x, y)`.
    ///
    /// Returns `false` when no drag is active.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.rect = Some(ScreenRect::new(
            x.min(self.anchor_x),
            y.min(self.anchor_y),
            (x - self.anchor_x).abs(),
            (y - self.anchor_y).abs(),
        ));
        true
    }

    /// Finishes the drag and returns the final rectangle.
    pub fn on_pointer_up(&mut self) -> Option<ScreenRect> {
        if !self.is_dragging() {
            return None;
        }
        let rect = self.rect.take();
        *self = Self::default();
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, RubberBand, RubberBandMode};
    use crate::core::ScreenRect;

    #[test]
    fn rubber_band_normalizes_reverse_drags() {
        let mut band = RubberBand::default();
        band.on_pointer_down(100.0, 80.0);
        assert!(band.on_pointer_move(40.0, 120.0));
        assert_eq!(band.rect(), Some(ScreenRect::new(40.0, 80.0, 60.0, 40.0)));

        let finished = band.on_pointer_up();
        assert_eq!(finished, Some(ScreenRect::new(40.0, 80.0, 60.0, 40.0)));
        assert_eq!(band.mode(), RubberBandMode::Idle);
        assert_eq!(band.rect(), None);
    }

    #[test]
    fn idle_rubber_band_ignores_moves_and_ups() {
        let mut band = RubberBand::default();
        assert!(!band.on_pointer_move(10.0, 10.0));
        assert_eq!(band.on_pointer_up(), None);
    }

    #[test]
    fn pointer_leave_resets_hover() {
        let mut hover = HoverState::default();
        hover.on_pointer_move(10.0, 20.0, 1.5, 2.5);
        assert!(hover.visible);
        hover.on_pointer_leave();
        assert_eq!(hover, HoverState::default());
    }
}
