use crate::core::{ScreenRect, format_tick_label};
use crate::interaction::SnapHit;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::PlotEngine;

/// Curve colours, cycled by insertion order.
pub const CURVE_COLORS: [Color; 6] = [
    Color::from_rgb8(0, 0, 255),
    Color::from_rgb8(255, 0, 0),
    Color::from_rgb8(0, 128, 0),
    Color::from_rgb8(255, 0, 255),
    Color::from_rgb8(0, 255, 255),
    Color::from_rgb8(255, 165, 0),
];

const RULER_FILL: Color = Color::from_rgb8(248, 248, 255);
const AREA_FILL: Color = Color::from_rgb8(255, 247, 236);
const GRID_COLOR: Color = Color::from_rgb8(30, 144, 255).with_alpha(0.4);
const BORDER_COLOR: Color = Color::rgb(0.35, 0.35, 0.35);
const SNAP_COLOR: Color = Color::from_rgb8(255, 156, 0);
const BIN_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 0.5);
const ACTIVE_BIN_COLOR: Color = Color::rgba(1.0, 0.0, 0.0, 0.6);
const RUBBER_BAND_COLOR: Color = Color::rgba(0.2, 0.2, 0.2, 0.8);

const SNAP_RING_RADIUS_PX: f64 = 7.0;
const LEGEND_MARKER_GAP_PX: f64 = 40.0;
const LEGEND_ENTRY_GAP_PX: f64 = 10.0;

impl<R: Renderer> PlotEngine<R> {
    /// Materializes backend-agnostic primitives for the current plot state.
    ///
    /// Uses the scale, ticks and snap index as of the last `refresh` or
    /// pointer event.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.config.layout.canvas);
        let area = self.plot_area();

        self.push_backgrounds(&mut frame, area);
        if self.config.grid {
            self.push_grid(&mut frame, area);
        }
        if self.config.show_bins {
            self.push_bins(&mut frame);
        }
        self.push_curves(&mut frame);
        self.push_rulers(&mut frame, area);
        self.push_labels(&mut frame, area);
        if self.config.layout.legend_at_bottom {
            self.push_legend(&mut frame);
        }

        frame.rects.push(RectPrimitive::outline(
            area.left,
            area.top,
            area.width,
            area.height,
            1.0,
            BORDER_COLOR,
        ));

        if self.hover.visible {
            self.push_hover_readout(&mut frame);
            if let Some(snap) = &self.hover.snap {
                self.push_snap(&mut frame, area, snap);
            }
        }
        if let Some(rect) = self.rubber_band.rect() {
            frame.rects.push(RectPrimitive::outline(
                rect.left,
                rect.top,
                rect.width,
                rect.height,
                1.0,
                RUBBER_BAND_COLOR,
            ));
        }

        frame
    }

    fn push_backgrounds(&self, frame: &mut RenderFrame, area: ScreenRect) {
        let layout = self.config.layout;
        let width = layout.width();
        frame.rects.extend([
            RectPrimitive::new(0.0, 0.0, width, layout.top_ruler_px, RULER_FILL),
            RectPrimitive::new(0.0, area.bottom(), width, layout.bottom_ruler_px, RULER_FILL),
            RectPrimitive::new(0.0, area.top, layout.left_ruler_px, area.height, RULER_FILL),
            RectPrimitive::new(
                area.right(),
                area.top,
                (width - area.right()).max(0.0),
                area.height,
                RULER_FILL,
            ),
            RectPrimitive::new(area.left, area.top, area.width, area.height, AREA_FILL),
        ]);
        if layout.legend_at_bottom && layout.legend_height_px > 0.0 {
            frame.rects.push(RectPrimitive::new(
                0.0,
                layout.height() - layout.legend_height_px,
                width,
                layout.legend_height_px,
                Color::WHITE,
            ));
        }
    }

    fn push_grid(&self, frame: &mut RenderFrame, area: ScreenRect) {
        for &tick in &self.bottom_ticks {
            let x = f64::from(self.mapper.to_screen_x(tick));
            if (area.left..=area.right()).contains(&x) {
                frame.lines.push(LinePrimitive::new(
                    x,
                    area.top,
                    x,
                    area.bottom(),
                    1.0,
                    GRID_COLOR,
                ));
            }
        }
        for &tick in &self.left_ticks {
            let y = f64::from(self.mapper.to_screen_y(tick));
            if (area.top..=area.bottom()).contains(&y) {
                frame.lines.push(LinePrimitive::new(
                    area.left,
                    y,
                    area.right(),
                    y,
                    1.0,
                    GRID_COLOR,
                ));
            }
        }
    }

    fn push_bins(&self, frame: &mut RenderFrame) {
        let bounds = self.index.bounds();
        let (columns, rows) = self.index.grid_lines();
        for x in columns {
            frame.lines.push(LinePrimitive::new(
                x,
                bounds.top,
                x,
                bounds.bottom(),
                1.0,
                BIN_COLOR,
            ));
        }
        for y in rows {
            frame.lines.push(LinePrimitive::new(
                bounds.left,
                y,
                bounds.right(),
                y,
                1.0,
                BIN_COLOR,
            ));
        }

        if self.hover.visible {
            if let Some(cell) = self
                .index
                .cell_rect(self.hover.pointer_x, self.hover.pointer_y)
            {
                frame.rects.push(RectPrimitive::outline(
                    cell.left,
                    cell.top,
                    cell.width,
                    cell.height,
                    2.0,
                    ACTIVE_BIN_COLOR,
                ));
            }
        }
    }

    fn push_curves(&self, frame: &mut RenderFrame) {
        let radius = self.config.marker_size_px / 2.0;
        for (k, curve) in self.curves.values().enumerate() {
            let color = CURVE_COLORS[k % CURVE_COLORS.len()];
            let mut previous: Option<(f64, f64)> = None;
            for (x, y) in curve.points() {
                let (sx, sy) = self.mapper.to_screen(x, y);
                let (sx, sy) = (f64::from(sx), f64::from(sy));
                frame
                    .circles
                    .push(CirclePrimitive::filled(sx, sy, radius, color));
                if let Some((px, py)) = previous {
                    frame
                        .lines
                        .push(LinePrimitive::new(px, py, sx, sy, 1.0, color));
                }
                previous = Some((sx, sy));
            }
        }
    }

    fn push_rulers(&self, frame: &mut RenderFrame, area: ScreenRect) {
        let tick_len = self.config.tick_len_px;
        let font = self.config.tick_font_px;

        for &tick in &self.bottom_ticks {
            let x = f64::from(self.mapper.to_screen_x(tick));
            if !(area.left..=area.right()).contains(&x) {
                continue;
            }
            let y = area.bottom();
            frame
                .lines
                .push(LinePrimitive::new(x, y, x, y + tick_len, 1.0, Color::BLACK));
            frame.texts.push(TextPrimitive::new(
                format_tick_label(tick),
                x,
                y + tick_len + font / 2.0 + 3.0,
                font,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }

        for &tick in &self.left_ticks {
            let y = f64::from(self.mapper.to_screen_y(tick));
            if !(area.top..=area.bottom()).contains(&y) {
                continue;
            }
            let x = area.left - tick_len;
            frame
                .lines
                .push(LinePrimitive::new(x, y, area.left, y, 1.0, Color::BLACK));
            frame.texts.push(TextPrimitive::new(
                format_tick_label(tick),
                x - 2.0,
                y,
                font,
                Color::BLACK,
                TextHAlign::Right,
            ));
        }
    }

    fn push_labels(&self, frame: &mut RenderFrame, area: ScreenRect) {
        let layout = self.config.layout;
        if !self.config.title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.title.clone(),
                    layout.width() / 2.0,
                    layout.top_ruler_px / 2.0,
                    self.config.title_font_px,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
        if !self.config.x_label.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.x_label.clone(),
                    area.left + area.width / 2.0,
                    area.bottom() + layout.bottom_ruler_px - 5.0,
                    self.config.label_font_px,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
        if !self.config.y_label.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.y_label.clone(),
                    layout.left_ruler_px / 2.0,
                    layout.top_ruler_px / 2.0,
                    self.config.label_font_px,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
    }

    fn push_legend(&self, frame: &mut RenderFrame) {
        let layout = self.config.layout;
        let font = self.config.label_font_px;
        let radius = self.config.marker_size_px / 2.0;
        let y = layout.height() - layout.legend_height_px / 2.0;
        let mut x = 5.0;

        for (k, name) in self.curves.keys().enumerate() {
            let color = CURVE_COLORS[k % CURVE_COLORS.len()];
            let line_end = x + LEGEND_MARKER_GAP_PX - 10.0;
            frame
                .lines
                .push(LinePrimitive::new(x, y, line_end, y, 1.0, color));
            frame.circles.push(CirclePrimitive::filled(
                x + (line_end - x) / 2.0,
                y,
                radius,
                color,
            ));

            let text_x = x + LEGEND_MARKER_GAP_PX;
            if !name.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    name.clone(),
                    text_x,
                    y,
                    font,
                    Color::BLACK,
                    TextHAlign::Left,
                ));
            }
            x = text_x + estimate_text_width_px(name, font) + LEGEND_ENTRY_GAP_PX;
        }
    }

    fn push_hover_readout(&self, frame: &mut RenderFrame) {
        let layout = self.config.layout;
        let box_width = 2.0 * layout.left_ruler_px;
        let box_left = (layout.width() - box_width).max(0.0);
        frame.rects.push(RectPrimitive::new(
            box_left,
            1.0,
            box_width - 1.0,
            (layout.top_ruler_px - 2.0).max(0.0),
            RULER_FILL,
        ));
        frame.texts.push(TextPrimitive::new(
            format!(
                "{}, {}",
                format_tick_label(self.hover.x_real),
                format_tick_label(self.hover.y_real)
            ),
            layout.width() - 2.0,
            layout.top_ruler_px / 2.0,
            self.config.tick_font_px,
            Color::BLACK,
            TextHAlign::Right,
        ));
    }

    fn push_snap(&self, frame: &mut RenderFrame, area: ScreenRect, snap: &SnapHit) {
        frame.circles.push(CirclePrimitive::ring(
            snap.screen_x,
            snap.screen_y,
            SNAP_RING_RADIUS_PX,
            2.0,
            SNAP_COLOR,
        ));

        // Labels sit above the point in the tick font; near the top edge they
        // drop below it, and near the sides they align inwards.
        let font = self.config.tick_font_px;
        let mut label_y = snap.screen_y - self.config.snap_label_shift_px;
        if snap.screen_y < area.top + 2.0 * font {
            label_y += 3.0 * font;
        }
        let h_align = if snap.screen_x > area.right() - font {
            TextHAlign::Right
        } else if snap.screen_x < area.left + font {
            TextHAlign::Left
        } else {
            TextHAlign::Center
        };

        frame.texts.push(TextPrimitive::new(
            format!(
                "{}, {}",
                format_tick_label(snap.x_real),
                format_tick_label(snap.y_real)
            ),
            snap.screen_x,
            label_y,
            font,
            Color::BLACK,
            h_align,
        ));
    }
}

/// Rough width of `text` without font metrics.
fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
