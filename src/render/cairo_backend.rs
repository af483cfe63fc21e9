use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context (for example a
/// toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Renders either offscreen into its own image surface through
/// `Renderer::render`, or onto a caller-provided context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: &std::path::Path) -> PlotResult<()> {
        let mut file = std::fs::File::create(path)
            .map_err(|err| PlotError::InvalidData(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        for rect in &frame.rects {
            draw_rect(context, rect)?;
        }
        for line in &frame.lines {
            draw_line(context, line)?;
        }
        for circle in &frame.circles {
            draw_circle(context, circle)?;
        }
        for text in &frame.texts {
            draw_text(context, text);
        }

        self.last_stats = CairoRenderStats {
            rects_drawn: frame.rects.len(),
            lines_drawn: frame.lines.len(),
            circles_drawn: frame.circles.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> PlotResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err));
    }

    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    apply_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
}

fn draw_line(context: &Context, line: &LinePrimitive) -> PlotResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_circle(context: &Context, circle: &CirclePrimitive) -> PlotResult<()> {
    apply_color(context, circle.color);
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    if circle.filled {
        return context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err));
    }
    context.set_line_width(circle.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke circle", err))
}

/// Texts are anchored horizontally per `h_align` and vertically at their centre.
fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { "Bold " } else { "" };
    let font = FontDescription::from_string(&format!("Sans {weight}{}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(width) / 2.0,
        TextHAlign::Right => text.x - f64::from(width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y - f64::from(height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
