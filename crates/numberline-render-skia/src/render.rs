// File: crates/numberline-render-skia/src/render.rs
// Summary: Headless PNG/RGBA rendering of an AxisFrame using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use numberline_core::feedback::{CorrectMark, UserLabel};
use numberline_core::{AxisFrame, MarkerGlyph, PlacedTick};

use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    /// Text output varies across platforms; snapshot tests turn it off.
    pub draw_labels: bool,
    pub axis_stroke_width: f32,
    pub tick_stroke_width: f32,
    pub marker_stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            draw_labels: true,
            axis_stroke_width: 2.0,
            tick_stroke_width: 1.5,
            marker_stroke_width: 2.0,
        }
    }
}

/// Render `frame` and write a PNG to `output_png_path`, creating parent directories.
pub fn render_to_png(frame: &AxisFrame, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(frame, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "frame written");
    Ok(())
}

/// Render `frame` to an in-memory PNG.
pub fn render_to_png_bytes(frame: &AxisFrame, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = paint_surface(frame, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `frame` to unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(frame: &AxisFrame, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = paint_surface(frame, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed for {w}x{h} surface");
    }
    Ok((pixels, w, h, stride))
}

fn paint_surface(frame: &AxisFrame, opts: &RenderOptions) -> Result<skia::Surface> {
    let width = surface_dim(frame.surface_width).context("surface width")?;
    let height = surface_dim(frame.surface_height).context("surface height")?;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;

    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    let shaper = opts.draw_labels.then(TextShaper::new);

    // Chart-area coordinates: origin at the left end of the axis line
    canvas.save();
    canvas.translate((frame.margins.left as f32, frame.margins.top as f32));

    draw_axis_line(canvas, frame.chart_width as f32, opts);
    for placed in &frame.ticks {
        draw_tick(canvas, placed, shaper.as_ref(), opts);
    }
    if let Some(layout) = &frame.feedback {
        let font = layout.font_size as f32;
        if let Some(correct) = &layout.correct {
            draw_correct_mark(canvas, correct, font, shaper.as_ref(), opts);
        }
        if let (Some(user), Some(shaper)) = (&layout.user, shaper.as_ref()) {
            draw_user_label(canvas, user, font, shaper, opts);
        }
    }
    if let Some(glyph) = &frame.marker {
        draw_marker(canvas, glyph, opts);
    }

    canvas.restore();
    Ok(surface)
}

fn surface_dim(v: f64) -> Result<i32> {
    if !v.is_finite() || v < 1.0 || v > i32::MAX as f64 {
        anyhow::bail!("unusable surface dimension {v}");
    }
    Ok(v.ceil() as i32)
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_axis_line(canvas: &skia::Canvas, chart_width: f32, opts: &RenderOptions) {
    let paint = stroke(opts.theme.axis_line, opts.axis_stroke_width);
    canvas.draw_line((0.0, 0.0), (chart_width, 0.0), &paint);
}

fn draw_tick(canvas: &skia::Canvas, placed: &PlacedTick, shaper: Option<&TextShaper>, opts: &RenderOptions) {
    let x = placed.x as f32;
    let paint = stroke(opts.theme.tick, opts.tick_stroke_width);
    canvas.draw_line((x, 0.0), (x, placed.length as f32), &paint);

    if let (Some(label), Some(shaper)) = (&placed.label, shaper) {
        shaper.draw_centered(canvas, &label.text, x, label.y as f32, label.font_size as f32, opts.theme.label, false);
    }
}

fn draw_correct_mark(canvas: &skia::Canvas, mark: &CorrectMark, font: f32, shaper: Option<&TextShaper>, opts: &RenderOptions) {
    let x = mark.x as f32;
    let half = mark.half_length as f32;
    let paint = stroke(opts.theme.correct, mark.stroke_width as f32);
    canvas.draw_line((x, -half), (x, half), &paint);
    if let Some(shaper) = shaper {
        shaper.draw_centered(canvas, &mark.label, x, mark.label_y as f32, font, opts.theme.correct, true);
    }
}

fn draw_user_label(canvas: &skia::Canvas, user: &UserLabel, font: f32, shaper: &TextShaper, opts: &RenderOptions) {
    shaper.draw_centered(canvas, &user.label, user.x as f32, user.label_y as f32, font, opts.theme.user, true);
}

fn draw_marker(canvas: &skia::Canvas, glyph: &MarkerGlyph, opts: &RenderOptions) {
    let x = glyph.x as f32;
    let half = glyph.half_length as f32;
    canvas.draw_line((x, -half), (x, half), &stroke(opts.theme.marker_line, opts.marker_stroke_width));

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::PaintStyle::Fill);
    fill.set_color(if glyph.dragging { opts.theme.marker_handle_dragging } else { opts.theme.marker_handle });
    canvas.draw_circle((x, 0.0), glyph.circle_radius as f32, &fill);
}
