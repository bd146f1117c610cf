use crate::assets::font::{ResolvedFont, resolve_font};
use crate::encode::png::write_png;
use crate::foundation::core::{CanvasSize, TextMetrics};
use crate::foundation::error::{ClipmarkError, ClipmarkResult};
use crate::foundation::math::opacity_to_alpha;
use crate::render::canvas::{self, Canvas};
use crate::render::style::LabelStyle;
use crate::request::{RenderConfig, RenderRequest};

/// A rendered label as straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, straight alpha.
    pub data: Vec<u8>,
    /// Ink box of the label text as measured before sizing.
    pub metrics: TextMetrics,
    /// Style the canvas was sized and drawn for.
    pub style: LabelStyle,
}

impl LabelImage {
    /// RGBA at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_rgba_image(&self) -> ClipmarkResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            ClipmarkError::Other(anyhow::anyhow!(
                "label buffer does not match {}x{}",
                self.width,
                self.height
            ))
        })
    }
}

/// Tight ink box of `text` drawn with `font`, relative to the text origin.
///
/// The text is rasterized on a scratch canvas large enough to hold any overhang, then scanned
/// for non-transparent pixels. Labels without ink measure as all zeros.
pub fn measure_text(font: &mut ResolvedFont, text: &str) -> ClipmarkResult<TextMetrics> {
    let (line_w, line_h) = canvas::line_box(font, text)?;
    let margin = font.size_px().map_or(8.0, |s| f64::from(s).ceil()) + 2.0;

    let scratch_size = CanvasSize {
        width: (line_w.ceil() + 2.0 * margin) as u32,
        height: (line_h.ceil() + 2.0 * margin) as u32,
    };
    let mut scratch = Canvas::new(scratch_size)?;
    scratch.draw_text(font, text, (margin, margin), [255, 255, 255, 255])?;
    let rgba = scratch.into_rgba8();

    let m = margin as i32;
    Ok(match canvas::ink_bounds(&rgba, scratch_size.width) {
        Some((x0, y0, x1, y1)) => TextMetrics {
            left: x0 as i32 - m,
            top: y0 as i32 - m,
            right: x1 as i32 - m,
            bottom: y1 as i32 - m,
        },
        None => TextMetrics::default(),
    })
}

/// Render `request` with an already resolved font.
pub fn render_with_font(
    request: &RenderRequest,
    font: &mut ResolvedFont,
) -> ClipmarkResult<LabelImage> {
    request.validate()?;

    let metrics = measure_text(font, &request.label)?;
    let size = request.style.canvas_size(metrics, request.base_size);
    tracing::debug!(?metrics, ?size, "sized canvas");

    let mut canvas = Canvas::new(size)?;
    if let Some(shape) = request.style.background() {
        let alpha = opacity_to_alpha(request.opacity);
        canvas.fill_background(shape, request.background.with_alpha(alpha));
    }

    // (x, y) positions the ink box, not the text origin. An ascender-anchored origin at (x, y)
    // would push the glyphs down and clip them in the `simple` style.
    let x = (f64::from(size.width) - f64::from(metrics.width())) / 2.0;
    let y = (f64::from(size.height) - f64::from(metrics.height())) / 2.0;
    let origin = (x - f64::from(metrics.left), y - f64::from(metrics.top));
    canvas.draw_text(font, &request.label, origin, request.text_color.with_alpha(255))?;

    let size = canvas.size();
    Ok(LabelImage {
        width: size.width,
        height: size.height,
        data: canvas.into_rgba8(),
        metrics,
        style: request.style,
    })
}

/// Resolve a font from `config` and render `request` in memory.
#[tracing::instrument(skip(request, config), fields(label = %request.label, style = %request.style))]
pub fn render_label(request: &RenderRequest, config: &RenderConfig) -> ClipmarkResult<LabelImage> {
    let mut font = resolve_font(&config.font_sources, config.font_size_px(request.base_size));
    render_with_font(request, &mut font)
}

/// Render `request` and write it as a PNG to `request.output_path`.
pub fn render_to_file(request: &RenderRequest, config: &RenderConfig) -> ClipmarkResult<LabelImage> {
    let image = render_label(request, config)?;
    write_png(&request.output_path, &image)?;
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/render/label.rs"]
mod tests;
