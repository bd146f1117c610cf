use vello_cpu::kurbo::{Affine, Ellipse, Rect, Shape};
use vello_cpu::peniko::Color;

use crate::assets::builtin_font;
use crate::assets::font::{Face, OutlineFont, ResolvedFont};
use crate::assets::text::TextBrushRgba8;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ClipmarkError, ClipmarkResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::style::BackgroundShape;

/// Transparent RGBA drawing surface backed by a `vello_cpu` render context.
pub(crate) struct Canvas {
    ctx: vello_cpu::RenderContext,
    size: CanvasSize,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub(crate) fn new(size: CanvasSize) -> ClipmarkResult<Self> {
        let w: u16 = size
            .width
            .try_into()
            .map_err(|_| ClipmarkError::config(format!("canvas width {} exceeds u16", size.width)))?;
        let h: u16 = size.height.try_into().map_err(|_| {
            ClipmarkError::config(format!("canvas height {} exceeds u16", size.height))
        })?;
        if w == 0 || h == 0 {
            return Err(ClipmarkError::config("canvas must be at least 1x1"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            size,
        })
    }

    pub(crate) fn size(&self) -> CanvasSize {
        self.size
    }

    /// Fill `shape` spanning the whole canvas with straight RGBA8 `rgba`.
    pub(crate) fn fill_background(&mut self, shape: BackgroundShape, rgba: [u8; 4]) {
        let w = f64::from(self.size.width);
        let h = f64::from(self.size.height);
        let [r, g, b, a] = rgba;

        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(Color::from_rgba8(r, g, b, a));
        match shape {
            BackgroundShape::Rect => self.ctx.fill_rect(&Rect::new(0.0, 0.0, w, h)),
            BackgroundShape::Ellipse => {
                let e = Ellipse::new((w / 2.0, h / 2.0), (w / 2.0, h / 2.0), 0.0);
                self.ctx.fill_path(&e.to_path(0.1));
            }
        }
    }

    /// Draw `text` with its layout origin (top-left of the line box) at `origin`.
    pub(crate) fn draw_text(
        &mut self,
        font: &mut ResolvedFont,
        text: &str,
        origin: (f64, f64),
        rgba: [u8; 4],
    ) -> ClipmarkResult<()> {
        match &mut font.face {
            Face::Outline(outline) => {
                let OutlineFont {
                    engine,
                    family,
                    size_px,
                    data,
                    ..
                } = &mut **outline;
                let layout =
                    engine.layout_line(text, family, *size_px, TextBrushRgba8::from_rgba(rgba))?;

                self.ctx.set_transform(Affine::translate(origin));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        self.ctx.set_paint(Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let mut x = run.offset();
                        let baseline = run.baseline();
                        let glyphs = run.glyphs().map(|g| {
                            let gx = x + g.x;
                            x += g.advance;
                            vello_cpu::Glyph {
                                id: g.id,
                                x: gx,
                                y: baseline - g.y,
                            }
                        });
                        self.ctx
                            .glyph_run(data)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
            }
            Face::Builtin => {
                let [r, g, b, a] = rgba;
                let s = f64::from(builtin_font::SCALE);
                // Whole pixels keep the bitmap crisp.
                self.ctx
                    .set_transform(Affine::translate((origin.0.round(), origin.1.round())));
                self.ctx.set_paint(Color::from_rgba8(r, g, b, a));
                for (col, row) in builtin_font::lit_cells(text) {
                    let x = f64::from(col) * s;
                    let y = f64::from(row) * s;
                    self.ctx.fill_rect(&Rect::new(x, y, x + s, y + s));
                }
            }
        }
        Ok(())
    }

    /// Rasterize everything drawn so far into straight-alpha RGBA8, row-major.
    pub(crate) fn into_rgba8(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.ctx.width(), self.ctx.height());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        data
    }
}

/// Size of the unwrapped line box of `text`, in pixels.
pub(crate) fn line_box(font: &mut ResolvedFont, text: &str) -> ClipmarkResult<(f64, f64)> {
    match &mut font.face {
        Face::Outline(outline) => {
            let OutlineFont {
                engine,
                family,
                size_px,
                ..
            } = &mut **outline;
            let layout = engine.layout_line(text, family, *size_px, TextBrushRgba8::default())?;
            Ok((f64::from(layout.width()), f64::from(layout.height())))
        }
        Face::Builtin => {
            let (w, h) = builtin_font::line_box(text);
            Ok((f64::from(w), f64::from(h)))
        }
    }
}

/// Tight bounds `(x0, y0, x1, y1)` of pixels with non-zero alpha; `x1`/`y1` exclusive.
pub(crate) fn ink_bounds(rgba: &[u8], width: u32) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in rgba.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        bounds = Some(match bounds {
            None => (x, y, x + 1, y + 1),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
        });
    }
    bounds
}
