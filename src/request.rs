//! Render inputs and the ambient configuration they are resolved against.

use std::path::{Path, PathBuf};

use crate::assets::color::parse_hex_rgb;
use crate::assets::font::FontSource;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{ClipmarkError, ClipmarkResult};
use crate::render::style::LabelStyle;

/// Environment variable naming an extra font file tried before the configured list.
pub const FONT_ENV: &str = "CLIPMARK_FONT";

/// Ambient settings: font search order and the defaults applied to omitted arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Ordered font candidates; the first that loads wins.
    pub font_sources: Vec<FontSource>,
    /// Font point size as a fraction of the base size.
    pub font_scale: f64,
    /// Base size used when none is given.
    pub default_size: u32,
    /// Background color used when none is given.
    pub default_background: Rgb8,
    /// Text color used when none is given.
    pub default_text_color: Rgb8,
    /// Background opacity used when none is given.
    pub default_opacity: f64,
    /// Style used when none is given.
    pub default_style: LabelStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_sources: FontSource::default_chain(),
            font_scale: 0.6,
            default_size: 75,
            default_background: Rgb8::BLACK,
            default_text_color: Rgb8::WHITE,
            default_opacity: 0.7,
            default_style: LabelStyle::Badge,
        }
    }
}

impl RenderConfig {
    /// Defaults plus the [`FONT_ENV`] override, if set and non-empty.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(path) = std::env::var_os(FONT_ENV).filter(|v| !v.is_empty()) {
            cfg.prepend_font(PathBuf::from(path));
        }
        cfg
    }

    /// Put `path` at the front of the font search list.
    pub fn prepend_font(&mut self, path: impl Into<PathBuf>) {
        self.font_sources.insert(0, FontSource::File(path.into()));
    }

    /// Truetype point size for `base_size`: `floor(base_size * font_scale)`, at least 1.
    pub fn font_size_px(&self, base_size: u32) -> u32 {
        ((f64::from(base_size) * self.font_scale).floor() as u32).max(1)
    }
}

/// Optional positional arguments, still in their textual form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionalArgs {
    /// Base size, a positive integer.
    pub size: Option<String>,
    /// Background color, `#RRGGBB`.
    pub bg_color: Option<String>,
    /// Text color, `#RRGGBB`.
    pub text_color: Option<String>,
    /// Background opacity in `[0, 1]`.
    pub opacity: Option<String>,
    /// `simple`, `badge` or `rounded`.
    pub style: Option<String>,
}

/// One fully specified label render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Text drawn on the label. Not required to be numeric.
    pub label: String,
    /// PNG destination. The parent directory must exist.
    pub output_path: PathBuf,
    /// Drives font size and badge height.
    pub base_size: u32,
    /// Background shape color.
    pub background: Rgb8,
    /// Text color; text is always drawn opaque.
    pub text_color: Rgb8,
    /// Background alpha in `[0, 1]`.
    pub opacity: f64,
    /// Framing style.
    pub style: LabelStyle,
}

impl RenderRequest {
    /// A request with every optional field taken from `config`.
    pub fn new(
        label: impl Into<String>,
        output_path: impl Into<PathBuf>,
        config: &RenderConfig,
    ) -> Self {
        Self {
            label: label.into(),
            output_path: output_path.into(),
            base_size: config.default_size,
            background: config.default_background,
            text_color: config.default_text_color,
            opacity: config.default_opacity,
            style: config.default_style,
        }
    }

    /// Map textual arguments onto a validated request, filling gaps from `config`.
    pub fn from_args(
        label: impl Into<String>,
        output_path: impl Into<PathBuf>,
        args: &OptionalArgs,
        config: &RenderConfig,
    ) -> ClipmarkResult<Self> {
        let mut req = Self::new(label, output_path, config);
        if let Some(s) = &args.size {
            req.base_size = s
                .trim()
                .parse()
                .map_err(|_| ClipmarkError::config(format!("invalid size \"{s}\"")))?;
        }
        if let Some(s) = &args.bg_color {
            req.background = parse_hex_rgb(s)?;
        }
        if let Some(s) = &args.text_color {
            req.text_color = parse_hex_rgb(s)?;
        }
        if let Some(s) = &args.opacity {
            req.opacity = s
                .trim()
                .parse()
                .map_err(|_| ClipmarkError::config(format!("invalid opacity \"{s}\"")))?;
        }
        if let Some(s) = &args.style {
            req.style = s.parse()?;
        }
        req.validate()?;
        Ok(req)
    }

    /// Check the numeric ranges the renderer relies on.
    pub fn validate(&self) -> ClipmarkResult<()> {
        if self.base_size == 0 {
            return Err(ClipmarkError::config("size must be > 0"));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ClipmarkError::config(format!(
                "opacity {} outside [0, 1]",
                self.opacity
            )));
        }
        Ok(())
    }

    /// Destination path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod tests;
