//! Where the rendered label goes on a video frame, and the JSON indicator description that
//! drives both the render and its placement.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::assets::color::parse_hex_rgb;
use crate::foundation::error::{ClipmarkError, ClipmarkResult};
use crate::render::style::LabelStyle;
use crate::request::{OptionalArgs, RenderConfig, RenderRequest};

/// Gap between the overlay and the frame edges, in pixels.
pub const OVERLAY_PAD: u32 = 20;
/// Base size assumed for indicators that do not set one.
pub const INDICATOR_DEFAULT_SIZE: u32 = 90;

/// Frame corner the overlay is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left (default).
    #[default]
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-left.
    BottomLeft,
    /// Bottom-right.
    BottomRight,
}

impl Corner {
    /// `true` for the two right-hand corners.
    pub fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    /// `true` for the two bottom corners.
    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

impl FromStr for Corner {
    type Err = ClipmarkError;

    /// Lenient: any name mentioning `right` and/or `bottom` selects that side.
    fn from_str(s: &str) -> ClipmarkResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(ClipmarkError::config("empty overlay position"));
        }
        Ok(match (s.contains("right"), s.contains("bottom")) {
            (false, false) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (true, true) => Corner::BottomRight,
        })
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        })
    }
}

/// Overlay position for a label of nominal `size` anchored at `corner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPlacement {
    /// Anchor corner.
    pub corner: Corner,
    /// Distance from the anchored edges.
    pub pad: u32,
    /// Nominal label size (the base size, not the measured canvas).
    pub size: u32,
}

impl OverlayPlacement {
    /// Placement with the standard [`OVERLAY_PAD`].
    pub fn new(corner: Corner, size: u32) -> Self {
        Self {
            corner,
            pad: OVERLAY_PAD,
            size,
        }
    }

    /// `overlay` filter `x`/`y` expressions; `W`/`H` are the main frame dimensions.
    pub fn ffmpeg_xy(&self) -> (String, String) {
        let offset = self.pad + self.size;
        let x = if self.corner.is_right() {
            format!("W-{offset}")
        } else {
            self.pad.to_string()
        };
        let y = if self.corner.is_bottom() {
            format!("H-{offset}")
        } else {
            self.pad.to_string()
        };
        (x, y)
    }
}

/// How long the overlay stays on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// For the whole clip.
    #[default]
    Permanent,
    /// Only for the first `duration` seconds.
    Temporal,
    /// Any other caller-defined kind (`none`, `numero`, ...); shown like [`Permanent`](Self::Permanent).
    #[serde(other)]
    Other,
}

/// Clip-number indicator as described by the job's effect settings.
///
/// Every field is optional; omitted ones fall back to the indicator defaults (base size
/// [`INDICATOR_DEFAULT_SIZE`], the rest from [`RenderConfig`]). Fields this crate does not
/// use, such as `label`, are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSpec {
    /// Corner name, e.g. `top-right`.
    #[serde(default)]
    pub position: Option<String>,
    /// Base size; `0` counts as unset.
    #[serde(default)]
    pub size: Option<u32>,
    /// Background color, `#RRGGBB`.
    #[serde(default)]
    pub bg_color: Option<String>,
    /// Text color, `#RRGGBB`.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Background opacity in `[0, 1]`.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// Framing style.
    #[serde(default)]
    pub style: Option<LabelStyle>,
    /// Permanent or temporal.
    #[serde(default, rename = "type")]
    pub kind: IndicatorKind,
    /// Seconds on screen for temporal indicators.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl IndicatorSpec {
    /// Parse an indicator JSON object.
    pub fn from_json(json: &str) -> ClipmarkResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ClipmarkError::config(format!("invalid indicator JSON: {e}")))
    }

    /// Read and parse an indicator JSON file.
    pub fn from_path(path: &Path) -> ClipmarkResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ClipmarkError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Base size, [`INDICATOR_DEFAULT_SIZE`] when missing or zero.
    pub fn base_size(&self) -> u32 {
        self.size
            .filter(|&s| s > 0)
            .unwrap_or(INDICATOR_DEFAULT_SIZE)
    }

    /// `config` with its defaults replaced by the values this indicator sets.
    pub fn apply_defaults(&self, config: &RenderConfig) -> ClipmarkResult<RenderConfig> {
        let mut cfg = config.clone();
        cfg.default_size = self.base_size();
        if let Some(s) = &self.bg_color {
            cfg.default_background = parse_hex_rgb(s)?;
        }
        if let Some(s) = &self.text_color {
            cfg.default_text_color = parse_hex_rgb(s)?;
        }
        if let Some(o) = self.opacity {
            cfg.default_opacity = o;
        }
        if let Some(style) = self.style {
            cfg.default_style = style;
        }
        Ok(cfg)
    }

    /// Validated render request for `label` written to `output_path`.
    pub fn to_request(
        &self,
        label: impl Into<String>,
        output_path: impl Into<PathBuf>,
        config: &RenderConfig,
    ) -> ClipmarkResult<RenderRequest> {
        let cfg = self.apply_defaults(config)?;
        RenderRequest::from_args(label, output_path, &OptionalArgs::default(), &cfg)
    }

    /// Anchor corner, defaulting to top-left.
    pub fn corner(&self) -> ClipmarkResult<Corner> {
        self.position
            .as_deref()
            .map_or(Ok(Corner::TopLeft), str::parse::<Corner>)
    }

    /// Overlay placement for this indicator.
    pub fn placement(&self) -> ClipmarkResult<OverlayPlacement> {
        Ok(OverlayPlacement::new(self.corner()?, self.base_size()))
    }

    /// On-screen duration in seconds, `None` when the overlay is permanent.
    pub fn visible_for(&self) -> Option<f64> {
        match self.kind {
            IndicatorKind::Permanent | IndicatorKind::Other => None,
            IndicatorKind::Temporal => self.duration,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/overlay.rs"]
mod tests;
