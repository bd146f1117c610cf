use std::str::FromStr;

use crate::foundation::core::{CanvasSize, TextMetrics};
use crate::foundation::error::{ClipmarkError, ClipmarkResult};

/// Fixed padding around the text for [`LabelStyle::Simple`].
const SIMPLE_PAD: u32 = 10;
/// Horizontal padding for [`LabelStyle::Badge`].
const BADGE_PAD_X: u32 = 40;
/// Added to the base size to get the badge height.
const BADGE_PAD_Y: u32 = 20;
/// Added to half the larger text dimension to get the circle radius.
const ROUNDED_PAD: f64 = 20.0;

/// How the label is framed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Text only, no background.
    Simple,
    /// Rectangle behind the text; height follows the base size.
    #[default]
    Badge,
    /// Circle (square canvas, inscribed ellipse) behind the text.
    Rounded,
}

/// Background primitive drawn before the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundShape {
    /// Fill the whole canvas.
    Rect,
    /// Fill the ellipse inscribed in the canvas.
    Ellipse,
}

impl LabelStyle {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelStyle::Simple => "simple",
            LabelStyle::Badge => "badge",
            LabelStyle::Rounded => "rounded",
        }
    }

    /// Canvas dimensions for text with `metrics` at `base_size`.
    pub fn canvas_size(self, metrics: TextMetrics, base_size: u32) -> CanvasSize {
        let (tw, th) = (metrics.width(), metrics.height());
        match self {
            LabelStyle::Simple => CanvasSize {
                width: tw + SIMPLE_PAD,
                height: th + SIMPLE_PAD,
            },
            LabelStyle::Badge => CanvasSize {
                width: tw + BADGE_PAD_X,
                height: base_size.saturating_add(BADGE_PAD_Y),
            },
            LabelStyle::Rounded => {
                let radius = f64::from(tw.max(th)) / 2.0 + ROUNDED_PAD;
                let side = (radius * 2.0).floor() as u32;
                CanvasSize {
                    width: side,
                    height: side,
                }
            }
        }
    }

    /// Background drawn for this style, if any.
    pub fn background(self) -> Option<BackgroundShape> {
        match self {
            LabelStyle::Simple => None,
            LabelStyle::Badge => Some(BackgroundShape::Rect),
            LabelStyle::Rounded => Some(BackgroundShape::Ellipse),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = ClipmarkError;

    fn from_str(s: &str) -> ClipmarkResult<Self> {
        match s {
            "simple" => Ok(LabelStyle::Simple),
            "badge" => Ok(LabelStyle::Badge),
            "rounded" => Ok(LabelStyle::Rounded),
            other => Err(ClipmarkError::config(format!(
                "unknown style \"{other}\" (expected simple, badge or rounded)"
            ))),
        }
    }
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
