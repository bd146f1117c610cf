//! Clipmark renders small transparent PNG overlays carrying a clip number, ready to be burned
//! into video clips.
//!
//! - Build a [`RenderRequest`] (directly, from textual arguments, or from an [`IndicatorSpec`])
//! - Render it with [`render_label`] / write it with [`render_to_file`]
//! - Position it on the frame with [`OverlayPlacement`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Output encoding.
pub mod encode;
/// Overlay placement and indicator descriptions.
pub mod overlay;
/// Label rasterization.
pub mod render;
/// Render inputs and configuration.
pub mod request;

pub use crate::assets::color::parse_hex_rgb;
pub use crate::assets::font::{DEJAVU_SANS, DEJAVU_SANS_BOLD, FontSource, ResolvedFont, resolve_font};
pub use crate::foundation::core::{CanvasSize, Rgb8, TextMetrics};
pub use crate::foundation::error::{ClipmarkError, ClipmarkResult};

pub use crate::encode::png::{encode_png, write_png};
pub use crate::overlay::{Corner, IndicatorKind, IndicatorSpec, OverlayPlacement};
pub use crate::render::label::{
    LabelImage, measure_text, render_label, render_to_file, render_with_font,
};
pub use crate::render::style::{BackgroundShape, LabelStyle};
pub use crate::request::{FONT_ENV, OptionalArgs, RenderConfig, RenderRequest};
