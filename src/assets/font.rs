use std::path::{Path, PathBuf};

use crate::assets::text::TextLayoutEngine;
use crate::foundation::error::{ClipmarkError, ClipmarkResult};

/// Regular and bold DejaVu faces shipped by most Linux distributions.
pub const DEJAVU_SANS_BOLD: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
/// See [`DEJAVU_SANS_BOLD`].
pub const DEJAVU_SANS: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// One candidate in the ordered font search list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A truetype/opentype file on disk.
    File(PathBuf),
    /// The built-in bitmap face. Never fails to load and ignores the requested size.
    Builtin,
}

impl FontSource {
    /// Default search order: DejaVu Sans Bold, DejaVu Sans, built-in.
    pub fn default_chain() -> Vec<FontSource> {
        vec![
            FontSource::File(PathBuf::from(DEJAVU_SANS_BOLD)),
            FontSource::File(PathBuf::from(DEJAVU_SANS)),
            FontSource::Builtin,
        ]
    }
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::File(p) => write!(f, "{}", p.display()),
            FontSource::Builtin => f.write_str("builtin"),
        }
    }
}

/// An outline face loaded from disk, with its own layout contexts.
pub(crate) struct OutlineFont {
    pub(crate) path: PathBuf,
    pub(crate) family: String,
    pub(crate) size_px: f32,
    pub(crate) data: vello_cpu::peniko::FontData,
    pub(crate) engine: TextLayoutEngine,
}

/// The single font active for one render.
pub struct ResolvedFont {
    pub(crate) face: Face,
}

pub(crate) enum Face {
    Outline(Box<OutlineFont>),
    Builtin,
}

impl ResolvedFont {
    /// The built-in bitmap face.
    pub fn builtin() -> Self {
        Self {
            face: Face::Builtin,
        }
    }

    /// `true` when the built-in bitmap face is in use.
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin)
    }

    /// Where the face came from.
    pub fn source(&self) -> FontSource {
        match &self.face {
            Face::Outline(o) => FontSource::File(o.path.clone()),
            Face::Builtin => FontSource::Builtin,
        }
    }

    /// Point size for outline faces; `None` for the built-in face.
    pub fn size_px(&self) -> Option<f32> {
        match &self.face {
            Face::Outline(o) => Some(o.size_px),
            Face::Builtin => None,
        }
    }
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.face {
            Face::Outline(o) => f
                .debug_struct("ResolvedFont")
                .field("path", &o.path)
                .field("family", &o.family)
                .field("size_px", &o.size_px)
                .finish(),
            Face::Builtin => f.write_str("ResolvedFont(builtin)"),
        }
    }
}

/// Load one outline font file at `size_px`.
pub(crate) fn load_font_file(path: &Path, size_px: u32) -> ClipmarkResult<ResolvedFont> {
    if size_px == 0 {
        return Err(ClipmarkError::font("font size must be > 0"));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| ClipmarkError::font(format!("read '{}': {e}", path.display())))?;

    let mut engine = TextLayoutEngine::new();
    let family = engine.register_font(&bytes)?;
    let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);

    Ok(ResolvedFont {
        face: Face::Outline(Box::new(OutlineFont {
            path: path.to_path_buf(),
            family,
            size_px: size_px as f32,
            data,
            engine,
        })),
    })
}

/// Try each source in order and return the first that loads.
///
/// Total: failures are logged and skipped, and the built-in face ends the chain even when
/// `sources` does not list it.
#[tracing::instrument(skip(sources), fields(candidates = sources.len()))]
pub fn resolve_font(sources: &[FontSource], size_px: u32) -> ResolvedFont {
    for source in sources {
        match source {
            FontSource::Builtin => {
                tracing::debug!("using built-in bitmap font");
                return ResolvedFont::builtin();
            }
            FontSource::File(path) => match load_font_file(path, size_px) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), size_px, "loaded font");
                    return font;
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "font candidate skipped");
                }
            },
        }
    }

    tracing::debug!("no configured font loaded; falling back to built-in bitmap font");
    ResolvedFont::builtin()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
