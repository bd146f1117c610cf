use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::{ClipmarkError, ClipmarkResult};
use crate::render::label::LabelImage;

/// Encode straight-alpha RGBA8 pixels as PNG bytes.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> ClipmarkResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(rgba, width, height, image::ExtendedColorType::Rgba8)
        .with_context(|| format!("encode {width}x{height} png"))?;
    Ok(out)
}

/// Write `label` as a PNG at `path`.
///
/// The image is encoded in memory first, so an encoder failure never creates the file.
/// Parent directories are not created.
pub fn write_png(path: &Path, label: &LabelImage) -> ClipmarkResult<()> {
    let bytes = encode_png(label.width, label.height, &label.data)?;
    std::fs::write(path, bytes).map_err(|e| ClipmarkError::io(path, e))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}
