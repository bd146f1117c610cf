use crate::foundation::core::Rgb8;
use crate::foundation::error::{ClipmarkError, ClipmarkResult};

/// Parse a `#RRGGBB` (leading `#` optional, case-insensitive) color string.
pub fn parse_hex_rgb(s: &str) -> ClipmarkResult<Rgb8> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ClipmarkError::config(format!(
            "invalid color \"{s}\": expected 6 hex digits as #RRGGBB"
        )));
    }

    fn hex_byte(pair: &str) -> ClipmarkResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ClipmarkError::config(format!("invalid hex byte \"{pair}\"")))
    }

    Ok(Rgb8::new(
        hex_byte(&hex[0..2])?,
        hex_byte(&hex[2..4])?,
        hex_byte(&hex[4..6])?,
    ))
}
