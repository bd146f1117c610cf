/// Convert premultiplied RGBA8 pixels into straight alpha, in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// `round(opacity * 255)` for an opacity already validated to `[0, 1]`, ties to even.
///
/// `0.7 * 255` is exactly `178.5` in f64, so ties must go to even to land on 178.
pub(crate) fn opacity_to_alpha(opacity: f64) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8
}
