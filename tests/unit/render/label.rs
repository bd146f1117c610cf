use super::*;
use crate::assets::font::{DEJAVU_SANS_BOLD, FontSource};
use crate::foundation::core::Rgb8;

fn request(label: &str, style: LabelStyle, opacity: f64) -> RenderRequest {
    let mut req = RenderRequest::new(label, "unused.png", &RenderConfig::default());
    req.style = style;
    req.opacity = opacity;
    req
}

fn builtin_config() -> RenderConfig {
    RenderConfig {
        font_sources: vec![FontSource::Builtin],
        ..RenderConfig::default()
    }
}

#[test]
fn builtin_seven_measures_its_bitmap() {
    let mut font = ResolvedFont::builtin();
    let m = measure_text(&mut font, "7").unwrap();
    assert_eq!(
        m,
        TextMetrics {
            left: 0,
            top: 0,
            right: 10,
            bottom: 14,
        }
    );
}

#[test]
fn empty_label_measures_zero() {
    let mut font = ResolvedFont::builtin();
    assert_eq!(measure_text(&mut font, "").unwrap(), TextMetrics::default());
    assert_eq!(measure_text(&mut font, "   ").unwrap(), TextMetrics::default());
}

#[test]
fn badge_draws_translucent_rect_and_opaque_text() {
    let img = render_label(&request("7", LabelStyle::Badge, 0.7), &builtin_config()).unwrap();
    assert_eq!((img.width, img.height), (50, 95));

    let corner = img.pixel(0, 0).unwrap();
    assert_eq!(corner[3], 178);
    assert_eq!(&corner[..3], &[0, 0, 0]);
    let far = img.pixel(49, 94).unwrap();
    assert_eq!(far[3], 178);

    // Top bar of the "7" starts at the centered ink origin (20, 41).
    let ink = img.pixel(25, 41).unwrap();
    assert_eq!(ink[3], 255);
    assert!(ink[..3].iter().all(|&c| c >= 254));
}

#[test]
fn text_stays_opaque_when_background_is_invisible() {
    let img = render_label(&request("7", LabelStyle::Badge, 0.0), &builtin_config()).unwrap();
    assert_eq!(img.pixel(0, 0).unwrap()[3], 0);
    assert_eq!(img.pixel(25, 41).unwrap()[3], 255);
}

#[test]
fn simple_has_no_background() {
    let img = render_label(&request("7", LabelStyle::Simple, 0.7), &builtin_config()).unwrap();
    assert_eq!((img.width, img.height), (20, 24));
    for (x, y) in [(0, 0), (19, 0), (0, 23), (19, 23)] {
        assert_eq!(img.pixel(x, y).unwrap()[3], 0);
    }
    assert_eq!(img.pixel(5, 5).unwrap(), [255, 255, 255, 255]);

    // Every non-transparent pixel belongs to a glyph cell (4 pixels per cell at scale 2).
    let inked = img.data.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert_eq!(inked, 4 * crate::assets::builtin_font::lit_cells("7").count());
}

#[test]
fn rounded_is_square_with_transparent_corners() {
    let img = render_label(&request("7", LabelStyle::Rounded, 0.7), &builtin_config()).unwrap();
    assert_eq!((img.width, img.height), (54, 54));
    for (x, y) in [(0, 0), (53, 0), (0, 53), (53, 53)] {
        assert_eq!(img.pixel(x, y).unwrap()[3], 0);
    }
    assert_eq!(img.pixel(27, 2).unwrap()[3], 178);
    assert_eq!(img.pixel(2, 27).unwrap()[3], 178);
}

#[test]
fn badge_height_tracks_base_size_not_digits() {
    let cfg = builtin_config();
    for label in ["1", "42", "1234567"] {
        let mut req = request(label, LabelStyle::Badge, 0.7);
        req.base_size = 90;
        let img = render_label(&req, &cfg).unwrap();
        assert_eq!(img.height, 110);
        assert_eq!(img.width, img.metrics.width() + 40);
    }
}

#[test]
fn colors_are_applied() {
    let mut req = request("8", LabelStyle::Badge, 1.0);
    req.background = Rgb8::new(0x1a, 0x2b, 0x3c);
    req.text_color = Rgb8::new(255, 0, 0);
    let img = render_label(&req, &builtin_config()).unwrap();

    let bg = img.pixel(1, 1).unwrap();
    assert_eq!(bg, [0x1a, 0x2b, 0x3c, 255]);

    let red = img
        .data
        .chunks_exact(4)
        .filter(|px| px == &[255, 0, 0, 255])
        .count();
    assert_eq!(red, 4 * crate::assets::builtin_font::lit_cells("8").count());
}

#[test]
fn rendering_is_deterministic() {
    let cfg = builtin_config();
    for style in [LabelStyle::Simple, LabelStyle::Badge, LabelStyle::Rounded] {
        let req = request("19", style, 0.7);
        let a = render_label(&req, &cfg).unwrap();
        let b = render_label(&req, &cfg).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn invalid_opacity_fails_before_drawing() {
    let mut font = ResolvedFont::builtin();
    let err = render_with_font(&request("1", LabelStyle::Badge, 1.5), &mut font).unwrap_err();
    assert!(matches!(err, ClipmarkError::Config(_)));

    let mut zero = request("1", LabelStyle::Badge, 0.7);
    zero.base_size = 0;
    let err = render_label(&zero, &builtin_config()).unwrap_err();
    assert!(matches!(err, ClipmarkError::Config(_)));
}

#[test]
fn outline_font_follows_sizing_formulas() {
    if !std::path::Path::new(DEJAVU_SANS_BOLD).is_file() {
        return;
    }
    let cfg = RenderConfig::default();
    let mut font = resolve_font(&cfg.font_sources, cfg.font_size_px(75));
    assert!(!font.is_builtin());

    let m = measure_text(&mut font, "12").unwrap();
    assert!(m.width() > 0 && m.height() > 0);

    let simple = render_with_font(&request("12", LabelStyle::Simple, 0.7), &mut font).unwrap();
    assert_eq!(simple.width, m.width() + 10);
    assert_eq!(simple.height, m.height() + 10);

    let badge = render_with_font(&request("12", LabelStyle::Badge, 0.7), &mut font).unwrap();
    assert_eq!((badge.width, badge.height), (m.width() + 40, 95));
    assert_eq!(badge.pixel(0, 0).unwrap()[3], 178);
    assert!(badge.data.chunks_exact(4).any(|px| px[3] == 255));

    let rounded = render_with_font(&request("12", LabelStyle::Rounded, 0.7), &mut font).unwrap();
    assert_eq!(rounded.width, rounded.height);
    assert_eq!(rounded.width, m.width().max(m.height()) + 40);
}

#[test]
fn to_rgba_image_matches_buffer() {
    let img = render_label(&request("3", LabelStyle::Simple, 0.7), &builtin_config()).unwrap();
    let rgba = img.to_rgba_image().unwrap();
    assert_eq!(rgba.dimensions(), (img.width, img.height));
    assert_eq!(rgba.get_pixel(5, 5).0, img.pixel(5, 5).unwrap());
    assert_eq!(img.pixel(img.width, 0), None);
}
