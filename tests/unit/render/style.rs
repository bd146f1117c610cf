use super::*;

fn metrics(w: i32, h: i32) -> TextMetrics {
    TextMetrics {
        left: 3,
        top: 11,
        right: 3 + w,
        bottom: 11 + h,
    }
}

#[test]
fn simple_pads_text_by_ten() {
    let size = LabelStyle::Simple.canvas_size(metrics(27, 33), 75);
    assert_eq!(size, CanvasSize { width: 37, height: 43 });
}

#[test]
fn badge_height_ignores_text() {
    for (w, h) in [(10, 30), (80, 31), (200, 12)] {
        let size = LabelStyle::Badge.canvas_size(metrics(w, h), 75);
        assert_eq!(size.height, 95);
        assert_eq!(size.width, w as u32 + 40);
    }
    assert_eq!(LabelStyle::Badge.canvas_size(metrics(5, 5), 90).height, 110);
}

#[test]
fn rounded_is_square_from_larger_dimension() {
    let size = LabelStyle::Rounded.canvas_size(metrics(24, 33), 75);
    assert_eq!(size, CanvasSize { width: 73, height: 73 });

    let size = LabelStyle::Rounded.canvas_size(metrics(60, 33), 75);
    assert_eq!(size, CanvasSize { width: 100, height: 100 });
}

#[test]
fn empty_text_still_gets_padding() {
    let empty = TextMetrics::default();
    assert_eq!(
        LabelStyle::Simple.canvas_size(empty, 75),
        CanvasSize { width: 10, height: 10 }
    );
    assert_eq!(
        LabelStyle::Rounded.canvas_size(empty, 75),
        CanvasSize { width: 40, height: 40 }
    );
}

#[test]
fn parses_known_styles_only() {
    assert_eq!("simple".parse::<LabelStyle>().unwrap(), LabelStyle::Simple);
    assert_eq!("badge".parse::<LabelStyle>().unwrap(), LabelStyle::Badge);
    assert_eq!("rounded".parse::<LabelStyle>().unwrap(), LabelStyle::Rounded);
    for bad in ["", "Badge", "circle", "square"] {
        let err = bad.parse::<LabelStyle>().unwrap_err();
        assert!(matches!(err, ClipmarkError::Config(_)));
    }
    assert_eq!(LabelStyle::default(), LabelStyle::Badge);
}

#[test]
fn backgrounds_follow_style() {
    assert_eq!(LabelStyle::Simple.background(), None);
    assert_eq!(LabelStyle::Badge.background(), Some(BackgroundShape::Rect));
    assert_eq!(LabelStyle::Rounded.background(), Some(BackgroundShape::Ellipse));
}
