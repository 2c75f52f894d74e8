use raster_gfx::{Brush, Color, Font, FontStyle, GfxError, TextFormatFlags, TextRenderOptions};

fn test_font() -> Font {
    Font::new("Test Family", 10.0, FontStyle::empty()).unwrap()
}

#[test]
fn test_line_height_roundtrip() {
    let mut options = TextRenderOptions::new(test_font(), 10.0).unwrap();
    assert_eq!(10.0, options.line_height().unwrap());

    options.set_line_height(12.5).unwrap();
    assert_eq!(12.5, options.line_height().unwrap());

    options.set_line_height(0.0).unwrap();
    assert_eq!(0.0, options.line_height().unwrap());
}

#[test]
fn test_invalid_line_height() {
    for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
        assert!(
            matches!(TextRenderOptions::new(test_font(), value), Err(GfxError::InvalidArgument { .. })),
            "constructor accepted {value}"
        );
    }

    // a rejected setter leaves the prior value untouched
    let mut options = TextRenderOptions::new(test_font(), 10.0).unwrap();
    for value in [f32::NAN, f32::INFINITY, -0.5] {
        assert!(options.set_line_height(value).is_err());
        assert_eq!(10.0, options.line_height().unwrap());
    }
}

#[test]
fn test_defaults() {
    let options = TextRenderOptions::new(test_font(), 10.0).unwrap();

    let brushes = options.brushes().unwrap();
    assert_eq!(1, brushes.len());
    assert_eq!(Brush::Solid(Color::WHITE), brushes[0]);

    assert_eq!(0, options.shadow_index().unwrap());
    assert!(!options.draw_shadow().unwrap());
    assert!(!options.antialias().unwrap());
    assert_eq!(
        TextFormatFlags::TYPOGRAPHIC | TextFormatFlags::NO_WRAP,
        options.format().unwrap().flags
    );
}

#[test]
fn test_with_family() {
    let options = TextRenderOptions::with_family("Test Family", 12.0, 14.0, FontStyle::BOLD).unwrap();

    let font = options.font().unwrap();
    assert_eq!("Test Family", font.family());
    assert_eq!(12.0, font.size());
    assert_eq!(FontStyle::BOLD, font.style());
    assert_eq!(14.0, options.line_height().unwrap());
}

#[test]
fn test_invalid_font_arguments() {
    assert!(matches!(
        Font::new("", 10.0, FontStyle::empty()),
        Err(GfxError::InvalidArgument { name: "family", .. })
    ));
    assert!(matches!(
        Font::new("Test Family", -1.0, FontStyle::empty()),
        Err(GfxError::InvalidArgument { name: "size", .. })
    ));
    assert!(matches!(
        TextRenderOptions::with_family("Test Family", f32::NAN, 10.0, FontStyle::empty()),
        Err(GfxError::InvalidArgument { name: "size", .. })
    ));
}

#[test]
fn test_shadow_index() {
    let mut options = TextRenderOptions::new(test_font(), 10.0).unwrap();

    options.set_shadow_index(3).unwrap();
    assert_eq!(3, options.shadow_index().unwrap());

    assert!(matches!(
        options.set_shadow_index(-1),
        Err(GfxError::InvalidArgument { name: "shadow_index", .. })
    ));
    assert_eq!(3, options.shadow_index().unwrap());
}

#[test]
fn test_brushes() {
    let mut options = TextRenderOptions::new(test_font(), 10.0).unwrap();

    options.push_brush(Brush::Solid(Color::rgb(0xFF, 0, 0))).unwrap();
    assert_eq!(2, options.brushes().unwrap().len());

    assert!(matches!(
        options.set_brushes(Vec::new()),
        Err(GfxError::InvalidArgument { name: "brushes", .. })
    ));
    assert_eq!(2, options.brushes().unwrap().len());

    options.set_brushes(vec![Brush::Solid(Color::BLACK)]).unwrap();
    assert_eq!(1, options.brushes().unwrap().len());
}

#[test]
fn test_use_after_close() {
    let mut options = TextRenderOptions::new(test_font(), 10.0).unwrap();

    assert!(!options.is_closed());
    options.close();
    assert!(options.is_closed());

    assert!(matches!(options.line_height(), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.brushes(), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.font(), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.format(), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.shadow_index(), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.set_line_height(5.0), Err(GfxError::Disposed { .. })));
    assert!(matches!(options.set_draw_shadow(true), Err(GfxError::Disposed { .. })));

    options.close();
    assert!(options.is_closed());
}
