use pretty_assertions::assert_eq;
use raster_gfx::{Bitmap, BitmapEditSession, Color, GfxError, LockMode, Rectangle};

#[test]
fn test_buffer_size() {
    let session = BitmapEditSession::from_bitmap(Bitmap::new(7, 5).unwrap()).unwrap();
    assert_eq!(4 * 7 * 5, session.buffer().unwrap().len());
}

#[test]
fn test_size_limit() {
    // 8 * 20000 * 20000 bytes exceeds the signed 32-bit limit; the bitmap
    // itself is refused before anything is allocated.
    assert!(matches!(Bitmap::new(20000, 20000), Err(GfxError::ResourceLimitExceeded { .. })));
}

#[test]
fn test_buffer_synchronized_on_construction() {
    let mut bitmap = Bitmap::new(4, 4).unwrap();
    {
        let mut view = bitmap.lock(LockMode::ReadWrite).unwrap();
        view.set(0, 0, Color::rgb(1, 2, 3)).unwrap();
    }

    let session = BitmapEditSession::from_bitmap(bitmap).unwrap();
    let buffer = session.buffer().unwrap();
    let expected = Color::rgb(1, 2, 3).to_argb().to_ne_bytes();
    assert_eq!(&expected, &buffer[0..4]);
}

#[test]
fn test_flush_materializes_drawing() {
    let mut session = BitmapEditSession::from_bitmap(Bitmap::new(8, 8).unwrap()).unwrap();

    let surface = session.surface_mut().unwrap();
    surface.fill_rect(Rectangle::from(0, 0, 8, 8), Color::rgb(0xAA, 0xBB, 0xCC));
    assert!(surface.has_pending());

    // the heap buffer does not change until the session is flushed
    assert_eq!(&[0, 0, 0, 0], &session.buffer().unwrap()[0..4]);

    session.flush().unwrap();
    assert!(!session.surface_mut().unwrap().has_pending());

    let expected = Color::rgb(0xAA, 0xBB, 0xCC).to_argb().to_ne_bytes();
    let buffer = session.buffer().unwrap();
    assert_eq!(4 * 8 * 8, buffer.len());
    for pixel in buffer.chunks_exact(4) {
        assert_eq!(&expected, pixel);
    }
}

#[test]
fn test_surface_clipping() {
    let mut session = BitmapEditSession::from_bitmap(Bitmap::new(4, 4).unwrap()).unwrap();

    let surface = session.surface_mut().unwrap();
    surface.fill_rect(Rectangle::from(2, 2, 100, 100), Color::WHITE);
    surface.set_pixel((-5, -5), Color::WHITE);
    session.flush().unwrap();

    let buffer = session.buffer().unwrap();
    let white = Color::WHITE.to_argb().to_ne_bytes();
    let index = |x: usize, y: usize| 4 * (4 * y + x);
    assert_eq!(&[0, 0, 0, 0], &buffer[index(0, 0)..index(0, 0) + 4]);
    assert_eq!(&[0, 0, 0, 0], &buffer[index(1, 2)..index(1, 2) + 4]);
    assert_eq!(&white, &buffer[index(2, 2)..index(2, 2) + 4]);
    assert_eq!(&white, &buffer[index(3, 3)..index(3, 3) + 4]);
}

#[test]
fn test_draw_line() {
    let mut session = BitmapEditSession::from_bitmap(Bitmap::new(4, 4).unwrap()).unwrap();

    session.surface_mut().unwrap().draw_line((0, 0), (3, 3), Color::WHITE);
    session.flush().unwrap();

    let buffer = session.buffer().unwrap();
    let white = Color::WHITE.to_argb().to_ne_bytes();
    for i in 0..4 {
        let offset = 4 * (4 * i + i);
        assert_eq!(&white, &buffer[offset..offset + 4]);
    }
}

#[test]
fn test_use_after_close() {
    let mut session = BitmapEditSession::from_bitmap(Bitmap::new(4, 4).unwrap()).unwrap();

    assert!(!session.is_closed());
    session.close();
    assert!(session.is_closed());

    assert!(matches!(session.flush(), Err(GfxError::Disposed { .. })));
    assert!(matches!(session.bitmap(), Err(GfxError::Disposed { .. })));
    assert!(matches!(session.surface_mut(), Err(GfxError::Disposed { .. })));
    assert!(matches!(session.buffer(), Err(GfxError::Disposed { .. })));

    session.close();
    assert!(session.is_closed());
}
