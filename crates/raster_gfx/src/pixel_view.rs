use crate::{Bitmap, Color, GfxError, Result};

/// Access mode requested when locking a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    ReadOnly,
    ReadWrite,
}

/// Pixel format of a locked buffer. Only packed 32-bit ARGB is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Argb32,
}

/// Descriptor of a locked pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDescriptor {
    pub width: i32,
    pub height: i32,
    pub format: PixelFormat,
}

/// A bounds-checked view over the locked pixel buffer of a [`Bitmap`].
///
/// The view holds the lock for its whole lifetime; dropping it or calling
/// [`PixelView::close`] returns the buffer to the bitmap. The bitmap itself
/// is never freed by the view. Writes through a view locked with
/// [`LockMode::ReadOnly`] are a caller contract and are not rejected.
pub struct PixelView<'a> {
    bitmap: &'a mut Bitmap,
    mode: LockMode,
    closed: bool,
}

impl<'a> PixelView<'a> {
    pub(crate) fn new(bitmap: &'a mut Bitmap, mode: LockMode) -> Result<Self> {
        Ok(Self { bitmap, mode, closed: false })
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails with `Disposed` after close and with `OutOfBounds` outside
    /// `[0, width) x [0, height)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color> {
        self.ensure_open()?;
        let offset = self.offset(x, y)?;
        Ok(Color::from_argb(self.bitmap.words()[offset]))
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails with `Disposed` after close and with `OutOfBounds` outside
    /// `[0, width) x [0, height)`.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.ensure_open()?;
        let offset = self.offset(x, y)?;
        self.bitmap.words_mut()[offset] = color.to_argb();
        Ok(())
    }

    /// Descriptor of the locked buffer.
    pub fn descriptor(&self) -> Result<LockDescriptor> {
        self.ensure_open()?;
        Ok(LockDescriptor {
            width: self.bitmap.get_width(),
            height: self.bitmap.get_height(),
            format: PixelFormat::Argb32,
        })
    }

    /// The raw packed-ARGB words of the locked buffer.
    pub fn words(&self) -> Result<&[u32]> {
        self.ensure_open()?;
        Ok(self.bitmap.words())
    }

    /// The bitmap this view was locked from.
    pub fn bitmap(&self) -> Result<&Bitmap> {
        self.ensure_open()?;
        Ok(self.bitmap)
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the lock without freeing the bitmap. Idempotent.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GfxError::disposed("PixelView"));
        }
        Ok(())
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize> {
        let width = self.bitmap.get_width();
        let height = self.bitmap.get_height();
        if x < 0 || x >= width || y < 0 || y >= height {
            return Err(GfxError::OutOfBounds { x, y, width, height });
        }
        Ok((width * y + x) as usize)
    }
}

impl std::fmt::Debug for PixelView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelView")
            .field("size", &self.bitmap.get_size())
            .field("mode", &self.mode)
            .field("closed", &self.closed)
            .finish()
    }
}
