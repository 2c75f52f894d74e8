use std::io::{Read, Seek};
use std::path::Path;

use crate::{checked_buffer_len, Bitmap, DrawSurface, GfxError, LockMode, Result};

/// An editing session over an owned bitmap.
///
/// The session owns the bitmap, a [`DrawSurface`] bound to it, and a heap
/// byte buffer of exactly `4 * width * height` bytes holding a copy of the
/// raw pixel data. The heap buffer is synchronized from the bitmap on
/// construction and on every [`BitmapEditSession::flush`]; it is the only
/// caller-visible snapshot of drawing output, so callers must flush after
/// drawing and before reading it.
pub struct BitmapEditSession {
    bitmap: Option<Bitmap>,
    surface: Option<DrawSurface>,
    buffer: Option<Vec<u8>>,
    closed: bool,
}

impl BitmapEditSession {
    /// Take ownership of an existing bitmap and start a session over it.
    ///
    /// # Errors
    ///
    /// Fails with `ResourceLimitExceeded` before any allocation if the
    /// pixel byte count would overflow the signed 32-bit limit.
    pub fn from_bitmap(bitmap: Bitmap) -> Result<Self> {
        let len = checked_buffer_len(bitmap.get_width(), bitmap.get_height())?;
        let surface = DrawSurface::new(bitmap.get_size());

        let mut session = Self {
            bitmap: Some(bitmap),
            surface: Some(surface),
            buffer: Some(vec![0; len]),
            closed: false,
        };
        session.flush()?;
        Ok(session)
    }

    /// Decode an image from a readable, seekable stream and start a session.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_bitmap(Bitmap::from_reader(reader)?)
    }

    /// Decode an image file and start a session.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bitmap(Bitmap::from_file(path)?)
    }

    /// Apply all pending surface commands, then copy every pixel byte of the
    /// bitmap into the heap buffer.
    ///
    /// # Errors
    ///
    /// Fails with `Disposed` after close.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_open()?;
        let (Some(bitmap), Some(surface), Some(buffer)) = (self.bitmap.as_mut(), self.surface.as_mut(), self.buffer.as_mut()) else {
            return Err(GfxError::disposed("BitmapEditSession"));
        };

        surface.flush_into(bitmap);

        let view = bitmap.lock(LockMode::ReadOnly)?;
        buffer.copy_from_slice(bytemuck::cast_slice(view.words()?));
        Ok(())
    }

    /// The bitmap owned by this session.
    pub fn bitmap(&self) -> Result<&Bitmap> {
        self.ensure_open()?;
        self.bitmap.as_ref().ok_or(GfxError::disposed("BitmapEditSession"))
    }

    /// The drawing surface bound to the bitmap.
    pub fn surface_mut(&mut self) -> Result<&mut DrawSurface> {
        self.ensure_open()?;
        self.surface.as_mut().ok_or(GfxError::disposed("BitmapEditSession"))
    }

    /// The heap copy of the pixel data, as synchronized by the last flush.
    pub fn buffer(&self) -> Result<&[u8]> {
        self.ensure_open()?;
        match self.buffer.as_deref() {
            Some(buffer) => Ok(buffer),
            None => Err(GfxError::disposed("BitmapEditSession")),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the surface, the bitmap and the heap buffer, in that order.
    /// Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        drop(self.surface.take());
        drop(self.bitmap.take());
        drop(self.buffer.take());
        self.closed = true;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GfxError::disposed("BitmapEditSession"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitmapEditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapEditSession")
            .field("size", &self.bitmap.as_ref().map(Bitmap::get_size))
            .field("closed", &self.closed)
            .finish()
    }
}
