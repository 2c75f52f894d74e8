use std::io::{BufReader, Read, Seek};
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::{checked_buffer_len, Color, GfxError, LockMode, PixelView, Result, Size};

/// An owned pixel grid in the fixed 32-bit ARGB format.
///
/// Pixels are stored as packed ARGB words in row-major order with no row
/// padding, so the word at `width * y + x` is the pixel at `(x, y)`. Decoded
/// images are repacked into this layout on construction.
pub struct Bitmap {
    size: Size,
    data: Vec<u32>,
}

impl Bitmap {
    /// Create a blank (fully transparent) bitmap.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let len = checked_buffer_len(width, height)?;
        Ok(Self {
            size: Size::new(width, height),
            data: vec![0; len / 4],
        })
    }

    /// Decode a bitmap from a readable, seekable stream.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let decoded = ImageReader::new(BufReader::new(reader)).with_guessed_format()?.decode()?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Decode a bitmap from an image file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(GfxError::invalid_argument("path", "must not be empty"));
        }
        Self::from_rgba(image::open(path)?.to_rgba8())
    }

    fn from_rgba(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        checked_buffer_len(width as i32, height as i32)?;

        let data = image.pixels().map(|p| Color::argb(p.0[3], p.0[0], p.0[1], p.0[2]).to_argb()).collect();
        Ok(Self {
            size: (width, height).into(),
            data,
        })
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    /// Lock the full extent of the bitmap for pixel access.
    ///
    /// The view borrows the bitmap mutably, so the bitmap is inaccessible
    /// until the view is dropped; `close()` on the view releases the lock
    /// state early without freeing the bitmap.
    pub fn lock(&mut self, mode: LockMode) -> Result<PixelView<'_>> {
        PixelView::new(self, mode)
    }

    /// Re-encode the pixel grid as an RGBA image for the host-side codec.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for word in &self.data {
            let color = Color::from_argb(*word);
            bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        RgbaImage::from_raw(self.size.width as u32, self.size.height as u32, bytes).expect("pixel data matches dimensions")
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.data
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= self.size.width || y < 0 || y >= self.size.height {
            return;
        }
        self.data[(self.size.width * y + x) as usize] = color.to_argb();
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap").field("size", &self.size).finish_non_exhaustive()
    }
}
