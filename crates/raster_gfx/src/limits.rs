//! Pixel buffer size limits
//!
//! These limits reject dimensions whose byte counts would overflow a signed
//! 32-bit size before anything is allocated.

use crate::{GfxError, Result};

/// Bytes per pixel in the fixed 32-bit ARGB format
pub const BYTES_PER_PIXEL: usize = 4;

/// Maximum addressable byte count for a single pixel buffer
pub const MAX_PIXEL_BYTES: i64 = i32::MAX as i64;

/// Validate bitmap dimensions and return the exact heap buffer length.
///
/// The guard uses twice the buffer size so that a locked copy and the heap
/// copy can exist at the same time without crossing the limit.
#[inline]
pub fn checked_buffer_len(width: i32, height: i32) -> Result<usize> {
    if width <= 0 {
        return Err(GfxError::invalid_argument("width", format!("must be positive, got {width}")));
    }
    if height <= 0 {
        return Err(GfxError::invalid_argument("height", format!("must be positive, got {height}")));
    }

    let requested = 2 * BYTES_PER_PIXEL as i64 * width as i64 * height as i64;
    if requested >= MAX_PIXEL_BYTES {
        return Err(GfxError::ResourceLimitExceeded {
            requested,
            limit: MAX_PIXEL_BYTES,
        });
    }

    Ok(BYTES_PER_PIXEL * width as usize * height as usize)
}

#[cfg(test)]
mod tests {
    use super::checked_buffer_len;
    use crate::GfxError;

    #[test]
    fn test_small_buffer() {
        assert_eq!(4 * 32 * 32, checked_buffer_len(32, 32).unwrap());
        assert_eq!(4, checked_buffer_len(1, 1).unwrap());
    }

    #[test]
    fn test_non_positive_dimensions() {
        assert!(matches!(checked_buffer_len(0, 32), Err(GfxError::InvalidArgument { name: "width", .. })));
        assert!(matches!(checked_buffer_len(32, -1), Err(GfxError::InvalidArgument { name: "height", .. })));
    }

    #[test]
    fn test_limit_exceeded() {
        // 8 * 20000 * 20000 > i32::MAX
        assert!(matches!(checked_buffer_len(20000, 20000), Err(GfxError::ResourceLimitExceeded { .. })));
    }

    #[test]
    fn test_just_below_limit() {
        // 8 * 16384 * 16383 < i32::MAX
        assert!(checked_buffer_len(16384, 16383).is_ok());
    }
}
