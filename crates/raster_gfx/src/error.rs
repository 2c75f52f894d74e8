//! Unified error types for raster_gfx

use thiserror::Error;

/// Main error type for raster_gfx operations
#[derive(Debug, Error)]
pub enum GfxError {
    // === Argument Errors ===
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },

    // === Lifecycle Errors ===
    #[error("{type_name} was used after close")]
    Disposed { type_name: &'static str },

    // === Pixel Access Errors ===
    #[error("Pixel ({x}, {y}) out of bounds (width: {width}, height: {height})")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    #[error("Pixel buffer of {requested} bytes exceeds the limit of {limit} bytes")]
    ResourceLimitExceeded { requested: i64, limit: i64 },

    // === Stream Errors ===
    #[error("Stream ended after {actual} of {expected} declared bytes")]
    IncompleteRead { expected: usize, actual: usize },

    // === Font Errors ===
    #[error("Invalid font data: {message}")]
    InvalidFont { message: String },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for raster_gfx operations
pub type Result<T> = std::result::Result<T, GfxError>;

// === Convenience constructors ===
impl GfxError {
    /// Create an error for a rejected argument
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create an error for an operation on a closed wrapper
    pub fn disposed(type_name: &'static str) -> Self {
        Self::Disposed { type_name }
    }

    /// Create an error for unparsable font data
    pub fn invalid_font(message: impl Into<String>) -> Self {
        Self::InvalidFont { message: message.into() }
    }
}
