use bitflags::bitflags;

use crate::{Color, GfxError, Result};

bitflags! {
    /// Style flags of a font variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontStyle: u8 {
        const BOLD = 0b0001;
        const ITALIC = 0b0010;
        const UNDERLINE = 0b0100;
        const STRIKEOUT = 0b1000;
    }
}

bitflags! {
    /// Layout flags consumed by the text renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextFormatFlags: u8 {
        /// Typographic metrics instead of cell metrics.
        const TYPOGRAPHIC = 0b01;
        /// Never wrap at the layout rectangle.
        const NO_WRAP = 0b10;
    }
}

/// How a run of text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    pub flags: TextFormatFlags,
}

impl Default for TextFormat {
    fn default() -> Self {
        TextFormat {
            flags: TextFormatFlags::TYPOGRAPHIC | TextFormatFlags::NO_WRAP,
        }
    }
}

/// A font reference: family, pixel size and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: f32,
    style: FontStyle,
}

impl Font {
    /// # Errors
    ///
    /// Fails with `InvalidArgument` on an empty family name or a negative
    /// or non-finite pixel size.
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle) -> Result<Self> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(GfxError::invalid_argument("family", "must not be empty"));
        }
        if !size.is_finite() || size < 0.0 {
            return Err(GfxError::invalid_argument("size", format!("must be finite and non-negative, got {size}")));
        }
        Ok(Font { family, size, style })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

/// A fill brush applied to rendered glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    pub const fn solid_white() -> Self {
        Brush::Solid(Color::WHITE)
    }
}

/// Options consumed by the text renderer: font, fill brushes, line height,
/// shadow and layout flags.
///
/// Every setter validates its argument; a rejected value leaves the prior
/// state untouched. All accessors and setters fail once the options were
/// closed.
pub struct TextRenderOptions {
    line_height: f32,
    brushes: Vec<Brush>,
    font: Font,
    shadow_index: i32,
    draw_shadow: bool,
    antialias: bool,
    format: TextFormat,
    closed: bool,
}

impl TextRenderOptions {
    /// Create options from an explicit font.
    ///
    /// Defaults: one opaque white brush, shadow index 0, no shadow, no
    /// antialiasing, typographic no-wrap format.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` on a negative or non-finite line height.
    pub fn new(font: Font, line_height: f32) -> Result<Self> {
        validate_line_height(line_height)?;
        Ok(Self {
            line_height,
            brushes: vec![Brush::solid_white()],
            font,
            shadow_index: 0,
            draw_shadow: false,
            antialias: false,
            format: TextFormat::default(),
            closed: false,
        })
    }

    /// Create options from a font family, building the font internally.
    /// The size is in pixels; pass `FontStyle::empty()` for a regular face.
    pub fn with_family(family: impl Into<String>, size: f32, line_height: f32, style: FontStyle) -> Result<Self> {
        Self::new(Font::new(family, size, style)?, line_height)
    }

    pub fn line_height(&self) -> Result<f32> {
        self.ensure_open()?;
        Ok(self.line_height)
    }

    pub fn set_line_height(&mut self, value: f32) -> Result<()> {
        self.ensure_open()?;
        validate_line_height(value)?;
        self.line_height = value;
        Ok(())
    }

    pub fn brushes(&self) -> Result<&[Brush]> {
        self.ensure_open()?;
        Ok(&self.brushes)
    }

    /// Replace the brush list. At least one brush is required.
    pub fn set_brushes(&mut self, brushes: Vec<Brush>) -> Result<()> {
        self.ensure_open()?;
        if brushes.is_empty() {
            return Err(GfxError::invalid_argument("brushes", "at least one brush is required"));
        }
        self.brushes = brushes;
        Ok(())
    }

    pub fn push_brush(&mut self, brush: Brush) -> Result<()> {
        self.ensure_open()?;
        self.brushes.push(brush);
        Ok(())
    }

    pub fn font(&self) -> Result<&Font> {
        self.ensure_open()?;
        Ok(&self.font)
    }

    pub fn set_font(&mut self, font: Font) -> Result<()> {
        self.ensure_open()?;
        self.font = font;
        Ok(())
    }

    pub fn shadow_index(&self) -> Result<i32> {
        self.ensure_open()?;
        Ok(self.shadow_index)
    }

    /// Index into the brush list used for the shadow color.
    pub fn set_shadow_index(&mut self, value: i32) -> Result<()> {
        self.ensure_open()?;
        if value < 0 {
            return Err(GfxError::invalid_argument("shadow_index", format!("must be non-negative, got {value}")));
        }
        self.shadow_index = value;
        Ok(())
    }

    pub fn draw_shadow(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.draw_shadow)
    }

    pub fn set_draw_shadow(&mut self, value: bool) -> Result<()> {
        self.ensure_open()?;
        self.draw_shadow = value;
        Ok(())
    }

    pub fn antialias(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.antialias)
    }

    pub fn set_antialias(&mut self, value: bool) -> Result<()> {
        self.ensure_open()?;
        self.antialias = value;
        Ok(())
    }

    pub fn format(&self) -> Result<&TextFormat> {
        self.ensure_open()?;
        Ok(&self.format)
    }

    pub fn set_format(&mut self, format: TextFormat) -> Result<()> {
        self.ensure_open()?;
        self.format = format;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the owned font, format and brushes. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.brushes.clear();
        self.closed = true;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GfxError::disposed("TextRenderOptions"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for TextRenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderOptions")
            .field("font", &self.font)
            .field("line_height", &self.line_height)
            .field("brushes", &self.brushes.len())
            .field("closed", &self.closed)
            .finish()
    }
}

fn validate_line_height(value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GfxError::invalid_argument(
            "line_height",
            format!("must be finite and non-negative, got {value}"),
        ));
    }
    Ok(())
}
