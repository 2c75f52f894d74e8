use std::io::Read;
use std::path::Path;

use crate::{FontStyle, GfxError, Result, Size};

/// Chunk size for declared-length stream reads.
const READ_SEGMENT_SIZE: usize = 1024 * 16;

const PSF1_MAGIC: u16 = 0x0436;
const PSF1_MODE512: u8 = 0x01;
const PSF2_MAGIC: u32 = 0x864a_b572;
const PSF2_MAXVERSION: u32 = 0x00;

/// What kind of face a descriptor refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceKind {
    /// A fixed-cell bitmap face (PSF1/PSF2).
    Bitmap { glyph_size: Size, glyph_count: usize },
    /// An outline face registered with the private registry.
    Outline { index: u32 },
}

/// A loaded, named font variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFace {
    pub name: String,
    pub style: FontStyle,
    pub kind: FaceKind,
}

/// A collection of font faces loaded from one file or one memory blob.
///
/// Each collection owns a private registry; nothing is registered process
/// wide. PSF bitmap fonts are parsed directly, everything else is handed to
/// the registry and surfaced as outline faces carrying the family name the
/// file declares.
pub struct FontCollection {
    registry: Option<fontdb::Database>,
    faces: Vec<FontFace>,
    closed: bool,
}

impl FontCollection {
    /// Load a font file into a fresh collection.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` on an empty path, with `Io` when the
    /// file cannot be read and with `InvalidFont` when no face can be
    /// loaded from its contents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(GfxError::invalid_argument("path", "must not be empty"));
        }

        let bytes = std::fs::read(path)?;
        let name_hint = path.file_stem().map_or_else(|| "font".to_string(), |s| s.to_string_lossy().to_string());
        Self::register(bytes, &name_hint)
    }

    /// Read exactly `byte_count` bytes from a stream and load them into a
    /// fresh collection.
    ///
    /// Loading is all-or-nothing: if the stream ends before `byte_count`
    /// bytes were read, no collection is constructed.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` on a negative byte count, with
    /// `IncompleteRead` on a short stream and with `InvalidFont` when no
    /// face can be loaded from the bytes.
    pub fn from_reader<R: Read>(mut reader: R, byte_count: i64) -> Result<Self> {
        if byte_count < 0 {
            return Err(GfxError::invalid_argument("byte_count", format!("must be non-negative, got {byte_count}")));
        }

        let expected = byte_count as usize;
        let mut bytes = Vec::with_capacity(expected);
        let mut segment = [0; READ_SEGMENT_SIZE];
        while bytes.len() < expected {
            let want = (expected - bytes.len()).min(READ_SEGMENT_SIZE);
            let read = reader.read(&mut segment[..want])?;
            if read == 0 {
                return Err(GfxError::IncompleteRead {
                    expected,
                    actual: bytes.len(),
                });
            }
            bytes.extend_from_slice(&segment[..read]);
        }

        Self::register(bytes, "memory font")
    }

    /// The ordered faces loaded into this collection.
    pub fn faces(&self) -> Result<&[FontFace]> {
        self.ensure_open()?;
        Ok(&self.faces)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release every face, then the registry. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.faces.clear();
        drop(self.registry.take());
        self.closed = true;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GfxError::disposed("FontCollection"));
        }
        Ok(())
    }

    fn register(bytes: Vec<u8>, name_hint: &str) -> Result<Self> {
        let mut registry = fontdb::Database::new();
        let faces = if is_psf(&bytes) {
            vec![parse_psf(&bytes, name_hint)?]
        } else {
            registry.load_font_data(bytes);
            let mut faces = Vec::new();
            for (index, info) in registry.faces().enumerate() {
                let Some(name) = face_name(info) else {
                    log::debug!("skipping face {index} without a declared name");
                    continue;
                };
                faces.push(FontFace {
                    name,
                    style: face_style(info),
                    kind: FaceKind::Outline { index: index as u32 },
                });
            }
            faces
        };

        if faces.is_empty() {
            return Err(GfxError::invalid_font("no loadable face found"));
        }
        log::debug!("loaded {} font face(s) from '{name_hint}'", faces.len());

        Ok(Self {
            registry: Some(registry),
            faces,
            closed: false,
        })
    }
}

impl std::fmt::Debug for FontCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCollection")
            .field("faces", &self.faces)
            .field("closed", &self.closed)
            .finish()
    }
}

fn face_name(info: &fontdb::FaceInfo) -> Option<String> {
    if let Some((family, _)) = info.families.first() {
        return Some(family.clone());
    }
    if info.post_script_name.is_empty() {
        None
    } else {
        Some(info.post_script_name.clone())
    }
}

fn face_style(info: &fontdb::FaceInfo) -> FontStyle {
    let mut style = FontStyle::empty();
    if info.weight >= fontdb::Weight::BOLD {
        style |= FontStyle::BOLD;
    }
    if info.style != fontdb::Style::Normal {
        style |= FontStyle::ITALIC;
    }
    style
}

fn is_psf(data: &[u8]) -> bool {
    if data.len() >= 2 && u16::from_le_bytes([data[0], data[1]]) == PSF1_MAGIC {
        return true;
    }
    data.len() >= 4 && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == PSF2_MAGIC
}

fn parse_psf(data: &[u8], name: &str) -> Result<FontFace> {
    if data.len() >= 2 && u16::from_le_bytes([data[0], data[1]]) == PSF1_MAGIC {
        return parse_psf1(data, name);
    }
    parse_psf2(data, name)
}

fn parse_psf1(data: &[u8], name: &str) -> Result<FontFace> {
    if data.len() < 4 {
        return Err(GfxError::invalid_font("psf1 header truncated"));
    }
    let mode = data[2];
    let charsize = data[3] as usize;
    let glyph_count = if mode & PSF1_MODE512 == PSF1_MODE512 { 512 } else { 256 };
    if charsize == 0 || data.len() < 4 + glyph_count * charsize {
        return Err(GfxError::invalid_font(format!("psf1 glyph data truncated ({} bytes)", data.len())));
    }

    Ok(FontFace {
        name: name.to_string(),
        style: FontStyle::empty(),
        kind: FaceKind::Bitmap {
            glyph_size: Size::new(8, charsize as i32),
            glyph_count,
        },
    })
}

fn parse_psf2(data: &[u8], name: &str) -> Result<FontFace> {
    if data.len() < 32 {
        return Err(GfxError::invalid_font("psf2 header truncated"));
    }
    let version = u32::from_le_bytes(data[4..8].try_into().expect("checked length"));
    if version > PSF2_MAXVERSION {
        return Err(GfxError::invalid_font(format!("unsupported psf2 version {version}")));
    }
    let headersize = u32::from_le_bytes(data[8..12].try_into().expect("checked length")) as usize;
    let glyph_count = u32::from_le_bytes(data[16..20].try_into().expect("checked length")) as usize;
    let charsize = u32::from_le_bytes(data[20..24].try_into().expect("checked length")) as usize;
    let height = u32::from_le_bytes(data[24..28].try_into().expect("checked length")) as i32;
    let width = u32::from_le_bytes(data[28..32].try_into().expect("checked length")) as i32;
    if glyph_count * charsize + headersize != data.len() {
        return Err(GfxError::invalid_font(format!(
            "psf2 length mismatch: expected {}, got {}",
            glyph_count * charsize + headersize,
            data.len()
        )));
    }

    Ok(FontFace {
        name: name.to_string(),
        style: FontStyle::empty(),
        kind: FaceKind::Bitmap {
            glyph_size: Size::new(width, height),
            glyph_count,
        },
    })
}
