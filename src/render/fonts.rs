//! Label font selection.
//!
//! Both label sizes are drawn from one face, picked once through a fallback chain:
//! the provisioned font file, then a system font, then the compiled-in bitmap font.
//! Either both sizes come from a given source or neither does.

pub mod builtin;
mod font_manager;

pub use font_manager::FontManager;

use crate::errors::IconError;
use ab_glyph::{Font, FontRef, FontVec};
use std::path::{Path, PathBuf};

/// Where the label face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// The font file provisioned next to the program.
    Provisioned(PathBuf),
    /// An installed system font, by family name.
    System(String),
    /// The compiled-in bitmap font.
    Builtin,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::Provisioned(path) => write!(f, "{}", path.display()),
            FontSource::System(family) => write!(f, "system font \"{family}\""),
            FontSource::Builtin => write!(f, "built-in bitmap font"),
        }
    }
}

pub enum Face {
    Outline(FontVec),
    Builtin,
}

/// The face used for every text run, along with its origin.
pub struct LabelFont {
    pub face: Face,
    pub source: FontSource,
}

impl LabelFont {
    pub fn builtin() -> Self {
        Self {
            face: Face::Builtin,
            source: FontSource::Builtin,
        }
    }

    /// Loads and parses a font file.
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| IconError::InvalidFont(format!("{}: {e}", path.display())))?;

        Ok(Self {
            face: Face::Outline(font),
            source: FontSource::Provisioned(path.to_path_buf()),
        })
    }

    /// Walks the fallback chain. Never fails: the built-in font is always there.
    pub fn resolve(provisioned: Option<&Path>, system_families: &[String]) -> Self {
        if let Some(path) = provisioned {
            match Self::from_file(path) {
                Ok(font) => return font,
                Err(e) => log::debug!("Cannot load {}: {e}", path.display()),
            }
        }

        match FontManager::new().resolve_system_font(system_families) {
            Ok((font, family)) => Self {
                face: Face::Outline(font),
                source: FontSource::System(family),
            },
            Err(e) => {
                log::debug!("{e}");
                Self::builtin()
            }
        }
    }
}

/// DejaVu Sans Bold (see `testdata/DejaVuSans-LICENSE`), used wherever tests need a real font.
#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] = include_bytes!("fonts/testdata/DejaVuSans-Bold.ttf");

/// Checks that `data` parses as a font and has at least one glyph.
pub fn validate_font_bytes(data: &[u8]) -> Result<(), IconError> {
    let font = FontRef::try_from_slice(data).map_err(|e| IconError::InvalidFont(e.to_string()))?;
    if font.glyph_count() == 0 {
        return Err(IconError::InvalidFont("font has no glyphs".to_string()));
    }
    Ok(())
}
