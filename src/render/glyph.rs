//! Emoji glyph rasterization from installed color-emoji fonts.
//!
//! Color-emoji faces embed pre-rendered PNG strikes (sbix on macOS,
//! CBDT/CBLC in Noto Color Emoji). The glyph path queries the system
//! font database for a known emoji family, extracts the strike nearest
//! the requested pixel size and scales it to fit. Faces that only carry
//! vector color tables (COLR/CPAL) have no strike and report
//! [`GlyphError::NoRasterStrike`], which callers treat the same as a
//! missing font.

use std::fmt;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use ttf_parser::{Face, RasterImageFormat};

/// Emoji font families probed in order. First installed match wins.
const EMOJI_FAMILIES: &[&str] = &[
    "Apple Color Emoji",
    "Noto Color Emoji",
    "Segoe UI Emoji",
    "Twemoji Mozilla",
    "EmojiOne Mozilla",
];

/// Errors from the emoji glyph path.
#[derive(Debug)]
pub enum GlyphError {
    /// No installed face matched the emoji family list.
    NoEmojiFont,
    /// Matched face data could not be read from its source.
    FaceUnreadable,
    /// Face data is not a parsable font.
    FaceParse(ttf_parser::FaceParsingError),
    /// The face has no glyph for the character.
    GlyphMissing(char),
    /// The face has no embedded PNG strike for the glyph.
    NoRasterStrike(char),
    /// The embedded strike failed to decode.
    Decode(image::ImageError),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::NoEmojiFont => write!(f, "no color emoji font installed"),
            GlyphError::FaceUnreadable => write!(f, "emoji font data could not be read"),
            GlyphError::FaceParse(e) => write!(f, "emoji font failed to parse: {}", e),
            GlyphError::GlyphMissing(ch) => {
                write!(f, "emoji font has no glyph for '{}'", ch)
            }
            GlyphError::NoRasterStrike(ch) => {
                write!(f, "emoji font has no bitmap strike for '{}'", ch)
            }
            GlyphError::Decode(e) => write!(f, "embedded bitmap failed to decode: {}", e),
        }
    }
}

impl std::error::Error for GlyphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlyphError::FaceParse(e) => Some(e),
            GlyphError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Rasterize `ch` from the system fonts, scaled so its larger edge is
/// `target_px` pixels.
pub fn rasterize(ch: char, target_px: u32) -> Result<RgbaImage, GlyphError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    log::debug!("system font database holds {} faces", db.len());
    rasterize_from(&db, ch, target_px)
}

pub(crate) fn rasterize_from(
    db: &fontdb::Database,
    ch: char,
    target_px: u32,
) -> Result<RgbaImage, GlyphError> {
    let families: Vec<fontdb::Family> = EMOJI_FAMILIES
        .iter()
        .map(|&name| fontdb::Family::Name(name))
        .collect();
    let id = db
        .query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })
        .ok_or(GlyphError::NoEmojiFont)?;
    let info = db.face(id).ok_or(GlyphError::NoEmojiFont)?;
    log::debug!("emoji face: {} (index {})", info.post_script_name, info.index);

    let index = info.index;
    let data = db
        .with_face_data(id, |bytes, _| bytes.to_vec())
        .ok_or(GlyphError::FaceUnreadable)?;
    extract_strike(&data, index, ch, target_px)
}

/// Pull the embedded PNG strike for `ch` out of raw face data and scale
/// it to the target box.
pub(crate) fn extract_strike(
    data: &[u8],
    index: u32,
    ch: char,
    target_px: u32,
) -> Result<RgbaImage, GlyphError> {
    let face = Face::parse(data, index).map_err(GlyphError::FaceParse)?;
    let glyph = face.glyph_index(ch).ok_or(GlyphError::GlyphMissing(ch))?;
    let ppem = u16::try_from(target_px).unwrap_or(u16::MAX);
    let strike = face
        .glyph_raster_image(glyph, ppem)
        .filter(|s| s.format == RasterImageFormat::PNG)
        .ok_or(GlyphError::NoRasterStrike(ch))?;
    let bitmap = image::load_from_memory_with_format(strike.data, ImageFormat::Png)
        .map_err(GlyphError::Decode)?
        .to_rgba8();
    Ok(scale_to_box(bitmap, target_px))
}

/// Aspect-preserving resize so the larger edge equals `target_px`.
fn scale_to_box(bitmap: RgbaImage, target_px: u32) -> RgbaImage {
    let (w, h) = bitmap.dimensions();
    if w == 0 || h == 0 || w.max(h) == target_px {
        return bitmap;
    }
    let scale = target_px as f32 / w.max(h) as f32;
    let nw = ((w as f32 * scale).round() as u32).max(1);
    let nh = ((h as f32 * scale).round() as u32).max(1);
    imageops::resize(&bitmap, nw, nh, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn empty_database_reports_no_emoji_font() {
        let db = fontdb::Database::new();

        let result = rasterize_from(&db, '🎭', 96);

        assert!(matches!(result, Err(GlyphError::NoEmojiFont)));
    }

    #[test]
    fn garbage_face_data_reports_parse_error() {
        let result = extract_strike(b"definitely not a font", 0, '🎭', 96);

        assert!(matches!(result, Err(GlyphError::FaceParse(_))));
    }

    #[test]
    fn scale_to_box_preserves_aspect_ratio() {
        let bitmap: RgbaImage = ImageBuffer::from_pixel(100, 50, Rgba([1, 2, 3, 255]));

        let scaled = scale_to_box(bitmap, 50);

        assert_eq!(scaled.dimensions(), (50, 25));
    }

    #[test]
    fn scale_to_box_leaves_exact_size_untouched() {
        let bitmap: RgbaImage = ImageBuffer::from_pixel(96, 96, Rgba([9, 9, 9, 255]));

        let scaled = scale_to_box(bitmap, 96);

        assert_eq!(scaled.dimensions(), (96, 96));
    }

    #[test]
    fn errors_name_the_character() {
        let missing = GlyphError::GlyphMissing('🎭');
        let stripless = GlyphError::NoRasterStrike('🎭');

        assert!(missing.to_string().contains('🎭'));
        assert!(stripless.to_string().contains('🎭'));
    }
}
