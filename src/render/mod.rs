//! Icon rendering: a brand-colored circle with an emoji glyph overlay,
//! or a geometric fallback when no emoji bitmap is available.

pub mod glyph;
pub mod shapes;

use image::{ImageBuffer, Rgba, RgbaImage, imageops};

use glyph::GlyphError;

/// Background and circle fill.
pub const BACKGROUND: Rgba<u8> = Rgba([0xFF, 0x33, 0x66, 0xFF]);
/// Circle outline band.
pub const OUTLINE: Rgba<u8> = Rgba([0xFF, 0xD9, 0x3D, 0xFF]);
/// Fallback shape fill.
pub const FALLBACK_FILL: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// The glyph drawn over the circle: theater masks.
pub const ICON_GLYPH: char = '🎭';

/// Which overlay made it onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphOutcome {
    Emoji,
    Fallback,
}

/// Render one square icon at `size` pixels per edge.
pub fn render_icon(size: u32) -> (RgbaImage, GlyphOutcome) {
    compose(size, glyph::rasterize(ICON_GLYPH, size / 2))
}

/// Compose the canvas from a glyph rasterization result.
///
/// A glyph failure is caught here, announced on stdout, and replaced by
/// the fallback shapes.
pub(crate) fn compose(
    size: u32,
    glyph: Result<RgbaImage, GlyphError>,
) -> (RgbaImage, GlyphOutcome) {
    let mut img: RgbaImage = ImageBuffer::from_pixel(size, size, BACKGROUND);

    // Circle inscribed in [size/8, size/8, size - size/8, size - size/8],
    // outline band size/20 thick drawn inward from the boundary.
    let inset = (size / 8) as f32;
    let band = (size / 20) as f32;
    let center = size as f32 / 2.0;
    let radius = center - inset;
    shapes::fill_circle(&mut img, center, center, radius, OUTLINE);
    shapes::fill_circle(&mut img, center, center, radius - band, BACKGROUND);

    match glyph {
        Ok(bitmap) => {
            let x = i64::from((size - bitmap.width()) / 2);
            let y = i64::from((size - bitmap.height()) / 2);
            imageops::overlay(&mut img, &bitmap, x, y);
            (img, GlyphOutcome::Emoji)
        }
        Err(e) => {
            println!("Could not add emoji (using fallback): {}", e);
            draw_fallback(&mut img, size);
            (img, GlyphOutcome::Fallback)
        }
    }
}

/// The abstract mask shape substituted when the glyph path fails: a white
/// rectangle across the middle third plus a white ellipse above it.
fn draw_fallback(img: &mut RgbaImage, size: u32) {
    shapes::fill_rect(img, size / 4, size / 3, size * 3 / 4, size * 2 / 3, FALLBACK_FILL);

    // Ellipse inscribed in [size/3, size/6, size*2/3, size/2].
    let rx = (size * 2 / 3 - size / 3) as f32 / 2.0;
    let ry = (size / 2 - size / 6) as f32 / 2.0;
    let cx = (size / 3) as f32 + rx;
    let cy = (size / 6) as f32 + ry;
    shapes::fill_ellipse(img, cx, cy, rx, ry, FALLBACK_FILL);
}
