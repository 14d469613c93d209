//! Per-pixel shape fills over an RGBA canvas.
//!
//! Pixels are sampled at their centers. Curved edges get a one-pixel
//! coverage ramp at the rim; rectangles keep hard edges.

use image::{Pixel, Rgba, RgbaImage};

/// Blend `color` into the pixel at (x, y), scaled by `coverage` in [0, 1].
fn blend(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let alpha = (f32::from(color[3]) * coverage.clamp(0.0, 1.0)).round() as u8;
    if alpha == 0 {
        return;
    }
    let src = Rgba([color[0], color[1], color[2], alpha]);
    img.get_pixel_mut(x, y).blend(&src);
}

pub fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for y in y0..y1.min(h) {
        for x in x0..x1.min(w) {
            img.put_pixel(x, y, color);
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    fill_ellipse(img, cx, cy, radius, radius, color);
}

/// Fill the ellipse centered at (cx, cy) with semi-axes rx, ry.
///
/// Coverage at the rim is approximated by scaling the normalized radial
/// distance by the smaller semi-axis, which is exact for circles and
/// close enough for the mild aspect ratios drawn here.
pub fn fill_ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    let x0 = (cx - rx - 1.0).floor().max(0.0) as u32;
    let y0 = (cy - ry - 1.0).floor().max(0.0) as u32;
    let x1 = ((cx + rx + 1.0).ceil().max(0.0) as u32).min(w);
    let y1 = ((cy + ry + 1.0).ceil().max(0.0) as u32).min(h);
    let edge = rx.min(ry);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            let d = (dx * dx + dy * dy).sqrt();
            let coverage = 0.5 - (d - 1.0) * edge;
            if coverage > 0.0 {
                blend(img, x, y, color, coverage);
            }
        }
    }
}
