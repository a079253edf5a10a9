//! Raster primitives on `RgbaImage`: colors, gradient fill, rings and polygons.
//!
//! All drawing blends source-over with straight (non-premultiplied) alpha.

use anyhow::{anyhow, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::str::FromStr;

/// A point in canvas pixel coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parse a `#RRGGBB` (or any CSS color) string into an RGBA pixel with the given alpha
pub fn hex_to_rgba(color: &str, alpha: u8) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color).map_err(|_| anyhow!("Invalid color: {color}"))?;
    Ok(Rgba([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
        alpha,
    ]))
}

/// Returns `color` with its alpha replaced
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Create an opaque diagonal gradient from top-left (`from`) to bottom-right (`to`)
///
/// Each pixel interpolates at `t = (x + y) / (2 * size)`; channels are truncated.
pub fn linear_gradient(size: u32, from: Rgba<u8>, to: Rgba<u8>) -> RgbaImage {
    let span = 2.0 * size as f64;
    ImageBuffer::from_fn(size, size, |x, y| {
        let t = (x + y) as f64 / span;
        let lerp = |c: usize| (from[c] as f64 + (to[c] as f64 - from[c] as f64) * t) as u8;
        Rgba([lerp(0), lerp(1), lerp(2), 255])
    })
}

/// Blend `src` over `dst`, scaling the source alpha by `coverage` (0..=1)
pub fn blend_pixel(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let src_a = src[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for c in 0..3 {
        let blended = (src[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Draw an outline-only circle
///
/// The stroke covers distances `(radius - stroke_width, radius]` from the center,
/// with one pixel of anti-aliasing on both edges.
pub fn draw_ring(
    img: &mut RgbaImage,
    center: Point,
    radius: f64,
    stroke_width: f64,
    color: Rgba<u8>,
) {
    let inner = radius - stroke_width;
    let (x0, x1) = clamp_span(center.x - radius - 1.0, center.x + radius + 1.0, img.width());
    let (y0, y1) = clamp_span(center.y - radius - 1.0, center.y + radius + 1.0, img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f64 - center.x;
            let dy = y as f64 - center.y;
            let distance = (dx * dx + dy * dy).sqrt();

            let outer_cov = (radius + 0.5 - distance).clamp(0.0, 1.0);
            let inner_cov = (distance - inner + 0.5).clamp(0.0, 1.0);
            let coverage = outer_cov.min(inner_cov);
            if coverage > 0.0 {
                blend_pixel(img.get_pixel_mut(x, y), color, coverage as f32);
            }
        }
    }
}

/// Fill a closed polygon using the even-odd rule, sampling at pixel centers
///
/// Fewer than three points draws nothing.
pub fn fill_polygon(img: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let (y0, y1) = clamp_span(min_y, max_y + 1.0, img.height());

    let mut crossings: Vec<f64> = Vec::new();
    for y in y0..y1 {
        let scan_y = y as f64 + 0.5;

        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= scan_y && scan_y < b.y) || (b.y <= scan_y && scan_y < a.y) {
                crossings.push(a.x + (scan_y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil();
            let end = (pair[1] - 0.5).ceil();
            let (x0, x1) = clamp_span(start, end, img.width());
            for x in x0..x1 {
                blend_pixel(img.get_pixel_mut(x, y), color, 1.0);
            }
        }
    }
}

/// Clamp a half-open float range to `[0, limit)` integer pixel indices
fn clamp_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let lo = start.floor().max(0.0).min(limit as f64) as u32;
    let hi = end.ceil().max(0.0).min(limit as f64) as u32;
    (lo, hi.max(lo))
}
