//! Font loading and centered glyph rendering with `rusttype`.

use crate::draw::{blend_pixel, Point};
use anyhow::{bail, Context, Result};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Fonts tried in order; the first that loads is used.
///
/// SF Rounded is the intended face. The rest keep the tool usable on
/// machines without it.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/System/Library/Fonts/HelveticaNeue.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Load the first candidate font that can be read and parsed
///
/// # Errors
/// Fails with every attempted path and its reason when none loads.
pub fn load_font(candidates: &[&str]) -> Result<Font<'static>> {
    let mut failures = Vec::new();

    for path in candidates {
        match load_font_file(Path::new(path)) {
            Ok(font) => {
                println!("Using font {path}");
                return Ok(font);
            }
            Err(err) => failures.push(format!("{path}: {err:#}")),
        }
    }

    bail!("No usable font found, tried:\n  {}", failures.join("\n  "))
}

/// Load a TrueType font or the first face of a TrueType collection
pub fn load_font_file(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path).with_context(|| format!("Can't read {}", path.display()))?;
    Font::try_from_vec(data).with_context(|| format!("{} is not a valid font", path.display()))
}

/// Scale at which one em is `em_size` pixels
///
/// `rusttype` scales by ascent-to-descent height, not by em.
pub fn em_scale(font: &Font, em_size: f32) -> Scale {
    let metrics = font.v_metrics_unscaled();
    let units_per_em = font.units_per_em() as f32;
    Scale::uniform(em_size * (metrics.ascent - metrics.descent) / units_per_em)
}

/// Draw `ch` so that the center of its ink bounding box lands on `center`
///
/// Coverage is blended over the existing pixels; parts off the canvas are clipped.
///
/// # Errors
/// Fails if the font has no outline for `ch`.
pub fn draw_centered_glyph(
    img: &mut RgbaImage,
    font: &Font,
    ch: char,
    center: Point,
    em_size: f32,
    color: Rgba<u8>,
) -> Result<()> {
    let glyph = font.glyph(ch);
    if glyph.id().0 == 0 {
        bail!("Font has no glyph for {ch:?}");
    }
    let scaled = glyph.scaled(em_scale(font, em_size));

    let bbox = scaled
        .clone()
        .positioned(point(0.0, 0.0))
        .pixel_bounding_box()
        .with_context(|| format!("Glyph {ch:?} has no outline"))?;

    let origin_x = center.x.round() as i32 - bbox.width() / 2 - bbox.min.x;
    let origin_y = center.y.round() as i32 - bbox.height() / 2 - bbox.min.y;
    let positioned = scaled.positioned(point(origin_x as f32, origin_y as f32));

    let Some(placed) = positioned.pixel_bounding_box() else {
        return Ok(());
    };

    let (width, height) = (img.width() as i32, img.height() as i32);
    positioned.draw(|gx, gy, coverage| {
        let x = placed.min.x + gx as i32;
        let y = placed.min.y + gy as i32;
        if x >= 0 && y >= 0 && x < width && y < height {
            blend_pixel(img.get_pixel_mut(x as u32, y as u32), color, coverage);
        }
    });

    Ok(())
}
