use crate::contents_json::{app_icon_contents, write_contents_json};
use crate::draw::{
    draw_ring, fill_polygon, hex_to_rgba, linear_gradient, with_alpha, Point,
};
use crate::glyph::draw_centered_glyph;
use crate::leaf::leaf_polygon;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, RgbaImage,
};
use rusttype::Font;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Canvas edge in pixels
pub const SIZE: u32 = 1024;
const CENTER: f64 = (SIZE / 2) as f64;

/// Icon set location relative to the repository root
pub const OUTPUT_SUBDIR: &str = "personal_finance/Assets.xcassets/AppIcon.appiconset";

const BRAND_GREEN: &str = "#8BC34A";
const BRAND_GREEN_DEEP: &str = "#2E7D32";
const DARK_BACKGROUND: &str = "#1B5E20";
const WHITE: &str = "#FFFFFF";
const SUBTLE_ALPHA: u8 = 70;

const COIN_RADIUS: f64 = 300.0;
const COIN_STROKE: f64 = 36.0;
const INNER_RING_RADIUS: f64 = 262.0;
const INNER_RING_STROKE: f64 = 3.0;

const GLYPH: char = '$';
const GLYPH_EM_SIZE: f32 = 420.0;
// optical centering: the glyph sits slightly low inside the coin
const GLYPH_DROP: f64 = 8.0;

const LEAF_BASE_DX: f64 = 15.0;
const LEAF_BASE_DY: f64 = -180.0;
const LEAF_LENGTH: f64 = 200.0;
const LEAF_ANGLE_DEG: f64 = 52.0;
const LEAF_SEGMENTS: usize = 80;

/// Default output directory: the app's AppIcon set inside this repository
pub fn output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_SUBDIR)
}

/// How the canvas is filled before the emblem is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Diagonal gradient, top-left to bottom-right
    Gradient { from: &'static str, to: &'static str },
    Solid(&'static str),
}

/// Colors for one icon variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Background,
    /// Coin ring, glyph and leaf color; the inner ring uses it at low alpha
    pub ink: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            Variant::Light => "icon_light.png",
            Variant::Dark => "icon_dark.png",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Variant::Light => Palette {
                background: Background::Gradient {
                    from: BRAND_GREEN,
                    to: BRAND_GREEN_DEEP,
                },
                ink: WHITE,
            },
            Variant::Dark => Palette {
                background: Background::Solid(DARK_BACKGROUND),
                ink: BRAND_GREEN,
            },
        }
    }

    pub fn render(self, font: &Font) -> Result<RgbaImage> {
        render_icon(&self.palette(), font)
            .with_context(|| format!("Failed to render {} icon", self.name()))
    }
}

/// Draw one full icon: background, rings, glyph, leaf
pub fn render_icon(palette: &Palette, font: &Font) -> Result<RgbaImage> {
    let mut img = paint_background(&palette.background)?;
    let ink = hex_to_rgba(palette.ink, 255)?;

    draw_coin(&mut img, ink);
    draw_centered_glyph(
        &mut img,
        font,
        GLYPH,
        Point::new(CENTER, CENTER + GLYPH_DROP),
        GLYPH_EM_SIZE,
        ink,
    )?;
    draw_leaf(&mut img, ink);

    Ok(img)
}

pub fn paint_background(background: &Background) -> Result<RgbaImage> {
    Ok(match *background {
        Background::Gradient { from, to } => {
            linear_gradient(SIZE, hex_to_rgba(from, 255)?, hex_to_rgba(to, 255)?)
        }
        Background::Solid(color) => ImageBuffer::from_pixel(SIZE, SIZE, hex_to_rgba(color, 255)?),
    })
}

/// Outer coin ring plus the faint inner ring
pub fn draw_coin(img: &mut RgbaImage, ink: image::Rgba<u8>) {
    let center = Point::new(CENTER, CENTER);
    draw_ring(img, center, COIN_RADIUS, COIN_STROKE, ink);
    draw_ring(
        img,
        center,
        INNER_RING_RADIUS,
        INNER_RING_STROKE,
        with_alpha(ink, SUBTLE_ALPHA),
    );
}

/// Leaf sprouting up and to the right from the top of the glyph
pub fn draw_leaf(img: &mut RgbaImage, ink: image::Rgba<u8>) {
    let base = Point::new(CENTER + LEAF_BASE_DX, CENTER + LEAF_BASE_DY);
    let outline = leaf_polygon(base, LEAF_LENGTH, LEAF_ANGLE_DEG, LEAF_SEGMENTS);
    fill_polygon(img, &outline, ink);
}

/// Render both variants into `out_dir` and write the icon set manifest
///
/// Creates `out_dir` when missing. Returns the written paths: the PNGs in
/// variant order, then `Contents.json`.
pub fn generate_icon_set(out_dir: &Path, font: &Font) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    let mut written = Vec::new();
    for variant in Variant::ALL {
        println!("Generating {} icon...", variant.name());
        let img = variant.render(font)?;
        let path = out_dir.join(variant.filename());
        save_png(&img, &path)?;
        println!("  ✓ Saved: {}", path.display());
        written.push(path);
    }

    let contents = app_icon_contents(Variant::Light.filename(), Variant::Dark.filename(), SIZE);
    let contents_path = write_contents_json(out_dir, &contents)?;
    println!("  ✓ Updated: {}", contents_path.display());
    written.push(contents_path);

    Ok(written)
}

/// Save an RGBA image as PNG with fixed encoder settings
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(img.as_raw(), &mut out_file, img.width(), img.height())?;
    out_file.flush().context("Failed to write PNG")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, width, height, ColorType::Rgba8)
        .context("Failed to encode PNG")?;
    Ok(())
}
