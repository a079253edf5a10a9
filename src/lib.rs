//! Procedural generator for the "Growth Coin" app icon.
//!
//! Draws a light and a dark variant (coin ring, `$` glyph, leaf) on a
//! 1024×1024 canvas and writes them with an asset catalog `Contents.json`.

pub mod contents_json;
pub mod draw;
pub mod glyph;
pub mod icon_gen;
pub mod leaf;
