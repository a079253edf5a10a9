use anyhow::Result;
use clap::Parser;

use growth_icon::{glyph, icon_gen};

// No options: every drawing parameter is a constant.
#[derive(Debug, Parser)]
#[clap(
    name = "growth-icon",
    version,
    about = "Draw the light and dark Growth Coin app icons and their Contents.json"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let font = glyph::load_font(glyph::FONT_CANDIDATES)?;
    icon_gen::generate_icon_set(&icon_gen::output_dir(), &font)?;

    println!("\nDone!");
    Ok(())
}
