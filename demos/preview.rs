//! Prints an image preview to stdout.
//!
//! ```text
//! cargo run --example preview -- path/to/image.png --width 60 --background '#1e1e2e'
//! ```
//!
//! Set `RUST_LOG=debug` to see format detection and scaling decisions.

use anyhow::Context;
use blockpeek::Previewer;
use blockpeek::loading;
use blockpeek::loading::resize::ResizeFilter;
use blockpeek::options::PreviewOptions;
use blockpeek::rendering::color::BackgroundColor;
use clap::Parser;
use std::io::stdout;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Preview an image in the terminal using half blocks")]
struct Args {
    /// Image to preview (GIF, JPEG or PNG).
    path: PathBuf,
    /// Maximum width in columns. Defaults to the terminal width.
    #[arg(long)]
    width: Option<u32>,
    /// Maximum height in image rows (two per line). Defaults to twice the terminal height.
    #[arg(long)]
    height: Option<u32>,
    /// Color drawn behind transparent pixels.
    #[arg(long, default_value = "#000000")]
    background: BackgroundColor,
    #[arg(long, value_enum, default_value_t = ResizeFilter::Lanczos3)]
    filter: ResizeFilter,
}

fn default_width(columns: u16) -> u32 {
    u32::from(columns).max(1)
}

fn default_height(lines: u16) -> u32 {
    (u32::from(lines.saturating_sub(1)) * 2).max(2)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // leave a line for the prompt; tiny or unknown terminals still get one row of cells
    let (columns, lines) = crossterm::terminal::size().unwrap_or((80, 25));
    let options = PreviewOptions::new(
        args.width.unwrap_or_else(|| default_width(columns)),
        args.height.unwrap_or_else(|| default_height(lines)),
    )
    .with_background(args.background)
    .with_filter(args.filter);

    let previewer = Previewer::new(options)?;
    let raster = loading::load_and_scale_with(
        previewer.registry(),
        &args.path,
        options.max_width,
        options.max_height,
        options.filter,
    )?;
    previewer
        .renderer()
        .write_to(&raster, &mut stdout().lock())
        .context("failed to write preview")?;
    Ok(())
}
