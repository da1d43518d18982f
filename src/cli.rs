use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use crate::models::ImageSize;

/// Generate images using Google Gemini.
#[derive(Debug, Parser)]
#[command(
    name = "gemimg",
    version,
    about = "Generate images using Google Gemini",
    after_help = "Examples:\n  \
        gemimg --prompt \"A cat in space\" --output cat.png\n  \
        gemimg --prompt \"Same style but blue\" --reference input.png --output blue.png\n  \
        gemimg --prompt \"Abstract art\" --output art.png --size 2K"
)]
pub struct Cli {
    /// Text prompt describing the image to generate
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub prompt: String,

    /// Output file path for the generated image
    #[arg(long)]
    pub output: PathBuf,

    /// Reference image path(s) for style/content guidance.
    /// Can be specified multiple times; order is preserved.
    #[arg(long = "reference")]
    pub references: Vec<PathBuf>,

    /// Output image size
    #[arg(long, value_enum, default_value = "4K")]
    pub size: ImageSize,
}
