use std::path::PathBuf;

use anyhow::{Context, Result};
use circlebound_core::detection::{Detector, DetectorConfig};
use circlebound_core::io::image_io::{load_frame, save_png};
use clap::Args;

use super::parse_hsv;
use crate::summary::print_detection;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image
    pub image: PathBuf,

    /// Save the annotated image here (PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lower HSV bound as H,S,V
    #[arg(long, value_parser = parse_hsv)]
    pub lower: Option<[u8; 3]>,

    /// Upper HSV bound as H,S,V
    #[arg(long, value_parser = parse_hsv)]
    pub upper: Option<[u8; 3]>,

    /// Structuring element size for erosion/dilation
    #[arg(long, default_value = "5")]
    pub kernel: usize,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let mut frame = load_frame(&args.image)
        .with_context(|| format!("Failed to load {}", args.image.display()))?;

    let mut config = DetectorConfig {
        kernel_size: args.kernel,
        ..DetectorConfig::default()
    };
    if let Some(lower) = args.lower {
        config.color_range.lower = lower;
    }
    if let Some(upper) = args.upper {
        config.color_range.upper = upper;
    }
    config.validate()?;

    let detector = Detector::new(config);
    let detection = detector.detect(&mut frame);
    print_detection(&args.image, frame.width(), frame.height(), detection.as_ref());

    if let Some(ref out) = args.output {
        save_png(&frame, out).with_context(|| format!("Failed to save {}", out.display()))?;
        println!("Annotated image saved to {}", out.display());
    }

    Ok(())
}
