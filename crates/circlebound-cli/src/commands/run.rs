use std::path::PathBuf;

use anyhow::{Context, Result};
use circlebound_core::node::{FrameSource, ImageDirSource, Node, NodeConfig, SerSource};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::parse_hsv;
use crate::summary::{print_run_summary, print_spin_stats};

#[derive(Args)]
pub struct RunArgs {
    /// Input SER file or directory of images
    pub input: PathBuf,

    /// Node config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for annotated PNG frames
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Lower HSV bound as H,S,V
    #[arg(long, value_parser = parse_hsv)]
    pub lower: Option<[u8; 3]>,

    /// Upper HSV bound as H,S,V
    #[arg(long, value_parser = parse_hsv)]
    pub upper: Option<[u8; 3]>,

    /// Topic name reported by the node
    #[arg(long)]
    pub topic: Option<String>,
}

/// Load the config file (or defaults) and apply command-line overrides.
pub fn load_config(args: &RunArgs) -> Result<NodeConfig> {
    let mut config: NodeConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid node config")?
    } else {
        NodeConfig::default()
    };

    if let Some(lower) = args.lower {
        config.detector.color_range.lower = lower;
    }
    if let Some(upper) = args.upper {
        config.detector.color_range.upper = upper;
    }
    if let Some(ref topic) = args.topic {
        config.topic = topic.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.display.output_dir = Some(dir.clone());
    }

    config.validate().context("Invalid node config")?;
    Ok(config)
}

pub fn run(args: &RunArgs, config: &NodeConfig) -> Result<()> {
    debug!(?config, "Node config");

    let mut source: Box<dyn FrameSource> = if args.input.is_dir() {
        Box::new(
            ImageDirSource::open(&args.input, config.topic.clone())
                .with_context(|| format!("Failed to list {}", args.input.display()))?,
        )
    } else {
        Box::new(
            SerSource::open(&args.input, config.topic.clone())
                .with_context(|| format!("Failed to open {}", args.input.display()))?,
        )
    };

    print_run_summary(config, &args.input);

    let node = Node::from_config(config)?;

    let pb = match source.len_hint() {
        Some(total) => ProgressBar::new(total as u64),
        None => ProgressBar::new_spinner(),
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Frames");

    let stats = node.spin_with(source.as_mut(), |stats| {
        pb.set_position(stats.received as u64);
    })?;

    pb.finish_with_message("Done");
    print_spin_stats(&stats);

    Ok(())
}
