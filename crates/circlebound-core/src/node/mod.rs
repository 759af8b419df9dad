pub mod config;
pub mod display;
pub mod runner;
pub mod source;

pub use config::{DisplayConfig, NodeConfig};
pub use display::{Display, DisplaySink, NullSink, PngSequenceSink};
pub use runner::{Node, SpinStats};
pub use source::{ChannelSource, FrameSource, ImageDirSource, SerSource};
