pub mod annotate;
pub mod components;
pub mod config;
pub mod contour;
pub mod detector;
pub mod enclosing;
pub mod morphology;

pub use config::DetectorConfig;
pub use detector::{detect, Detection, Detector};
pub use enclosing::Circle;
