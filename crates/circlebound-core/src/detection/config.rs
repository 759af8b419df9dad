use serde::{Deserialize, Serialize};

use crate::color::ColorRange;
use crate::consts::{
    DEFAULT_KERNEL_SIZE, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_RADIUS, DEFAULT_OUTLINE_COLOR,
    DEFAULT_OUTLINE_THICKNESS,
};
use crate::error::{CircleboundError, Result};

/// Configuration for color blob detection and annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// HSV bounds of the target color.
    #[serde(default)]
    pub color_range: ColorRange,
    /// Side of the square structuring element for erosion/dilation.
    #[serde(default = "default_kernel_size")]
    pub kernel_size: usize,
    /// Outline thickness in pixels.
    #[serde(default = "default_outline_thickness")]
    pub outline_thickness: u32,
    /// Outline color, BGR.
    #[serde(default = "default_outline_color")]
    pub outline_color: [u8; 3],
    /// Center marker radius in pixels.
    #[serde(default = "default_marker_radius")]
    pub marker_radius: u32,
    /// Center marker color, BGR.
    #[serde(default = "default_marker_color")]
    pub marker_color: [u8; 3],
}

fn default_kernel_size() -> usize {
    DEFAULT_KERNEL_SIZE
}
fn default_outline_thickness() -> u32 {
    DEFAULT_OUTLINE_THICKNESS
}
fn default_outline_color() -> [u8; 3] {
    DEFAULT_OUTLINE_COLOR
}
fn default_marker_radius() -> u32 {
    DEFAULT_MARKER_RADIUS
}
fn default_marker_color() -> [u8; 3] {
    DEFAULT_MARKER_COLOR
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            color_range: ColorRange::default(),
            kernel_size: DEFAULT_KERNEL_SIZE,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            outline_color: DEFAULT_OUTLINE_COLOR,
            marker_radius: DEFAULT_MARKER_RADIUS,
            marker_color: DEFAULT_MARKER_COLOR,
        }
    }
}

impl DetectorConfig {
    pub fn with_color_range(color_range: ColorRange) -> Self {
        Self {
            color_range,
            ..Self::default()
        }
    }

    /// Reject settings the detector cannot run with.
    /// An inverted color range is accepted and never matches.
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 {
            return Err(CircleboundError::InvalidConfig(
                "kernel_size must be at least 1".into(),
            ));
        }
        if self.outline_thickness == 0 {
            return Err(CircleboundError::InvalidConfig(
                "outline_thickness must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
