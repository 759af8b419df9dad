use ndarray::Array2;
use tracing::debug;

use crate::color::{color_mask, ColorRange};
use crate::frame::Frame;

use super::annotate::{draw_circle, fill_circle};
use super::config::DetectorConfig;
use super::contour::{find_external_contours, Contour};
use super::enclosing::{min_enclosing_circle, Circle};
use super::morphology::morphological_opening;

/// The largest blob of the target color, bounded by its enclosing circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Circle center rounded to the nearest pixel, as (x, y).
    pub center: (i64, i64),
    /// Circle radius rounded to the nearest pixel.
    pub radius: u32,
    /// Unrounded enclosing circle.
    pub circle: Circle,
    /// Area enclosed by the selected contour.
    pub contour_area: f64,
}

/// Stateless color blob detector.
#[derive(Clone, Debug, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Build the cleaned-up binary mask of the target color.
    pub fn mask(&self, frame: &Frame) -> Array2<bool> {
        let mask = color_mask(frame, &self.config.color_range);
        morphological_opening(&mask, self.config.kernel_size)
    }

    /// Find the largest blob of the target color and annotate it in place.
    ///
    /// Pipeline: BGR -> HSV -> in-range mask -> erode -> dilate ->
    /// external contours -> largest by area -> minimum enclosing circle ->
    /// draw outline and center marker.
    ///
    /// Returns `None`, leaving the frame untouched, when no region survives.
    pub fn detect(&self, frame: &mut Frame) -> Option<Detection> {
        if frame.is_empty() {
            return None;
        }

        let mask = self.mask(frame);
        let contours = find_external_contours(&mask);
        debug!(count = contours.len(), "external contours");

        let largest = largest_contour(&contours)?;
        let circle = min_enclosing_circle(&largest.points)?;
        let (center, radius) = circle.rounded();

        draw_circle(
            frame,
            center,
            radius,
            self.config.outline_thickness,
            self.config.outline_color,
        );
        fill_circle(
            frame,
            center,
            self.config.marker_radius,
            self.config.marker_color,
        );

        Some(Detection {
            center,
            radius,
            circle,
            contour_area: largest.area,
        })
    }
}

/// First contour with the maximum enclosed area.
fn largest_contour(contours: &[Contour]) -> Option<&Contour> {
    contours.iter().fold(None, |best: Option<&Contour>, c| match best {
        Some(b) if b.area >= c.area => Some(b),
        _ => Some(c),
    })
}

/// Detect with default morphology and drawing settings.
///
/// Takes ownership of the frame and hands it back annotated (or untouched
/// when nothing matched).
pub fn detect(mut frame: Frame, range: &ColorRange) -> (Frame, Option<Detection>) {
    let detector = Detector::new(DetectorConfig::with_color_range(*range));
    let detection = detector.detect(&mut frame);
    (frame, detection)
}
