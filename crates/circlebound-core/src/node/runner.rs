use std::path::Path;

use tracing::{error, info, warn};

use crate::detection::{Detection, Detector};
use crate::error::Result;
use crate::io::{decode_bgr8, ImageMessage};

use super::config::NodeConfig;
use super::display::{Display, DisplaySink, NullSink, PngSequenceSink};
use super::source::FrameSource;

/// Counters reported when a node stops spinning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpinStats {
    /// Messages taken from the source, including unreadable ones.
    pub received: usize,
    /// Messages dropped because they could not be decoded.
    pub dropped: usize,
    /// Frames in which an object was found.
    pub detections: usize,
}

/// Per-frame detection node: decode, detect, annotate, display.
pub struct Node {
    name: String,
    detector: Detector,
    display: Display,
    stats: SpinStats,
}

impl Node {
    pub fn new(config: &NodeConfig, sink: Box<dyn DisplaySink>) -> Result<Self> {
        config.validate()?;
        info!(node = %config.node_name, topic = %config.topic, "Node started");
        Ok(Self {
            name: config.node_name.clone(),
            detector: Detector::new(config.detector.clone()),
            display: Display::open(sink, config.display.title.clone()),
            stats: SpinStats::default(),
        })
    }

    /// Node with the sink described by `config.display`.
    pub fn from_config(config: &NodeConfig) -> Result<Self> {
        let sink: Box<dyn DisplaySink> = match &config.display.output_dir {
            Some(dir) => Box::new(PngSequenceSink::create(Path::new(dir))?),
            None => Box::new(NullSink::default()),
        };
        Self::new(config, sink)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &SpinStats {
        &self.stats
    }

    /// Handle one message from the subscription.
    ///
    /// A message that fails to decode is logged and dropped; the node stays
    /// ready for the next one.
    pub fn image_process(&mut self, msg: &ImageMessage) -> Option<Detection> {
        self.stats.received += 1;

        let mut frame = match decode_bgr8(msg) {
            Ok(frame) => frame,
            Err(e) => {
                error!(seq = msg.header.seq, "Error converting image: {e}");
                self.stats.dropped += 1;
                return None;
            }
        };

        info!("Image width: {} height: {}", frame.width(), frame.height());

        let detection = self.detector.detect(&mut frame);
        if let Some(ref d) = detection {
            self.stats.detections += 1;
            info!(
                "Object detected at center: ({}, {}), radius: {}",
                d.center.0, d.center.1, d.radius
            );
        }

        if let Err(e) = self.display.show(msg.header.seq, &frame) {
            warn!(seq = msg.header.seq, error = %e, "Failed to display frame");
        }

        detection
    }

    /// Process messages until the source shuts down, then release the display.
    pub fn spin(self, source: &mut dyn FrameSource) -> Result<SpinStats> {
        self.spin_with(source, |_| {})
    }

    /// Like `spin`, calling `on_frame` after every message.
    ///
    /// Unreadable messages are dropped. Any other source error ends the spin
    /// and is returned after the display has been released; it takes
    /// precedence over a failure to close the display.
    pub fn spin_with<F>(
        mut self,
        source: &mut dyn FrameSource,
        mut on_frame: F,
    ) -> Result<SpinStats>
    where
        F: FnMut(&SpinStats),
    {
        info!(topic = source.topic(), "Subscribed");
        let mut failure = None;

        while let Some(next) = source.next_message() {
            match next {
                Ok(msg) => {
                    self.image_process(&msg);
                }
                Err(e) if e.is_frame_decode() => {
                    error!("Error converting image: {e}");
                    self.stats.received += 1;
                    self.stats.dropped += 1;
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
            on_frame(&self.stats);
        }

        info!("Shutting down...");
        let stats = self.stats.clone();
        let closed = self.display.shutdown();

        match failure {
            Some(e) => {
                if let Err(close_err) = closed {
                    warn!(error = %close_err, "Display close failed");
                }
                Err(e)
            }
            None => closed.map(|()| stats),
        }
    }
}
