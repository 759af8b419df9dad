use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::frame::Frame;
use crate::io::image_io::save_png;

/// Destination for annotated frames.
pub trait DisplaySink {
    fn show(&mut self, title: &str, seq: u32, frame: &Frame) -> Result<()>;

    /// Release whatever the sink holds. Called once at shutdown.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Discards frames, counting them.
#[derive(Debug, Default)]
pub struct NullSink {
    pub shown: usize,
}

impl DisplaySink for NullSink {
    fn show(&mut self, _title: &str, _seq: u32, _frame: &Frame) -> Result<()> {
        self.shown += 1;
        Ok(())
    }
}

/// Writes each frame as `<title>_<seq>.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: usize,
}

impl PngSequenceSink {
    /// Create the output directory if needed.
    pub fn create(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            written: 0,
        })
    }

    pub fn frame_path(&self, title: &str, seq: u32) -> PathBuf {
        let stem: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}_{:06}.png", stem, seq))
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl DisplaySink for PngSequenceSink {
    fn show(&mut self, title: &str, seq: u32, frame: &Frame) -> Result<()> {
        let path = self.frame_path(title, seq);
        save_png(frame, &path)?;
        self.written += 1;
        debug!(path = %path.display(), "Frame written");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        info!(dir = %self.dir.display(), frames = self.written, "Frame sequence closed");
        Ok(())
    }
}

/// Scoped handle on a display sink.
///
/// The sink is closed exactly once: by `shutdown`, or on drop if
/// `shutdown` was never called.
pub struct Display {
    sink: Box<dyn DisplaySink>,
    title: String,
    closed: bool,
}

impl Display {
    pub fn open(sink: Box<dyn DisplaySink>, title: impl Into<String>) -> Self {
        Self {
            sink,
            title: title.into(),
            closed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show(&mut self, seq: u32, frame: &Frame) -> Result<()> {
        self.sink.show(&self.title, seq, frame)
    }

    pub fn shutdown(mut self) -> Result<()> {
        self.closed = true;
        self.sink.close()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.sink.close() {
            warn!(error = %e, "Display close failed");
        }
    }
}
