use ndarray::Array3;

use crate::consts::FRAME_CHANNELS;
use crate::error::{CircleboundError, Result};

/// A decoded color frame with interleaved 8-bit B, G, R channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Pixel data, shape = (height, width, 3), channel order B, G, R.
    pub data: Array3<u8>,
}

impl Frame {
    /// Wrap a `(height, width, 3)` array. Any other channel count is rejected.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != FRAME_CHANNELS {
            return Err(CircleboundError::FrameDecode(format!(
                "expected {} channels, got {}",
                FRAME_CHANNELS, channels
            )));
        }
        Ok(Self { data })
    }

    /// Frame filled with a single BGR color.
    pub fn filled(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        let data = Array3::from_shape_fn((height, width, FRAME_CHANNELS), |(_, _, c)| bgr[c]);
        Self { data }
    }

    /// Build a frame from a tightly packed BGR byte buffer.
    pub fn from_bgr_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = width * height * FRAME_CHANNELS;
        if bytes.len() != expected {
            return Err(CircleboundError::FrameDecode(format!(
                "expected {} bytes for {}x{} bgr8, got {}",
                expected,
                width,
                height,
                bytes.len()
            )));
        }
        let data = Array3::from_shape_vec((height, width, FRAME_CHANNELS), bytes)
            .map_err(|e| CircleboundError::FrameDecode(e.to_string()))?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// BGR triple at (x, y). Panics if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [self.data[[y, x, 0]], self.data[[y, x, 1]], self.data[[y, x, 2]]]
    }

    /// Write a BGR triple at (x, y) if inside the frame.
    pub fn put_pixel(&mut self, x: i64, y: i64, bgr: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        for (c, &v) in bgr.iter().enumerate() {
            self.data[[y, x, c]] = v;
        }
    }
}
