use std::fmt;
use std::str::FromStr;

use crate::consts::FRAME_CHANNELS;
use crate::error::{CircleboundError, Result};
use crate::frame::Frame;

/// Per-message header carried alongside the pixel payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageHeader {
    /// Sequence number assigned by the source.
    pub seq: u32,
    /// Capture timestamp in microseconds, when the source knows it.
    pub stamp_us: Option<u64>,
    /// Identifier of the capture device or file.
    pub frame_id: String,
}

/// Raw image as it arrives over the transport, before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMessage {
    pub header: MessageHeader,
    pub height: u32,
    pub width: u32,
    /// Pixel encoding name, e.g. `bgr8`, `rgb8`, `mono16`.
    pub encoding: String,
    /// Byte order of multi-byte samples.
    pub is_bigendian: bool,
    /// Row stride in bytes.
    pub step: u32,
    pub data: Vec<u8>,
}

/// Pixel encodings the decoder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Bgr8,
    Rgb8,
    Bgra8,
    Rgba8,
    Mono8,
    Mono16,
}

impl Encoding {
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            Encoding::Mono8 => 1,
            Encoding::Mono16 => 2,
            Encoding::Bgr8 | Encoding::Rgb8 => 3,
            Encoding::Bgra8 | Encoding::Rgba8 => 4,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Encoding::Bgr8 => "bgr8",
            Encoding::Rgb8 => "rgb8",
            Encoding::Bgra8 => "bgra8",
            Encoding::Rgba8 => "rgba8",
            Encoding::Mono8 => "mono8",
            Encoding::Mono16 => "mono16",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = CircleboundError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bgr8" => Ok(Encoding::Bgr8),
            "rgb8" => Ok(Encoding::Rgb8),
            "bgra8" => Ok(Encoding::Bgra8),
            "rgba8" => Ok(Encoding::Rgba8),
            "mono8" | "8UC1" => Ok(Encoding::Mono8),
            "mono16" | "16UC1" => Ok(Encoding::Mono16),
            other => Err(CircleboundError::UnsupportedEncoding(other.to_string())),
        }
    }
}

impl ImageMessage {
    /// Tightly packed message (step = width * bytes per pixel).
    pub fn packed(width: u32, height: u32, encoding: Encoding, data: Vec<u8>) -> Self {
        Self {
            header: MessageHeader::default(),
            height,
            width,
            encoding: encoding.as_str().to_string(),
            is_bigendian: false,
            step: width * encoding.bytes_per_pixel() as u32,
            data,
        }
    }

    pub fn with_header(mut self, header: MessageHeader) -> Self {
        self.header = header;
        self
    }
}

/// Decode a message into a BGR8 frame.
///
/// Fails when the dimensions are zero, the encoding is unknown, the row
/// stride is too short for the encoding, or the payload is truncated.
pub fn decode_bgr8(msg: &ImageMessage) -> Result<Frame> {
    if msg.width == 0 || msg.height == 0 {
        return Err(CircleboundError::FrameDecode(format!(
            "zero-sized image {}x{}",
            msg.width, msg.height
        )));
    }

    let encoding: Encoding = msg.encoding.parse()?;
    let w = msg.width as usize;
    let h = msg.height as usize;
    let bpp = encoding.bytes_per_pixel();
    let step = msg.step as usize;

    if step < w * bpp {
        return Err(CircleboundError::FrameDecode(format!(
            "row step {} too small for {} pixels of {}",
            step, w, encoding
        )));
    }
    let needed = step * (h - 1) + w * bpp;
    if msg.data.len() < needed {
        return Err(CircleboundError::FrameDecode(format!(
            "payload truncated: expected at least {} bytes, got {}",
            needed,
            msg.data.len()
        )));
    }

    let mut bgr = Vec::with_capacity(w * h * FRAME_CHANNELS);
    for row in 0..h {
        let line = &msg.data[row * step..row * step + w * bpp];
        for px in line.chunks_exact(bpp) {
            let triple = match encoding {
                Encoding::Bgr8 | Encoding::Bgra8 => [px[0], px[1], px[2]],
                Encoding::Rgb8 | Encoding::Rgba8 => [px[2], px[1], px[0]],
                Encoding::Mono8 => [px[0]; 3],
                Encoding::Mono16 => {
                    let high = if msg.is_bigendian { px[0] } else { px[1] };
                    [high; 3]
                }
            };
            bgr.extend_from_slice(&triple);
        }
    }

    Frame::from_bgr_bytes(w, h, bgr)
}
