#![allow(dead_code)]

use circlebound_core::consts::SER_HEADER_SIZE;
use circlebound_core::frame::Frame;
use circlebound_core::io::{Encoding, ImageMessage};

/// Pure green in BGR order; HSV (60, 255, 255), inside the default range.
pub const GREEN: [u8; 3] = [0, 255, 0];
/// Pure blue in BGR order; HSV (120, 255, 255), outside the default range.
pub const BLUE: [u8; 3] = [255, 0, 0];
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Black frame with filled disks of the given color. Each disk is
/// `(center_x, center_y, radius)`.
pub fn disk_frame(width: usize, height: usize, disks: &[(f64, f64, f64)], color: [u8; 3]) -> Frame {
    let mut frame = Frame::filled(width, height, BLACK);
    for &(cx, cy, r) in disks {
        for y in 0..height {
            for x in 0..width {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r * r {
                    frame.put_pixel(x as i64, y as i64, color);
                }
            }
        }
    }
    frame
}

/// Tightly packed BGR bytes of a frame, row-major.
pub fn bgr_bytes(frame: &Frame) -> Vec<u8> {
    frame.data.iter().copied().collect()
}

/// `bgr8` message carrying the frame.
pub fn bgr_message(frame: &Frame, seq: u32) -> ImageMessage {
    let mut msg = ImageMessage::packed(
        frame.width() as u32,
        frame.height() as u32,
        Encoding::Bgr8,
        bgr_bytes(frame),
    );
    msg.header.seq = seq;
    msg
}

/// Build a SER file header with configurable bit depth and color mode.
///
/// `color_id`: 0=MONO, 8=BAYER_RGGB, 100=RGB, 101=BGR
pub fn build_ser_header(
    width: u32,
    height: u32,
    bit_depth: u32,
    num_frames: usize,
    color_id: i32,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SER_HEADER_SIZE);

    // Magic (14 bytes)
    buf.extend_from_slice(b"LUCAM-RECORDER");
    // LuID
    buf.extend_from_slice(&0i32.to_le_bytes());
    // ColorID
    buf.extend_from_slice(&color_id.to_le_bytes());
    // LittleEndian = 0 (treated as little-endian)
    buf.extend_from_slice(&0i32.to_le_bytes());
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    buf.extend_from_slice(&(height as i32).to_le_bytes());
    buf.extend_from_slice(&(bit_depth as i32).to_le_bytes());
    buf.extend_from_slice(&(num_frames as i32).to_le_bytes());
    // Observer, Instrument, Telescope (40 bytes each)
    let mut observer = [0u8; 40];
    observer[..4].copy_from_slice(b"test");
    buf.extend_from_slice(&observer);
    buf.extend_from_slice(&[0u8; 40]);
    buf.extend_from_slice(&[0u8; 40]);
    // DateTime, DateTimeUTC
    buf.extend_from_slice(&0u64.to_le_bytes());
    buf.extend_from_slice(&0u64.to_le_bytes());

    assert_eq!(buf.len(), SER_HEADER_SIZE);
    buf
}

/// Complete 8-bit BGR SER file holding the given frames.
pub fn build_bgr_ser(frames: &[Frame]) -> Vec<u8> {
    let (w, h) = (frames[0].width() as u32, frames[0].height() as u32);
    let mut buf = build_ser_header(w, h, 8, frames.len(), 101);
    for frame in frames {
        buf.extend_from_slice(&bgr_bytes(frame));
    }
    buf
}

/// Write bytes to a temporary file that lives as long as the handle.
pub fn write_temp(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write data");
    f.flush().expect("flush");
    f
}
