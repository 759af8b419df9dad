use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::frame::Frame;

use super::message::{decode_bgr8, Encoding, ImageMessage, MessageHeader};

/// File extensions picked up when reading a directory of frames.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "tif", "tiff", "bmp", "ppm"];

/// True when the path has one of the supported image extensions.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Load an image file as an `rgb8` message.
pub fn load_message(path: &Path, seq: u32) -> Result<ImageMessage> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    let header = MessageHeader {
        seq,
        stamp_us: None,
        frame_id: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    Ok(ImageMessage::packed(w, h, Encoding::Rgb8, img.into_raw()).with_header(header))
}

/// Load an image file straight into a BGR frame.
pub fn load_frame(path: &Path) -> Result<Frame> {
    decode_bgr8(&load_message(path, 0)?)
}

/// Save a frame as 8-bit RGB PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = (frame.height(), frame.width());
    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let [b, g, r] = frame.pixel(col, row);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
