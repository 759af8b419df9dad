use std::fs::File;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;

use crate::consts::SER_HEADER_SIZE;
use crate::error::{CircleboundError, Result};

use super::message::{Encoding, ImageMessage, MessageHeader};

const SER_MAGIC: &[u8; 14] = b"LUCAM-RECORDER";

/// Pixel layout declared by the SER `ColorID` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerColor {
    Mono,
    /// Raw Bayer mosaic; delivered as mono.
    Bayer,
    Rgb,
    Bgr,
}

/// SER file header (178 bytes).
#[derive(Clone, Debug)]
pub struct SerHeader {
    pub color_id: i32,
    pub little_endian: bool,
    pub width: u32,
    pub height: u32,
    pub pixel_depth: u32,
    pub frame_count: u32,
    pub observer: String,
    pub instrument: String,
    pub telescope: String,
    pub date_time: u64,
    pub date_time_utc: u64,
}

impl SerHeader {
    /// Bytes per sample (1 for 8-bit, 2 for 9-16 bit).
    pub fn bytes_per_sample(&self) -> usize {
        if self.pixel_depth <= 8 {
            1
        } else {
            2
        }
    }

    /// Samples per pixel (1 for mono/bayer, 3 for RGB/BGR).
    pub fn planes_per_pixel(&self) -> usize {
        match self.color() {
            SerColor::Rgb | SerColor::Bgr => 3,
            SerColor::Mono | SerColor::Bayer => 1,
        }
    }

    /// Total bytes per frame, or `None` on overflow.
    pub fn frame_byte_size(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.bytes_per_sample() * self.planes_per_pixel())
    }

    /// Bytes of frame data after the header, or `None` on overflow.
    pub fn data_byte_size(&self) -> Option<usize> {
        self.frame_byte_size()?.checked_mul(self.frame_count as usize)
    }

    pub fn color(&self) -> SerColor {
        match self.color_id {
            8..=19 => SerColor::Bayer,
            100 => SerColor::Rgb,
            101 => SerColor::Bgr,
            _ => SerColor::Mono,
        }
    }

    /// Encoding of the 8-bit messages produced from this file.
    pub fn message_encoding(&self) -> Encoding {
        match self.color() {
            SerColor::Rgb => Encoding::Rgb8,
            SerColor::Bgr => Encoding::Bgr8,
            SerColor::Mono | SerColor::Bayer => Encoding::Mono8,
        }
    }
}

/// Memory-mapped SER video reader.
pub struct SerReader {
    mmap: Mmap,
    path: PathBuf,
    /// Offset of the timestamp trailer, just past the last frame.
    data_end: usize,
    pub header: SerHeader,
}

impl SerReader {
    /// Open a SER file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < SER_HEADER_SIZE {
            return Err(CircleboundError::InvalidSer(
                "File too small for SER header".into(),
            ));
        }

        if &mmap[0..14] != SER_MAGIC {
            return Err(CircleboundError::InvalidSer(
                "Missing LUCAM-RECORDER magic".into(),
            ));
        }

        let header = parse_header(&mmap[..SER_HEADER_SIZE])?;

        let data_end = header
            .data_byte_size()
            .and_then(|n| n.checked_add(SER_HEADER_SIZE))
            .ok_or_else(|| CircleboundError::InvalidSer("Frame data size overflows".into()))?;
        if mmap.len() < data_end {
            return Err(CircleboundError::InvalidSer(format!(
                "File truncated: expected at least {} bytes, got {}",
                data_end,
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
            data_end,
            header,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count as usize
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn frame_bytes(&self) -> usize {
        // Checked in `open`.
        self.header.frame_byte_size().unwrap_or(0)
    }

    /// Raw bytes for a single frame (zero-copy from the mmap).
    pub fn frame_raw(&self, index: usize) -> Result<&[u8]> {
        let count = self.frame_count();
        if index >= count {
            return Err(CircleboundError::InvalidSer(format!(
                "Frame index {} out of range (total: {})",
                index, count
            )));
        }
        let size = self.frame_bytes();
        let offset = SER_HEADER_SIZE + index * size;
        Ok(&self.mmap[offset..offset + size])
    }

    /// Read one frame as an 8-bit image message.
    ///
    /// Samples deeper than 8 bits are shifted down to their top 8 bits.
    pub fn read_message(&self, index: usize) -> Result<ImageMessage> {
        let raw = self.frame_raw(index)?;
        let data = if self.header.bytes_per_sample() == 1 {
            raw.to_vec()
        } else {
            narrow_samples(raw, self.header.pixel_depth, self.header.little_endian)
        };

        let header = MessageHeader {
            seq: index as u32,
            stamp_us: self.read_timestamp(index),
            frame_id: self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        Ok(ImageMessage::packed(
            self.header.width,
            self.header.height,
            self.header.message_encoding(),
            data,
        )
        .with_header(header))
    }

    /// Per-frame timestamp from the optional trailer.
    fn read_timestamp(&self, index: usize) -> Option<u64> {
        let ts_offset = index.checked_mul(8)?.checked_add(self.data_end)?;
        if ts_offset.checked_add(8)? <= self.mmap.len() {
            let bytes = &self.mmap[ts_offset..ts_offset + 8];
            Some(u64::from_le_bytes(bytes.try_into().ok()?))
        } else {
            None
        }
    }

    /// Non-empty header text fields as (label, value) pairs.
    pub fn descriptive_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("Observer", &self.header.observer),
            ("Instrument", &self.header.instrument),
            ("Telescope", &self.header.telescope),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k, v.clone()))
        .collect()
    }
}

fn parse_header(buf: &[u8]) -> Result<SerHeader> {
    let mut cursor = std::io::Cursor::new(&buf[14..]); // skip magic

    let _lu_id = cursor.read_i32::<LittleEndian>()?;
    let color_id = cursor.read_i32::<LittleEndian>()?;
    let le_flag = cursor.read_i32::<LittleEndian>()?;
    let width = cursor.read_i32::<LittleEndian>()?;
    let height = cursor.read_i32::<LittleEndian>()?;
    let pixel_depth = cursor.read_i32::<LittleEndian>()?;
    let frame_count = cursor.read_i32::<LittleEndian>()?;

    let observer = read_fixed_string(&buf[42..82]);
    let instrument = read_fixed_string(&buf[82..122]);
    let telescope = read_fixed_string(&buf[122..162]);

    let mut cursor = std::io::Cursor::new(&buf[162..]);
    let date_time = cursor.read_u64::<LittleEndian>()?;
    let date_time_utc = cursor.read_u64::<LittleEndian>()?;

    if width <= 0 || height <= 0 {
        return Err(CircleboundError::InvalidSer(format!(
            "Invalid image dimensions: {}x{}",
            width, height
        )));
    }
    if !(1..=16).contains(&pixel_depth) {
        return Err(CircleboundError::InvalidSer(format!(
            "Unsupported pixel depth: {}",
            pixel_depth
        )));
    }
    if frame_count < 0 {
        return Err(CircleboundError::InvalidSer(format!(
            "Negative frame count: {}",
            frame_count
        )));
    }

    // Many writers put 0 here for little-endian data despite the format
    // documentation; only an explicit 1 selects big-endian.
    let little_endian = le_flag != 1;

    Ok(SerHeader {
        color_id,
        little_endian,
        width: width as u32,
        height: height as u32,
        pixel_depth: pixel_depth as u32,
        frame_count: frame_count as u32,
        observer,
        instrument,
        telescope,
        date_time,
        date_time_utc,
    })
}

fn read_fixed_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

/// Reduce 16-bit containers holding `bit_depth`-bit samples to 8 bits.
fn narrow_samples(raw: &[u8], bit_depth: u32, little_endian: bool) -> Vec<u8> {
    let shift = bit_depth.saturating_sub(8);
    raw.chunks_exact(2)
        .map(|pair| {
            let sample = if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            };
            (sample >> shift).min(255) as u8
        })
        .collect()
}
