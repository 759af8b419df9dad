use thiserror::Error;

#[derive(Error, Debug)]
pub enum CircleboundError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SER file: {0}")]
    InvalidSer(String),

    #[error("Frame decode failed: {0}")]
    FrameDecode(String),

    #[error("Unsupported image encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CircleboundError {
    /// True for errors that only affect the frame being decoded.
    ///
    /// The node drops such frames and keeps going.
    pub fn is_frame_decode(&self) -> bool {
        matches!(
            self,
            CircleboundError::FrameDecode(_)
                | CircleboundError::UnsupportedEncoding(_)
                | CircleboundError::ImageError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CircleboundError>;
