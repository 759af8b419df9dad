pub mod image_io;
pub mod message;
pub mod ser;

pub use message::{decode_bgr8, Encoding, ImageMessage, MessageHeader};
