pub mod hsv;
pub mod range;

pub use hsv::bgr_to_hsv;
pub use range::{color_mask, ColorRange};
