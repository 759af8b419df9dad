/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of interleaved channels in a decoded frame (B, G, R).
pub const FRAME_CHANNELS: usize = 3;

/// Largest hue value on the 8-bit half-degree scale.
pub const HUE_MAX: u8 = 179;

/// Default lower HSV bound of the target color (green).
pub const DEFAULT_HSV_LOWER: [u8; 3] = [59, 100, 100];

/// Default upper HSV bound of the target color (green).
pub const DEFAULT_HSV_UPPER: [u8; 3] = [70, 255, 255];

/// Side length of the square structuring element used for erosion and dilation.
pub const DEFAULT_KERNEL_SIZE: usize = 5;

/// Thickness in pixels of the enclosing circle outline.
pub const DEFAULT_OUTLINE_THICKNESS: u32 = 3;

/// Outline color in BGR order.
pub const DEFAULT_OUTLINE_COLOR: [u8; 3] = [0, 255, 0];

/// Radius in pixels of the filled center marker.
pub const DEFAULT_MARKER_RADIUS: u32 = 5;

/// Center marker color in BGR order.
pub const DEFAULT_MARKER_COLOR: [u8; 3] = [0, 0, 255];

/// Node name reported in logs.
pub const DEFAULT_NODE_NAME: &str = "circle_bounding_node";

/// Camera topic the node subscribes to.
pub const DEFAULT_TOPIC: &str = "/usb_cam/image_raw";

/// Title of the display surface.
pub const DEFAULT_WINDOW_TITLE: &str = "Frame";

/// Size of the SER file header in bytes.
pub const SER_HEADER_SIZE: usize = 178;
