use circlebound_core::error::CircleboundError;
use circlebound_core::io::{decode_bgr8, Encoding, ImageMessage};

#[test]
fn test_bgr8_is_copied() {
    let msg = ImageMessage::packed(2, 1, Encoding::Bgr8, vec![1, 2, 3, 4, 5, 6]);
    let frame = decode_bgr8(&msg).unwrap();
    assert_eq!((frame.width(), frame.height()), (2, 1));
    assert_eq!(frame.pixel(0, 0), [1, 2, 3]);
    assert_eq!(frame.pixel(1, 0), [4, 5, 6]);
}

#[test]
fn test_rgb8_is_swapped() {
    let msg = ImageMessage::packed(2, 1, Encoding::Rgb8, vec![10, 20, 30, 40, 50, 60]);
    let frame = decode_bgr8(&msg).unwrap();
    assert_eq!(frame.pixel(0, 0), [30, 20, 10]);
    assert_eq!(frame.pixel(1, 0), [60, 50, 40]);
}

#[test]
fn test_alpha_is_dropped() {
    let bgra = ImageMessage::packed(1, 1, Encoding::Bgra8, vec![1, 2, 3, 4]);
    assert_eq!(decode_bgr8(&bgra).unwrap().pixel(0, 0), [1, 2, 3]);

    let rgba = ImageMessage::packed(1, 1, Encoding::Rgba8, vec![1, 2, 3, 4]);
    assert_eq!(decode_bgr8(&rgba).unwrap().pixel(0, 0), [3, 2, 1]);
}

#[test]
fn test_mono_is_replicated() {
    let msg = ImageMessage::packed(1, 2, Encoding::Mono8, vec![7, 9]);
    let frame = decode_bgr8(&msg).unwrap();
    assert_eq!(frame.pixel(0, 0), [7, 7, 7]);
    assert_eq!(frame.pixel(0, 1), [9, 9, 9]);
}

#[test]
fn test_mono16_keeps_high_byte() {
    let little = ImageMessage::packed(1, 1, Encoding::Mono16, vec![0x34, 0x12]);
    assert_eq!(decode_bgr8(&little).unwrap().pixel(0, 0), [0x12; 3]);

    let mut big = ImageMessage::packed(1, 1, Encoding::Mono16, vec![0x12, 0x34]);
    big.is_bigendian = true;
    assert_eq!(decode_bgr8(&big).unwrap().pixel(0, 0), [0x12; 3]);
}

#[test]
fn test_padded_rows_are_skipped() {
    let mut msg = ImageMessage::packed(2, 2, Encoding::Bgr8, Vec::new());
    msg.step = 8;
    msg.data = vec![
        1, 1, 1, 2, 2, 2, 0xEE, 0xEE, // row 0 + padding
        3, 3, 3, 4, 4, 4, // row 1, last row needs no padding
    ];
    let frame = decode_bgr8(&msg).unwrap();
    assert_eq!(frame.pixel(1, 0), [2, 2, 2]);
    assert_eq!(frame.pixel(0, 1), [3, 3, 3]);
    assert_eq!(frame.pixel(1, 1), [4, 4, 4]);
}

#[test]
fn test_zero_size_is_decode_error() {
    let msg = ImageMessage::packed(0, 4, Encoding::Bgr8, Vec::new());
    let err = decode_bgr8(&msg).unwrap_err();
    assert!(matches!(err, CircleboundError::FrameDecode(_)));
    assert!(err.is_frame_decode());
}

#[test]
fn test_unknown_encoding_is_decode_error() {
    let mut msg = ImageMessage::packed(1, 1, Encoding::Bgr8, vec![0, 0, 0]);
    msg.encoding = "yuv422".into();
    let err = decode_bgr8(&msg).unwrap_err();
    assert!(matches!(err, CircleboundError::UnsupportedEncoding(ref e) if e == "yuv422"));
    assert!(err.is_frame_decode());
}

#[test]
fn test_short_step_is_decode_error() {
    let mut msg = ImageMessage::packed(4, 1, Encoding::Bgr8, vec![0; 12]);
    msg.step = 6;
    assert!(matches!(
        decode_bgr8(&msg),
        Err(CircleboundError::FrameDecode(_))
    ));
}

#[test]
fn test_truncated_payload_is_decode_error() {
    let msg = ImageMessage::packed(4, 4, Encoding::Rgb8, vec![0; 40]);
    let err = decode_bgr8(&msg).unwrap_err();
    assert!(err.to_string().contains("truncated"), "got: {err}");
}

#[test]
fn test_encoding_names() {
    assert_eq!("8UC1".parse::<Encoding>().unwrap(), Encoding::Mono8);
    assert_eq!("mono16".parse::<Encoding>().unwrap(), Encoding::Mono16);
    assert_eq!(Encoding::Bgra8.to_string(), "bgra8");
    assert_eq!(Encoding::Rgba8.bytes_per_pixel(), 4);
    assert!("BGR8".parse::<Encoding>().is_err());
}
