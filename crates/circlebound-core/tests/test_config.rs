use std::path::PathBuf;

use circlebound_core::color::ColorRange;
use circlebound_core::consts::{DEFAULT_HSV_LOWER, DEFAULT_HSV_UPPER};
use circlebound_core::detection::DetectorConfig;
use circlebound_core::node::NodeConfig;

#[test]
fn test_node_config_defaults() {
    let config = NodeConfig::default();
    assert_eq!(config.node_name, "circle_bounding_node");
    assert_eq!(config.topic, "/usb_cam/image_raw");
    assert_eq!(config.display.title, "Frame");
    assert!(config.display.output_dir.is_none());
    assert_eq!(config.detector.color_range.lower, DEFAULT_HSV_LOWER);
    assert_eq!(config.detector.color_range.upper, DEFAULT_HSV_UPPER);
    assert_eq!(config.detector.kernel_size, 5);
    assert_eq!(config.detector.outline_thickness, 3);
    assert_eq!(config.detector.marker_radius, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip() {
    let mut config = NodeConfig::default();
    config.topic = "/camera/front".into();
    config.display.output_dir = Some(PathBuf::from("out"));
    config.detector.color_range = ColorRange::new([10, 50, 50], [25, 255, 255]);

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: NodeConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let text = r#"
        topic = "/other"

        [detector.color_range]
        lower = [20, 100, 100]
        upper = [30, 255, 255]
    "#;
    let config: NodeConfig = toml::from_str(text).unwrap();
    assert_eq!(config.topic, "/other");
    assert_eq!(config.node_name, "circle_bounding_node");
    assert_eq!(config.detector.color_range.lower, [20, 100, 100]);
    assert_eq!(config.detector.kernel_size, 5);
    assert_eq!(config.display.title, "Frame");
}

#[test]
fn test_detector_config_json() {
    let config = DetectorConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"kernel_size\":5"), "got: {json}");
    let parsed: DetectorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_validation_errors() {
    let mut config = NodeConfig::default();
    config.topic.clear();
    assert!(config.validate().is_err());

    let mut config = NodeConfig::default();
    config.detector.outline_thickness = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("outline_thickness"), "got: {err}");
}

#[test]
fn test_inverted_range_is_valid_config() {
    let config = DetectorConfig::with_color_range(ColorRange::new([90, 0, 0], [10, 0, 0]));
    assert!(config.validate().is_ok());
}
