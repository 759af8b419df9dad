use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_NODE_NAME, DEFAULT_TOPIC, DEFAULT_WINDOW_TITLE};
use crate::detection::DetectorConfig;
use crate::error::{CircleboundError, Result};

/// Full node configuration, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_node_name")]
    pub node_name: String,
    /// Topic the frames are read from.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Log filter used when no `-v` flag or `RUST_LOG` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where annotated frames go.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Directory receiving annotated PNG frames. `None` discards them.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_node_name() -> String {
    DEFAULT_NODE_NAME.to_string()
}
fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_title() -> String {
    DEFAULT_WINDOW_TITLE.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_dir: None,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            topic: default_topic(),
            log_level: default_log_level(),
            detector: DetectorConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl NodeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.topic.is_empty() {
            return Err(CircleboundError::InvalidConfig("topic must not be empty".into()));
        }
        if self.display.title.is_empty() {
            return Err(CircleboundError::InvalidConfig(
                "display title must not be empty".into(),
            ));
        }
        self.detector.validate()
    }
}
