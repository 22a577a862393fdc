use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tool settings from tweak-urgency.toml (every field optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the key column; longer keys are truncated
    #[serde(default = "default_key_width")]
    pub key_width: usize,
    /// Width of the right-aligned value column
    #[serde(default = "default_value_width")]
    pub value_width: usize,
    /// Hex color overrides by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            key_width: default_key_width(),
            value_width: default_value_width(),
            colors: HashMap::new(),
        }
    }
}

fn default_key_width() -> usize {
    30
}

fn default_value_width() -> usize {
    4
}

/// How user-defined attributes are discovered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Program and arguments printing the task configuration
    #[serde(default = "default_command")]
    pub command: Vec<String>,
    /// The command is killed after this long
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            command: default_command(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_command() -> Vec<String> {
    vec!["task".to_string(), "show".to_string()]
}

fn default_timeout_ms() -> u64 {
    5000
}
