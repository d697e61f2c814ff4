// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Monitor configuration.
//!
//! Persists the user's port selection and receive mode between runs as a
//! YAML file. Everything is optional with sensible defaults; a missing or
//! partial file is not an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::midi::{NoteNameStyle, ReceiveMode};

/// Root configuration for a monitoring session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorConfig {
    /// Input port to connect on startup, by driver-reported name
    #[serde(default)]
    pub input: Option<String>,
    /// Output port for thru routing, by driver-reported name
    #[serde(default)]
    pub output: Option<String>,
    /// Receive mode for opened inputs
    #[serde(default)]
    pub mode: ReceiveMode,
    /// Note naming convention for display
    #[serde(default)]
    pub note_names: NoteNameStyle,
    /// Number of milliseconds the drain loop sleeps between frames
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_frame_interval_ms() -> u64 {
    10
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            mode: ReceiveMode::default(),
            note_names: NoteNameStyle::default(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl MonitorConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save the configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.input, None);
        assert_eq!(config.mode, ReceiveMode::Callback);
        assert_eq!(config.note_names, NoteNameStyle::AlphaEn);
        assert_eq!(config.frame_interval_ms, 10);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = MonitorConfig::from_yaml("input: \"UM-ONE MIDI 1 20:0\"\n").unwrap();
        assert_eq!(config.input.as_deref(), Some("UM-ONE MIDI 1 20:0"));
        assert_eq!(config.mode, ReceiveMode::Callback);
        assert_eq!(config.frame_interval_ms, 10);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = MonitorConfig {
            input: Some("Keys 0".to_string()),
            output: Some("Synth 1".to_string()),
            mode: ReceiveMode::Polling,
            note_names: NoteNameStyle::Syllabic,
            frame_interval_ms: 25,
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = MonitorConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midiscope.yaml");

        let config = MonitorConfig {
            input: Some("Keys 0".to_string()),
            mode: ReceiveMode::Polling,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = MonitorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(MonitorConfig::load("/nonexistent/midiscope.yaml").is_err());
    }

    #[test]
    fn test_mode_serialization_is_lowercase() {
        let config = MonitorConfig {
            mode: ReceiveMode::Polling,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("mode: polling"));
    }
}
