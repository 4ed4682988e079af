//! # Mask Configuration
//!
//! Settings for a masking run: the intensity threshold plus the dialect words
//! used to recognise marking and travel moves. Defaults match the G-code that
//! Snapmaker Luban emits for line-filled grayscale engravings.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [mask]
//! threshold = 40.0
//! marking_code = "G1"
//! travel_code = "G0"
//! intensity_word = "S"
//! essential_words = ["F", "Y"]
//! wide_intensity = true
//! ```
//!
//! Every field is optional. The threshold given on the command line always
//! replaces the one from the file.

// src/config.rs - Single configuration file
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Top-level layout of a config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mask: MaskConfig,
}

/// Parameters for one masking pass.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaskConfig {
    /// Marking moves with an intensity strictly below this become travel moves.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_marking_code")]
    pub marking_code: String,
    #[serde(default = "default_travel_code")]
    pub travel_code: String,
    #[serde(default = "default_intensity_word")]
    pub intensity_word: char,
    /// Letters that make a travel move essential (feed rate, Y position).
    #[serde(default = "default_essential_words")]
    pub essential_words: Vec<char>,
    /// Accept intensities with more than two integer digits (0-255 scales).
    #[serde(default)]
    pub wide_intensity: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            marking_code: default_marking_code(),
            travel_code: default_travel_code(),
            intensity_word: default_intensity_word(),
            essential_words: default_essential_words(),
            wide_intensity: false,
        }
    }
}

impl MaskConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marking_code.trim().is_empty() || self.travel_code.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "marking_code and travel_code must not be empty".to_string(),
            ));
        }
        if self.marking_code == self.travel_code {
            return Err(ConfigError::Invalid(format!(
                "marking_code and travel_code are both '{}'",
                self.marking_code
            )));
        }
        if !self.intensity_word.is_ascii_alphabetic() {
            return Err(ConfigError::Invalid(format!(
                "intensity_word must be a letter, got '{}'",
                self.intensity_word
            )));
        }
        Ok(())
    }
}

fn default_threshold() -> f64 { 50.0 }
fn default_marking_code() -> String { "G1".to_string() }
fn default_travel_code() -> String { "G0".to_string() }
fn default_intensity_word() -> char { 'S' }
fn default_essential_words() -> Vec<char> { vec!['F', 'Y'] }

/// Load the `[mask]` table from a TOML file at the given path.
pub fn load_config(path: &str) -> Result<MaskConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
            Ok(file) => Ok(file.mask),
            Err(e) => {
                tracing::error!("Failed to parse config TOML: {}", e);
                Err(ConfigError::Toml(e))
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file '{}': {}", path, e);
            Err(ConfigError::Io(e))
        }
    }
}
