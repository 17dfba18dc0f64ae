//! Configuration system
//!
//! Persisted files (import preferences, scene descriptions) go through the
//! [`Config`] trait, which picks TOML or RON from the file extension.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match Format::from_path(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Load configuration from file, falling back to defaults when the file
    /// does not exist yet
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Default relative-rotation tolerance for the collider copy guard
pub const DEFAULT_ROTATION_WARNING_THRESHOLD: f32 = 0.1;

/// # Import Preferences
///
/// The persisted switch for collider generation plus the tolerances the
/// importer reads. Passed into [`ColliderImporter`](crate::import::ColliderImporter)
/// by the host; the pipeline never reads it from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportPreferences {
    /// Whether imported models get colliders generated at all
    pub generate_colliders: bool,
    /// `1 - |dot(root, node)|` above which a collider copy logs a rotation warning
    pub rotation_warning_threshold: f32,
}

impl Default for ImportPreferences {
    fn default() -> Self {
        Self {
            generate_colliders: false,
            rotation_warning_threshold: DEFAULT_ROTATION_WARNING_THRESHOLD,
        }
    }
}

impl Config for ImportPreferences {}

impl ImportPreferences {
    /// Preferences with collider generation switched on
    pub fn enabled() -> Self {
        Self {
            generate_colliders: true,
            ..Default::default()
        }
    }

    /// Builder pattern: Set the rotation warning threshold
    pub fn with_rotation_warning_threshold(mut self, threshold: f32) -> Self {
        self.rotation_warning_threshold = threshold;
        self
    }

    /// Flip collider generation on or off, returning the new state
    pub fn toggle_collider_generation(&mut self) -> bool {
        self.generate_colliders = !self.generate_colliders;
        log::info!(
            "Collider generation {}",
            if self.generate_colliders { "enabled" } else { "disabled" }
        );
        self.generate_colliders
    }

    /// Checked state shown next to the toggle command
    pub fn is_collider_generation_enabled(&self) -> bool {
        self.generate_colliders
    }
}
