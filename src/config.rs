//! Engine configuration.
//!
//! Every tuning constant of the engine lives here so a host can export and
//! import it as JSON. Values missing from a file fall back to the defaults.

use serde::{Deserialize, Serialize};

use planmark_geometry::{ZoomLimits, MAX_ZOOM, MIN_ZOOM};

use crate::constants::{
    DEFAULT_BUTTON_ZOOM_FACTOR, DEFAULT_CLICK_THRESHOLD_PX, DEFAULT_HANDLE_HIT_SIZE_PX, DEFAULT_MIN_COMMIT_SIZE,
    DEFAULT_PIN_HIT_HEIGHT_PX, DEFAULT_PIN_HIT_WIDTH_PX, DEFAULT_WHEEL_ZOOM_SPEED,
};
use crate::error::ConfigError;

/// Log level setting for the replay binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show gesture transitions and commits
    Debug,
    /// Show every pointer move
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Tunable engine constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Smallest zoom scale
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,

    /// Largest zoom scale
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,

    /// Scale change per unit of wheel delta
    #[serde(default = "default_wheel_zoom_speed")]
    pub wheel_zoom_speed: f32,

    /// Multiplicative zoom step of the toolbar buttons
    #[serde(default = "default_button_zoom_factor")]
    pub button_zoom_factor: f32,

    /// Click-vs-drag threshold in pixels
    #[serde(default = "default_click_threshold_px")]
    pub click_threshold_px: f32,

    /// Minimum committed width and height in percent (strictly greater)
    #[serde(default = "default_min_commit_size")]
    pub min_commit_size: f32,

    /// Side of the square resize-handle hit box
    #[serde(default = "default_handle_hit_size_px")]
    pub handle_hit_size_px: f32,

    /// Pin marker hit box width
    #[serde(default = "default_pin_hit_width_px")]
    pub pin_hit_width_px: f32,

    /// Pin marker hit box height
    #[serde(default = "default_pin_hit_height_px")]
    pub pin_hit_height_px: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_min_zoom() -> f32 {
    MIN_ZOOM
}

fn default_max_zoom() -> f32 {
    MAX_ZOOM
}

fn default_wheel_zoom_speed() -> f32 {
    DEFAULT_WHEEL_ZOOM_SPEED
}

fn default_button_zoom_factor() -> f32 {
    DEFAULT_BUTTON_ZOOM_FACTOR
}

fn default_click_threshold_px() -> f32 {
    DEFAULT_CLICK_THRESHOLD_PX
}

fn default_min_commit_size() -> f32 {
    DEFAULT_MIN_COMMIT_SIZE
}

fn default_handle_hit_size_px() -> f32 {
    DEFAULT_HANDLE_HIT_SIZE_PX
}

fn default_pin_hit_width_px() -> f32 {
    DEFAULT_PIN_HIT_WIDTH_PX
}

fn default_pin_hit_height_px() -> f32 {
    DEFAULT_PIN_HIT_HEIGHT_PX
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            wheel_zoom_speed: default_wheel_zoom_speed(),
            button_zoom_factor: default_button_zoom_factor(),
            click_threshold_px: default_click_threshold_px(),
            min_commit_size: default_min_commit_size(),
            handle_hit_size_px: default_handle_hit_size_px(),
            pin_hit_width_px: default_pin_hit_width_px(),
            pin_hit_height_px: default_pin_hit_height_px(),
            log_level: LogLevel::default(),
        }
    }

    /// Zoom bounds as used by the viewport.
    ///
    /// A non-positive or non-finite bound falls back to its default, so the
    /// viewport scale can never reach zero.
    pub fn zoom_limits(&self) -> ZoomLimits {
        let min = if self.min_zoom > 0.0 && self.min_zoom.is_finite() {
            self.min_zoom
        } else {
            MIN_ZOOM
        };
        let max = if self.max_zoom >= min && self.max_zoom.is_finite() {
            self.max_zoom
        } else {
            MAX_ZOOM.max(min)
        };
        ZoomLimits::new(min, max)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom > 0.0) {
            return Err(ConfigError::invalid("min_zoom", format!("must be positive, got {}", self.min_zoom)));
        }
        if !(self.max_zoom >= self.min_zoom) || !self.max_zoom.is_finite() {
            return Err(ConfigError::invalid(
                "max_zoom",
                format!("must be finite and at least min_zoom ({}), got {}", self.min_zoom, self.max_zoom),
            ));
        }
        if !(self.button_zoom_factor > 0.0) {
            return Err(ConfigError::invalid(
                "button_zoom_factor",
                format!("must be positive, got {}", self.button_zoom_factor),
            ));
        }

        let non_negative = [
            ("wheel_zoom_speed", self.wheel_zoom_speed),
            ("click_threshold_px", self.click_threshold_px),
            ("min_commit_size", self.min_commit_size),
            ("handle_hit_size_px", self.handle_hit_size_px),
            ("pin_hit_width_px", self.pin_hit_width_px),
            ("pin_hit_height_px", self.pin_hit_height_px),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::invalid(field, format!("must not be negative, got {value}")));
            }
        }
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
