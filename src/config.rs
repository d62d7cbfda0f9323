//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ZXFX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use zxfx_plot::Colour;
use zxfx_render::{CameraSettings, MarchSettings};

use crate::export::ExportOptions;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display framing for exported images
    #[serde(default)]
    pub display: DisplayConfig,
    /// Camera placement
    #[serde(default)]
    pub camera: CameraSettings,
    /// Raymarcher tunables
    #[serde(default)]
    pub march: MarchSettings,
    /// Output files and preview
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ZXFX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ZXFX_OUTPUT__SEED=7 -> output.seed = 7
        figment = figment.merge(Env::prefixed("ZXFX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// How the bitmap is framed when exported
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Integer pixel enlargement
    pub scale: u32,
    /// Border colour
    pub border: Colour,
    /// Border width in display pixels
    pub border_width: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            border: Colour::Blue,
            border_width: 32,
        }
    }
}

impl DisplayConfig {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            scale: self.scale,
            border: self.border,
            border_width: self.border_width,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG file to write
    pub path: String,
    /// Dither seed
    pub seed: u64,
    /// Print a text rendition of the frame to stdout
    pub ascii_preview: bool,
    /// Display pixels per preview character
    pub ascii_scale: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "one_small_step.png".to_string(),
            seed: 0,
            ascii_preview: false,
            ascii_scale: 4,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace) used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
