use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 720.0,
            min_width: 640.0,
            min_height: 480.0,
            title: "Gomoku".to_string(),
        }
    }
}

/// Board geometry and overlays.
///
/// `padding` and `cell_pitch` are in points and set the board's natural size;
/// the view scales both down uniformly when the window is smaller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub padding: f32,
    pub cell_pitch: f32,
    pub show_coordinates: bool,
    pub highlight_last_move: bool,
    pub highlight_winning_line: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            padding: 50.0,
            cell_pitch: 40.0,
            show_coordinates: false,
            highlight_last_move: true,
            highlight_winning_line: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Runs before logging is set up, so reporting a missing
    /// file is left to the caller.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        let sizes = [
            ("window.width", w.width),
            ("window.height", w.height),
            ("window.min_width", w.min_width),
            ("window.min_height", w.min_height),
            ("board.padding", self.board.padding),
            ("board.cell_pitch", self.board.cell_pitch),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Validation(format!("{name} must be a finite number")));
        }
        if w.min_width <= 0.0 || w.min_height <= 0.0 {
            return Err(ConfigError::Validation(
                "window.min_width and window.min_height must be > 0".into(),
            ));
        }
        if w.width < w.min_width || w.height < w.min_height {
            return Err(ConfigError::Validation(
                "window size must be >= window minimum size".into(),
            ));
        }
        if self.board.cell_pitch <= 0.0 {
            return Err(ConfigError::Validation(
                "board.cell_pitch must be > 0".into(),
            ));
        }
        if self.board.padding < 0.0 {
            return Err(ConfigError::Validation(
                "board.padding must be >= 0".into(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
