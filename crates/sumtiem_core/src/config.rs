//! Diagram geometry, typography and vocabulary settings.
//!
//! # Responsibility
//! - Provide defaults matching the reference canvas.
//! - Load partial overrides from JSON.
//!
//! # Invariants
//! - A validated config has a positive font size, line height and label width,
//!   and a non-empty palette.

use crate::materialize::{Namespaces, PropertyMap};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Virtual canvas size in user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 980,
            height: 1669,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50,
            right: 50,
            bottom: 50,
            left: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub canvas: CanvasSize,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Line pitch as a multiple of `font_size`.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default = "default_label_width_pixels")]
    pub label_width_pixels: u32,
    /// Wrap width for event and extent labels.
    #[serde(default = "default_label_width_chars")]
    pub label_width_chars: usize,
    #[serde(default = "default_label_padding")]
    pub label_padding: u32,
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
    #[serde(default = "default_tick_length")]
    pub tick_length: u32,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
    /// Distance over which undated bar ends fade in.
    #[serde(default = "default_gradient_offset")]
    pub gradient_offset: u32,
    #[serde(default = "default_axis_color")]
    pub axis_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
    /// Extent colours, indexed by column (wrapping).
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub namespaces: Namespaces,
}

fn default_font_size() -> u32 {
    28
}

fn default_font_family() -> String {
    "-apple-system".to_string()
}

fn default_line_height() -> f64 {
    1.1
}

fn default_label_width_pixels() -> u32 {
    190
}

fn default_label_width_chars() -> usize {
    14
}

fn default_label_padding() -> u32 {
    10
}

fn default_bar_width() -> u32 {
    16
}

fn default_tick_length() -> u32 {
    20
}

fn default_stroke_width() -> u32 {
    5
}

fn default_gradient_offset() -> u32 {
    128
}

fn default_axis_color() -> String {
    "#8D8D8D".to_string()
}

fn default_label_color() -> String {
    "#5E5E5E".to_string()
}

fn default_palette() -> Vec<String> {
    vec![
        "#1b9e77".to_string(),
        "#d95f02".to_string(),
        "#7570b3".to_string(),
    ]
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            canvas: CanvasSize::default(),
            margin: Margin::default(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            line_height: default_line_height(),
            label_width_pixels: default_label_width_pixels(),
            label_width_chars: default_label_width_chars(),
            label_padding: default_label_padding(),
            bar_width: default_bar_width(),
            tick_length: default_tick_length(),
            stroke_width: default_stroke_width(),
            gradient_offset: default_gradient_offset(),
            axis_color: default_axis_color(),
            label_color: default_label_color(),
            palette: default_palette(),
            properties: PropertyMap::default(),
            namespaces: Namespaces::default(),
        }
    }
}

impl TimelineConfig {
    /// Parses and validates a JSON document; missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.font_size == 0 {
            return Err(ConfigError::Invalid("font_size must be positive".into()));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "line_height must be a positive number, got {}",
                self.line_height
            )));
        }
        if self.label_width_chars == 0 {
            return Err(ConfigError::Invalid(
                "label_width_chars must be positive".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette cannot be empty".into()));
        }
        Ok(())
    }

    /// Height available to events inside the margins.
    pub fn drawing_height(&self) -> u32 {
        self.canvas
            .height
            .saturating_sub(self.margin.top)
            .saturating_sub(self.margin.bottom)
    }

    /// One label line: `floor(font_size * line_height)`.
    pub fn line_pitch(&self) -> u32 {
        (f64::from(self.font_size) * self.line_height).floor() as u32
    }

    pub fn half_stroke(&self) -> u32 {
        self.stroke_width / 2
    }

    /// Left edge of the bar drawn in `column`.
    pub fn column_x(&self, column: u32) -> u32 {
        let lane = self.bar_width + self.label_padding + self.label_width_pixels + self.label_padding;
        self.label_padding + column * lane
    }

    pub fn column_color(&self, column: u32) -> &str {
        if self.palette.is_empty() {
            return "#000000";
        }
        &self.palette[column as usize % self.palette.len()]
    }
}
