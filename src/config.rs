//! Sheet configuration module.
//!
//! Handles loading, validating, and layering the page layout settings.
//! Three layers are merged, later ones winning:
//!
//! ```text
//! stock defaults  →  --config file.toml  →  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! width = 1100          # Page width in pixels
//! height = 1700         # Page height in pixels
//!
//! [border]
//! size = 59             # Border thickness in pixels (~0.5cm at 300 DPI)
//! color = "white"       # Any CSS color: name, #hex, rgb(...)
//!
//! [output]
//! prefix = "merged"     # Pages are written as <prefix>_<n>.jpg
//! quality = 75          # JPEG quality (1-100)
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::color::{self, ColorError};
use crate::imaging::{Layout, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("border.color: {0}")]
    Color(#[from] ColorError),
}

/// Sheet configuration.
///
/// All fields have defaults: an 1100×1700 page with a 59 px white border.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Final page dimensions.
    pub page: PageConfig,
    /// Border thickness and color, also used as the page background.
    pub border: BorderConfig,
    /// Output naming and encoding.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 1700,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderConfig {
    /// Thickness in pixels.
    pub size: u32,
    /// CSS color string, see [`crate::color`].
    pub color: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            size: 59,
            color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// File name prefix; page `n` is written as `<prefix>_<n>.jpg`.
    pub prefix: String,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: "merged".to_string(),
            quality: 75,
        }
    }
}

impl SheetConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PageConfig { width, height } = self.page;
        let border = self.border.size;
        if width == 0 || height == 0 {
            return Err(ConfigError::Validation(
                "page.width and page.height must be non-zero".into(),
            ));
        }
        // Both cells need at least one pixel of picture.
        if border.saturating_mul(2) >= width {
            return Err(ConfigError::Validation(format!(
                "border.size {border} leaves no room across a {width}px page"
            )));
        }
        if border >= height {
            return Err(ConfigError::Validation(format!(
                "border.size {border} leaves no room down a {height}px page"
            )));
        }
        if self.output.quality == 0 || self.output.quality > 100 {
            return Err(ConfigError::Validation(
                "output.quality must be 1-100".into(),
            ));
        }
        let prefix = &self.output.prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output.prefix must be a plain, non-empty file name".into(),
            ));
        }
        color::parse_color(&self.border.color)?;
        Ok(())
    }

    /// Resolve the layout parameters handed to the compositor.
    pub fn layout(&self) -> Result<Layout, ConfigError> {
        Ok(Layout {
            page_width: self.page.width,
            page_height: self.page.height,
            border: self.border.size,
            color: color::parse_color(&self.border.color)?,
        })
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.output.quality)
    }

    /// File name of page `index`.
    pub fn page_filename(&self, index: usize) -> String {
        format!("{}_{}.jpg", self.output.prefix, index)
    }
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub border: Option<u32>,
    pub color: Option<String>,
    pub quality: Option<u32>,
}

impl ConfigOverrides {
    /// Express the overrides as a sparse TOML table for [`merge_toml`].
    pub fn to_toml(&self) -> Option<toml::Value> {
        let mut page = toml::Table::new();
        let mut border = toml::Table::new();
        let mut output = toml::Table::new();

        if let Some(w) = self.width {
            page.insert("width".into(), toml::Value::Integer(w.into()));
        }
        if let Some(h) = self.height {
            page.insert("height".into(), toml::Value::Integer(h.into()));
        }
        if let Some(b) = self.border {
            border.insert("size".into(), toml::Value::Integer(b.into()));
        }
        if let Some(c) = &self.color {
            border.insert("color".into(), toml::Value::String(c.clone()));
        }
        if let Some(q) = self.quality {
            output.insert("quality".into(), toml::Value::Integer(q.into()));
        }

        let mut root = toml::Table::new();
        for (key, table) in [("page", page), ("border", border), ("output", output)] {
            if !table.is_empty() {
                root.insert(key.into(), toml::Value::Table(table));
            }
        }
        (!root.is_empty()).then_some(toml::Value::Table(root))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SheetConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Fold overlays onto `base` in order, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<SheetConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: SheetConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config: stock defaults, then the optional file, then
/// command-line overrides.
pub fn load_config(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SheetConfig, ConfigError> {
    let file_layer = file.map(load_raw_config).transpose()?;
    resolve_config(
        stock_defaults_value(),
        file_layer.into_iter().chain(overrides.to_toml()),
    )
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# quadsheet configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Pass the file with --config; command-line flags override it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[page]
# Final page size in pixels. Every output file has exactly this size.
width = 1100
height = 1700

# ---------------------------------------------------------------------------
# Border
# ---------------------------------------------------------------------------
[border]
# Gap between photos and along the page edge, in pixels.
# 59px is roughly 0.5cm at 300 DPI.
size = 59

# Border and background color. Any CSS color: "white", "#f5f5f0",
# "rgb(250, 250, 245)".
color = "white"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Pages are written as <prefix>_0.jpg, <prefix>_1.jpg, ...
prefix = "merged"

# JPEG encoding quality (1 = worst, 100 = best).
quality = 75
"##
}
