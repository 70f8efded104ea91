//! Generator configuration.
//!
//! Configuration is layered: stock defaults are overridden by an optional
//! `assets.toml`, which is in turn overridden by command-line flags.
//!
//! ## Config File Location
//!
//! By default the file is looked up next to the source images:
//!
//! ```text
//! input/
//! ├── assets.toml              # Optional, overrides stock defaults
//! ├── Square44x44Logo.png
//! ├── Square44x44Logo-badge.png
//! └── ...
//! ```
//!
//! A different file can be named with `--config`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [output]
//! format = "png"            # Encoding name, also the file extension
//! quality = 75              # Lossy quality (1-100)
//! optimize = true           # Best PNG compression
//! resampling = "lanczos"    # lanczos | nearest | box | bilinear | hamming | bicubic
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{Encoding, Quality, ResampleFilter, VariantConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config filename, looked up in the input directory.
pub const CONFIG_FILE_NAME: &str = "assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `assets.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Encoding settings shared by every generated variant.
    pub output: OutputConfig,
}

/// Output encoding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Encoding name (`png`, `jpg`, `jpeg`, `webp`, `tif`, `tiff`, `bmp`, `avif`).
    pub format: String,
    /// Lossy encoding quality, 1-100.
    pub quality: u32,
    /// Trade encoding time for smaller files.
    pub optimize: bool,
    /// Resampling method name. Unknown names fall back to `lanczos`.
    pub resampling: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "png".to_string(),
            quality: Quality::default().value(),
            optimize: true,
            resampling: ResampleFilter::default().name().to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.output.quality) {
            return Err(ConfigError::Validation(
                "output.quality must be 1-100".into(),
            ));
        }
        self.output
            .format
            .parse::<Encoding>()
            .map_err(|e| ConfigError::Validation(format!("output.format: {e}")))?;
        Ok(())
    }

    /// Resolve into the typed options used by the imaging layer.
    ///
    /// Expects a validated config. An unknown resampling method is warned
    /// about and replaced by the default filter.
    pub fn variant_config(&self) -> Result<VariantConfig, ConfigError> {
        let encoding = self
            .output
            .format
            .parse::<Encoding>()
            .map_err(|e| ConfigError::Validation(format!("output.format: {e}")))?;
        Ok(VariantConfig {
            encoding,
            quality: Quality::new(self.output.quality),
            filter: ResampleFilter::from_name_or_default(&self.output.resampling),
            optimize: self.output.optimize,
        })
    }
}

/// Command-line values that take precedence over any config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub quality: Option<u32>,
    pub unoptimised: bool,
    pub resampling: Option<String>,
}

impl Overrides {
    /// Express the overrides as a sparse TOML overlay.
    pub fn to_toml(&self) -> toml::Value {
        let mut output = toml::Table::new();
        if let Some(format) = &self.format {
            output.insert("format".into(), toml::Value::String(format.clone()));
        }
        if let Some(quality) = self.quality {
            output.insert("quality".into(), toml::Value::Integer(i64::from(quality)));
        }
        if self.unoptimised {
            output.insert("optimize".into(), toml::Value::Boolean(false));
        }
        if let Some(resampling) = &self.resampling {
            output.insert("resampling".into(), toml::Value::String(resampling.clone()));
        }

        let mut root = toml::Table::new();
        if !output.is_empty() {
            root.insert("output".into(), toml::Value::Table(output));
        }
        toml::Value::Table(root)
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GeneratorConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge the layers in order, then deserialize and validate.
pub fn resolve_config(
    layers: impl IntoIterator<Item = toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let merged = layers
        .into_iter()
        .fold(stock_defaults_value()?, merge_toml);
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config: stock defaults, then `path` (if it exists),
/// then the command-line overrides.
pub fn load_config(path: &Path, overrides: &Overrides) -> Result<GeneratorConfig, ConfigError> {
    let file = load_raw_config(path)?;
    resolve_config(file.into_iter().chain(std::iter::once(overrides.to_toml())))
}

/// Returns a fully-commented stock `assets.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# uwp-assets configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

[output]
# Encoding of the generated files. The name is also used as the file
# extension, so "jpg" writes .jpg files and "jpeg" writes .jpeg files.
# Supported: png, jpg, jpeg, webp, tif, tiff, bmp, avif
format = "png"

# Quality for lossy encoders (JPEG, AVIF), 1 = worst, 100 = best.
quality = 75

# Spend more time compressing PNG output for smaller files.
optimize = true

# Resampling method used when downscaling.
# One of: lanczos, nearest, box, bilinear, hamming, bicubic
resampling = "lanczos"
"##
}
