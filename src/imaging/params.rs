//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what variants to create) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1–100, default 75). Clamped on construction.
//! - [`ResampleFilter`]: Resampling kernel used for every resize.
//! - [`Encoding`]: Output image format plus the extension it is written under.
//! - [`ResizeParams`]: Everything a single resize needs: source, output path,
//!   target dimensions, encoding and filter.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Resampling kernel.
///
/// The names accepted on the command line are the classic convolution filter
/// names; [`ResampleFilter::Bicubic`] is the Catmull-Rom cubic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    #[default]
    Lanczos,
    Nearest,
    Box,
    Bilinear,
    Hamming,
    Bicubic,
}

impl ResampleFilter {
    pub const ALL: [ResampleFilter; 6] = [
        ResampleFilter::Lanczos,
        ResampleFilter::Nearest,
        ResampleFilter::Box,
        ResampleFilter::Bilinear,
        ResampleFilter::Hamming,
        ResampleFilter::Bicubic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResampleFilter::Lanczos => "lanczos",
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Box => "box",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Hamming => "hamming",
            ResampleFilter::Bicubic => "bicubic",
        }
    }

    /// Resolve a filter name, falling back to [`ResampleFilter::Lanczos`].
    ///
    /// An unknown name is reported with a warning rather than failing the run.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownFilter| {
            tracing::warn!(
                "{err}; falling back to '{}'",
                ResampleFilter::default().name()
            );
            ResampleFilter::default()
        })
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resampling method '{0}'")]
pub struct UnknownFilter(pub String);

impl FromStr for ResampleFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Image formats the backend can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    WebP,
    Tiff,
    Bmp,
    Avif,
}

impl OutputFormat {
    /// Whether the encoder keeps an alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg | OutputFormat::Bmp)
    }
}

/// Output encoding: the format to write and the extension to name files with.
///
/// The extension is the user-supplied encoding name lower-cased, so `JPEG`
/// produces `.jpeg` files and `jpg` produces `.jpg` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub format: OutputFormat,
    pub extension: String,
}

impl Encoding {
    pub fn png() -> Self {
        Self {
            format: OutputFormat::Png,
            extension: "png".to_string(),
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::png()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported output encoding '{0}'")]
pub struct UnknownEncoding(pub String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let extension = s.trim().trim_start_matches('.').to_ascii_lowercase();
        let format = match extension.as_str() {
            "png" => OutputFormat::Png,
            "jpg" | "jpeg" => OutputFormat::Jpeg,
            "webp" => OutputFormat::WebP,
            "tif" | "tiff" => OutputFormat::Tiff,
            "bmp" => OutputFormat::Bmp,
            "avif" => OutputFormat::Avif,
            _ => return Err(UnknownEncoding(s.to_string())),
        };
        Ok(Self { format, extension })
    }
}

/// Parameters for a single variant: re-open `source`, resize, encode to `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub encoding: Encoding,
    pub quality: Quality,
    pub filter: ResampleFilter,
    /// Spend more time compressing for a smaller file (PNG only).
    pub optimize: bool,
}
