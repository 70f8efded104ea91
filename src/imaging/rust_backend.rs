//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP, BMP) | `image` crate (pure Rust decoders) |
//! | Resize | `fast_image_resize` convolution (or nearest) on RGBA8 |
//! | Encode → PNG | `PngEncoder`, best or fast compression |
//! | Encode → JPEG | `JpegEncoder` at the requested quality |
//! | Encode → WebP | `WebPEncoder` (lossless) |
//! | Encode → TIFF / BMP | `TiffEncoder` / `BmpEncoder` |
//! | Encode → AVIF | `AvifEncoder` (rav1e, speed 6) at the requested quality |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{OutputFormat, ResampleFilter, ResizeParams};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::codecs::avif::AvifEncoder;
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageReader, RgbaImage};
use std::path::Path;
use tracing::warn;

/// Pure Rust backend using the `image` and `fast_image_resize` crates.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResampleFilter::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
    }
}

/// Resize to exactly `width`×`height`, ignoring the source aspect ratio.
///
/// Works on a fresh RGBA8 copy of the source; alpha is premultiplied during
/// convolution so transparent edges do not bleed dark fringes.
fn resize_exact(
    img: &DynamicImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, BackendError> {
    if width == 0 || height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "Invalid target size {width}x{height}"
        )));
    }

    let src = img.to_rgba8();
    let (src_w, src_h) = src.dimensions();
    let src_image = Image::from_vec_u8(src_w, src_h, src.into_raw(), PixelType::U8x4)
        .map_err(|e| BackendError::ProcessingFailed(format!("Invalid source buffer: {e}")))?;
    let mut dst_image = Image::new(width, height, PixelType::U8x4);

    let options = ResizeOptions::new().resize_alg(resize_alg(filter));
    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| BackendError::ProcessingFailed(format!("Resize failed: {e}")))?;

    RgbaImage::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
        BackendError::ProcessingFailed("Failed to create image from resized data".into())
    })
}

/// True if any pixel is not fully opaque.
fn has_transparency(img: &RgbaImage) -> bool {
    img.pixels().any(|p| p.0[3] < u8::MAX)
}

/// Encode and save to `params.output` in the requested format.
fn save_image(img: RgbaImage, params: &ResizeParams) -> Result<(), BackendError> {
    let format = params.encoding.format;
    if !format.supports_alpha() && has_transparency(&img) {
        warn!(
            "{} does not support transparency; alpha dropped from {}",
            params.encoding.extension,
            params.output.display()
        );
    }

    let file = std::fs::File::create(&params.output).map_err(BackendError::Io)?;
    let mut writer = std::io::BufWriter::new(file);
    let quality = params.quality.value() as u8;
    let img = DynamicImage::ImageRgba8(img);

    let result = match format {
        OutputFormat::Png => {
            let compression = if params.optimize {
                CompressionType::Best
            } else {
                CompressionType::Fast
            };
            img.write_with_encoder(PngEncoder::new_with_quality(
                writer,
                compression,
                PngFilter::Adaptive,
            ))
        }
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(writer, quality)),
        OutputFormat::WebP => img.write_with_encoder(WebPEncoder::new_lossless(writer)),
        OutputFormat::Tiff => img.write_with_encoder(TiffEncoder::new(writer)),
        OutputFormat::Bmp => {
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(BmpEncoder::new(&mut writer))
        }
        OutputFormat::Avif => {
            img.write_with_encoder(AvifEncoder::new_with_speed_quality(writer, 6, quality))
        }
    };

    result.map_err(|e| {
        BackendError::ProcessingFailed(format!(
            "Failed to encode {}: {}",
            params.output.display(),
            e
        ))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = resize_exact(&img, params.width, params.height, params.filter)?;
        save_image(resized, params)
    }
}
