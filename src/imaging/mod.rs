//! Image processing in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `fast_image_resize` (lanczos, nearest, box, bilinear, hamming, bicubic) |
//! | **Encode** | `image` codecs: PNG, JPEG, WebP, TIFF, BMP, AVIF |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Planning and generating the variants of one source

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::scaled_dimensions;
pub use operations::{
    GeneratedVariant, PlannedVariant, VariantConfig, VariantStatus, generate_variants,
    plan_variants,
};
pub use params::{
    Encoding, OutputFormat, Quality, ResampleFilter, ResizeParams, UnknownEncoding, UnknownFilter,
};
pub use rust_backend::RustBackend;
