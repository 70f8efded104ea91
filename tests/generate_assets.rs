//! End-to-end generation with the real backend.
//!
//! Builds a full input directory of synthetic logos, runs a batch and checks
//! every output file's name and pixel dimensions.

use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;
use uwp_assets::assets::{ASSET_NAMES, ResizeFamily, resolve_source};
use uwp_assets::config::{self, Overrides};
use uwp_assets::generate::{GenerateOptions, batch_generate};
use uwp_assets::imaging::{RustBackend, VariantStatus, scaled_dimensions};
use uwp_assets::overwrite::{FixedAnswer, OverwritePolicy};

/// Source size for each logo, at 400% of the manifest size.
fn source_size(name: &str) -> (u32, u32) {
    match name {
        "Wide310x150Logo.png" | "SplashScreen.png" => (1240, 600),
        "Square44x44Logo-badge.png" | "Square44x44Logo-badge-unplated.png" => (300, 300),
        "Square44x44Logo.png" => (176, 176),
        "Square71x71Logo.png" => (284, 284),
        "StoreLogo.png" => (200, 200),
        "BadgeLogo.png" => (96, 96),
        _ => (400, 400),
    }
}

fn write_logo(path: &Path, (width, height): (u32, u32)) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255])
    });
    img.save(path).unwrap();
}

fn setup_input() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    std::fs::create_dir(&input).unwrap();
    for (name, _) in ASSET_NAMES {
        write_logo(&input.join(name), source_size(name));
    }
    std::fs::write(input.join("README.txt"), "not a logo").unwrap();
    tmp
}

fn forced(format: &str) -> GenerateOptions {
    let overrides = Overrides {
        format: Some(format.to_string()),
        ..Overrides::default()
    };
    let config = config::resolve_config([overrides.to_toml()]).unwrap();
    GenerateOptions {
        variant: config.variant_config().unwrap(),
        overwrite: OverwritePolicy::new(true),
        config_file: None,
    }
}

#[test]
fn full_batch_produces_every_variant() {
    let tmp = setup_input();
    let input = tmp.path().join("input");
    let output = tmp.path().join("output");

    let report = batch_generate(
        &RustBackend::new(),
        &input,
        &output,
        &forced("png"),
        &mut FixedAnswer(false),
    )
    .unwrap();

    assert_eq!(report.jobs.len(), ASSET_NAMES.len());
    assert_eq!(report.unrecognized, vec!["README.txt"]);
    assert!(report.missing.is_empty());
    assert_eq!(
        std::fs::read_dir(&output).unwrap().count(),
        ASSET_NAMES.len() * 5
    );

    for (name, _) in ASSET_NAMES {
        let template = resolve_source(name).unwrap();
        let source = source_size(name);
        for entry in template.family().entries(source) {
            let path = output.join(template.render(entry.token, "png"));
            let dims = image::image_dimensions(&path)
                .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
            let expected = match template.family() {
                ResizeFamily::Size => (entry.token, entry.token),
                ResizeFamily::Scale => {
                    let factor = f64::from(entry.token) / 400.0;
                    scaled_dimensions(source, factor)
                }
            };
            assert_eq!(dims, expected, "{}", path.display());
        }
    }
}

#[test]
fn wide_logo_scale_names_and_sizes() {
    let tmp = setup_input();
    let output = tmp.path().join("output");

    batch_generate(
        &RustBackend::new(),
        &tmp.path().join("input"),
        &output,
        &forced("png"),
        &mut FixedAnswer(false),
    )
    .unwrap();

    let expected = [
        ("Wide310x150Logo.scale-400.png", (1240, 600)),
        ("Wide310x150Logo.scale-200.png", (620, 300)),
        ("Wide310x150Logo.scale-150.png", (465, 225)),
        ("Wide310x150Logo.scale-125.png", (387, 187)),
        ("Wide310x150Logo.scale-100.png", (310, 150)),
    ];
    for (file, dims) in expected {
        assert_eq!(image::image_dimensions(output.join(file)).unwrap(), dims, "{file}");
    }
}

#[test]
fn jpeg_encoding_uses_given_extension() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    let output = tmp.path().join("output");
    std::fs::create_dir(&input).unwrap();
    write_logo(&input.join("StoreLogo.png"), (200, 200));

    batch_generate(
        &RustBackend::new(),
        &input,
        &output,
        &forced("JPEG"),
        &mut FixedAnswer(false),
    )
    .unwrap();

    for token in [400, 200, 150, 125, 100] {
        let path = output.join(format!("StoreLogo.scale-{token}.jpeg"));
        let format = image::ImageFormat::from_path(&path).unwrap();
        assert_eq!(format, image::ImageFormat::Jpeg);
        assert!(image::open(&path).is_ok(), "{}", path.display());
    }
}

#[test]
fn second_run_without_force_keeps_everything() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    let output = tmp.path().join("output");
    std::fs::create_dir(&input).unwrap();
    write_logo(&input.join("BadgeLogo.png"), (96, 96));

    batch_generate(
        &RustBackend::new(),
        &input,
        &output,
        &forced("png"),
        &mut FixedAnswer(false),
    )
    .unwrap();
    let before = std::fs::read(output.join("BadgeLogo.scale-100.png")).unwrap();

    // Different source, same name: declined prompts must keep the old bytes
    write_logo(&input.join("BadgeLogo.png"), (48, 48));
    let options = GenerateOptions {
        overwrite: OverwritePolicy::new(false),
        ..forced("png")
    };
    let report = batch_generate(
        &RustBackend::new(),
        &input,
        &output,
        &options,
        &mut FixedAnswer(false),
    )
    .unwrap();

    assert!(
        report.jobs[0]
            .variants
            .iter()
            .all(|v| v.status == VariantStatus::Skipped)
    );
    assert_eq!(
        std::fs::read(output.join("BadgeLogo.scale-100.png")).unwrap(),
        before
    );
}
