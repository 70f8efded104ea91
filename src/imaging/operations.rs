//! High-level image operations.
//!
//! These functions combine the asset mapping, dimension calculations and the
//! overwrite policy with backend execution. Planning is pure
//! ([`plan_variants`]); [`generate_variants`] walks the plan and calls the
//! backend for every variant the policy allows.

use super::backend::{BackendError, ImageBackend};
use super::params::{Encoding, Quality, ResampleFilter, ResizeParams};
use crate::assets::AssetTemplate;
use crate::overwrite::{Confirm, OverwritePolicy};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Encoding options shared by every variant of a run.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub encoding: Encoding,
    pub quality: Quality,
    pub filter: ResampleFilter,
    pub optimize: bool,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            quality: Quality::default(),
            filter: ResampleFilter::default(),
            optimize: true,
        }
    }
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedVariant {
    /// Scale token (400, 200, ...) or target size (256, 48, ...).
    pub token: u32,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// What happened to a planned variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    /// Written to a path that did not exist.
    Written,
    /// Replaced an existing file.
    Overwritten,
    /// An existing file was kept because overwriting was declined.
    Skipped,
}

/// A variant together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub variant: PlannedVariant,
    pub status: VariantStatus,
}

/// Plan every variant of a source without touching the filesystem.
///
/// One entry per family member, in publication order.
pub fn plan_variants(
    template: &AssetTemplate,
    source_dims: (u32, u32),
    output_dir: &Path,
    encoding: &Encoding,
) -> Vec<PlannedVariant> {
    template
        .family()
        .entries(source_dims)
        .into_iter()
        .map(|entry| PlannedVariant {
            token: entry.token,
            output: output_dir.join(template.render(entry.token, &encoding.extension)),
            width: entry.width,
            height: entry.height,
        })
        .collect()
}

/// Produce every variant of `source`, asking `policy` before each write.
///
/// The source is identified once for planning; each variant is then resized
/// from a fresh decode of the source file.
pub fn generate_variants(
    backend: &impl ImageBackend,
    source: &Path,
    template: &AssetTemplate,
    output_dir: &Path,
    config: &VariantConfig,
    policy: OverwritePolicy,
    confirm: &mut dyn Confirm,
) -> Result<Vec<GeneratedVariant>> {
    let dims = backend.identify(source)?;
    let plan = plan_variants(
        template,
        (dims.width, dims.height),
        output_dir,
        &config.encoding,
    );

    let mut generated = Vec::with_capacity(plan.len());
    for variant in plan {
        let existed = variant.output.exists();
        if !policy.should_write(&variant.output, confirm) {
            debug!("Keeping existing {}", variant.output.display());
            generated.push(GeneratedVariant {
                variant,
                status: VariantStatus::Skipped,
            });
            continue;
        }

        backend.resize(&ResizeParams {
            source: source.to_path_buf(),
            output: variant.output.clone(),
            width: variant.width,
            height: variant.height,
            encoding: config.encoding.clone(),
            quality: config.quality,
            filter: config.filter,
            optimize: config.optimize,
        })?;
        debug!(
            "Wrote {} ({}x{})",
            variant.output.display(),
            variant.width,
            variant.height
        );

        let status = if existed {
            VariantStatus::Overwritten
        } else {
            VariantStatus::Written
        };
        generated.push(GeneratedVariant { variant, status });
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::resolve_source;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::overwrite::FixedAnswer;

    fn mock_with(width: u32, height: u32) -> MockBackend {
        MockBackend::with_dimensions(vec![Dimensions { width, height }])
    }

    #[test]
    fn plan_scale_family_paths_and_dimensions() {
        let template = resolve_source("Square150x150Logo.png").unwrap();
        let plan = plan_variants(&template, (600, 600), Path::new("/out"), &Encoding::png());

        let summary: Vec<(String, u32, u32)> = plan
            .iter()
            .map(|v| (v.output.to_string_lossy().to_string(), v.width, v.height))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("/out/Square150x150Logo.scale-400.png".to_string(), 600, 600),
                ("/out/Square150x150Logo.scale-200.png".to_string(), 300, 300),
                ("/out/Square150x150Logo.scale-150.png".to_string(), 225, 225),
                ("/out/Square150x150Logo.scale-125.png".to_string(), 187, 187),
                ("/out/Square150x150Logo.scale-100.png".to_string(), 150, 150),
            ]
        );
    }

    #[test]
    fn plan_size_family_uses_encoding_extension() {
        let template = resolve_source("Square44x44Logo-badge-unplated.png").unwrap();
        let encoding: Encoding = "JPEG".parse().unwrap();
        let plan = plan_variants(&template, (512, 300), Path::new("/out"), &encoding);

        assert_eq!(plan.len(), 5);
        assert_eq!(
            plan[1].output,
            PathBuf::from("/out/Square44x44Logo.targetsize-48_altform-unplated.jpeg")
        );
        assert!(plan.iter().all(|v| v.width == v.token && v.height == v.token));
    }

    #[test]
    fn generate_resizes_every_variant() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = mock_with(176, 176);
        let template = resolve_source("Square44x44Logo.png").unwrap();

        let generated = generate_variants(
            &backend,
            Path::new("/in/Square44x44Logo.png"),
            &template,
            tmp.path(),
            &VariantConfig::default(),
            OverwritePolicy::new(false),
            &mut FixedAnswer(false),
        )
        .unwrap();

        assert_eq!(generated.len(), 5);
        assert!(generated.iter().all(|g| g.status == VariantStatus::Written));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 6);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/in/Square44x44Logo.png"));
        let sizes: Vec<(u32, u32)> = ops[1..]
            .iter()
            .map(|op| match op {
                RecordedOp::Resize { width, height, .. } => (*width, *height),
                other => panic!("unexpected op {other:?}"),
            })
            .collect();
        assert_eq!(sizes, vec![(176, 176), (88, 88), (66, 66), (55, 55), (44, 44)]);
    }

    #[test]
    fn generate_passes_encoding_options() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = mock_with(100, 100);
        let template = resolve_source("StoreLogo.png").unwrap();
        let config = VariantConfig {
            encoding: "jpg".parse().unwrap(),
            quality: Quality::new(60),
            filter: ResampleFilter::Nearest,
            optimize: false,
        };

        generate_variants(
            &backend,
            Path::new("/in/StoreLogo.png"),
            &template,
            tmp.path(),
            &config,
            OverwritePolicy::new(true),
            &mut FixedAnswer(false),
        )
        .unwrap();

        for op in &backend.get_operations()[1..] {
            assert!(matches!(
                op,
                RecordedOp::Resize {
                    output,
                    quality: 60,
                    filter: ResampleFilter::Nearest,
                    ..
                } if output.ends_with(".jpg")
            ));
        }
    }

    #[test]
    fn declined_overwrite_skips_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let existing = tmp.path().join("StoreLogo.scale-200.png");
        std::fs::write(&existing, b"keep me").unwrap();

        let backend = mock_with(100, 100);
        let template = resolve_source("StoreLogo.png").unwrap();
        let generated = generate_variants(
            &backend,
            Path::new("/in/StoreLogo.png"),
            &template,
            tmp.path(),
            &VariantConfig::default(),
            OverwritePolicy::new(false),
            &mut FixedAnswer(false),
        )
        .unwrap();

        let skipped: Vec<u32> = generated
            .iter()
            .filter(|g| g.status == VariantStatus::Skipped)
            .map(|g| g.variant.token)
            .collect();
        assert_eq!(skipped, vec![200]);
        assert_eq!(backend.resize_outputs().len(), 4);
        assert_eq!(std::fs::read(&existing).unwrap(), b"keep me");
    }

    #[test]
    fn forced_overwrite_reports_overwritten() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("StoreLogo.scale-400.png"), b"old").unwrap();

        let backend = mock_with(100, 100);
        let template = resolve_source("StoreLogo.png").unwrap();
        let generated = generate_variants(
            &backend,
            Path::new("/in/StoreLogo.png"),
            &template,
            tmp.path(),
            &VariantConfig::default(),
            OverwritePolicy::new(true),
            &mut FixedAnswer(false),
        )
        .unwrap();

        assert_eq!(generated[0].status, VariantStatus::Overwritten);
        assert!(generated[1..]
            .iter()
            .all(|g| g.status == VariantStatus::Written));
        assert_eq!(backend.resize_outputs().len(), 5);
    }

    #[test]
    fn identify_failure_propagates() {
        let backend = MockBackend::new();
        let template = resolve_source("StoreLogo.png").unwrap();
        let result = generate_variants(
            &backend,
            Path::new("/in/StoreLogo.png"),
            &template,
            Path::new("/out"),
            &VariantConfig::default(),
            OverwritePolicy::new(true),
            &mut FixedAnswer(true),
        );
        assert!(result.is_err());
        assert!(backend.resize_outputs().is_empty());
    }
}
