//! Batch generation over an input directory.
//!
//! Every regular file in the input directory is looked up in the
//! [asset mapping](crate::assets). Recognized files become one generation job
//! each; everything else is reported and skipped. The config file is left
//! alone without a warning. Jobs run one after another:
//!
//! ```text
//! input/                           output/
//! ├── StoreLogo.png          →     ├── StoreLogo.scale-400.png
//! │                                ├── StoreLogo.scale-200.png
//! │                                ├── ...  (5 per source)
//! ├── Square44x44Logo-badge.png →  ├── Square44x44Logo.targetsize-256.png
//! │                                ├── ...
//! └── notes.txt              →     (skipped, warning)
//! ```
//!
//! A decode, encode or filesystem error aborts the batch; files already
//! written stay in place.

use crate::assets::{ASSET_NAMES, AssetTemplate, ResizeFamily, resolve_source};
use crate::config::CONFIG_FILE_NAME;
use crate::imaging::{
    BackendError, GeneratedVariant, ImageBackend, VariantConfig, generate_variants,
};
use crate::overwrite::{Confirm, OverwritePolicy};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Input directory not found: {0}")]
    InputNotFound(PathBuf),
}

/// Everything a batch needs besides the directories and the backend.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub variant: VariantConfig,
    pub overwrite: OverwritePolicy,
    /// Config file in use, skipped if it sits in the input directory.
    pub config_file: Option<PathBuf>,
}

/// Outcome of one recognized source file.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub source: PathBuf,
    pub template: AssetTemplate,
    pub family: ResizeFamily,
    pub variants: Vec<GeneratedVariant>,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub jobs: Vec<JobReport>,
    /// Files in the input directory that are not in the asset mapping.
    pub unrecognized: Vec<String>,
    /// Mapped source names that were not found in the input directory.
    pub missing: Vec<&'static str>,
}

impl GenerateReport {
    /// Total number of variants planned across all jobs.
    pub fn variant_count(&self) -> usize {
        self.jobs.iter().map(|j| j.variants.len()).sum()
    }
}

/// List the regular files of `dir`, sorted by name. Symlinks are followed.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether `path` is the default config file or the one passed explicitly.
fn is_config_file(path: &Path, name: &str, config_file: Option<&Path>) -> bool {
    if name == CONFIG_FILE_NAME {
        return true;
    }
    match (config_file, std::fs::canonicalize(path)) {
        (Some(config), Ok(resolved)) => std::fs::canonicalize(config)
            .map(|c| c == resolved)
            .unwrap_or(false),
        _ => false,
    }
}

/// Generate every variant for every recognized file in `input_dir`.
///
/// `output_dir` is created if it does not exist. `confirm` is only consulted
/// when an output already exists and the overwrite policy is not forced.
pub fn batch_generate(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
    confirm: &mut dyn Confirm,
) -> Result<GenerateReport, GenerateError> {
    if !input_dir.is_dir() {
        return Err(GenerateError::InputNotFound(input_dir.to_path_buf()));
    }
    std::fs::create_dir_all(output_dir)?;

    let mut report = GenerateReport::default();
    for path in list_files(input_dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if is_config_file(&path, &name, options.config_file.as_deref()) {
            debug!("Skipping config file {name}");
            continue;
        }

        let Some(template) = resolve_source(&name) else {
            warn!("Unknown file name: '{name}'. This file will be ignored.");
            report.unrecognized.push(name);
            continue;
        };

        info!("Generating {} variants of {name}", template.family().label());
        let variants = generate_variants(
            backend,
            &path,
            &template,
            output_dir,
            &options.variant,
            options.overwrite,
            confirm,
        )?;
        report.jobs.push(JobReport {
            source: path,
            family: template.family(),
            template,
            variants,
        });
    }

    report.missing = ASSET_NAMES
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !report.jobs.iter().any(|j| j.template.source_name == *name))
        .collect();
    for name in &report.missing {
        warn!(
            "The file '{}' could not be found",
            input_dir.join(name).display()
        );
    }

    Ok(report)
}

/// Placeholder for asset verification.
///
/// Checking generated assets against a package manifest is not implemented;
/// this logs that fact and succeeds without inspecting anything.
pub fn verify(output_dir: &Path) -> Result<(), GenerateError> {
    info!(
        "Verifying assets in {} is not implemented; nothing was checked",
        output_dir.display()
    );
    Ok(())
}
