//! # uwp-assets
//!
//! Generates every resolution variant a packaged Windows (UWP / MSIX)
//! application expects for its logos, from one high-resolution source per
//! logo.
//!
//! Drop the sources into an input directory under their canonical names
//! (`Square44x44Logo.png`, `Wide310x150Logo.png`, ...) and every recognized
//! file is expanded into its five variants:
//!
//! ```text
//! input/StoreLogo.png                  output/StoreLogo.scale-400.png
//!                                →     output/StoreLogo.scale-200.png
//!                                      output/StoreLogo.scale-150.png
//!                                      output/StoreLogo.scale-125.png
//!                                      output/StoreLogo.scale-100.png
//!
//! input/Square44x44Logo-badge.png      output/Square44x44Logo.targetsize-256.png
//!                                →     output/Square44x44Logo.targetsize-48.png
//!                                      ...  (32, 24, 16)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`assets`] | Static asset mapping, scale/size families, filename templates |
//! | [`imaging`] | Dimension math, resize + encode backend, per-source variant generation |
//! | [`overwrite`] | Overwrite policy and the interactive yes/no prompt |
//! | [`generate`] | Batch run over an input directory, run report, `verify` placeholder |
//! | [`config`] | `assets.toml` loading, layering with CLI overrides, validation |
//! | [`output`] | CLI output formatting of the run report |
//!
//! # Design Decisions
//!
//! ## Scale Tokens Are Relative To The Source
//!
//! The source image is treated as the 400% asset. Scale variants are
//! proportional downscales (factor 1, 0.5, 0.375, 0.3125, 0.25) with each edge
//! truncated to a whole pixel. Target-size variants are always square and
//! ignore the source aspect ratio.
//!
//! ## Fresh Decode Per Variant
//!
//! Each variant is resized from a fresh decode of the source file, never from
//! a previous variant, so quality does not degrade down the chain.
//!
//! ## Prompting Is Injected
//!
//! The overwrite decision takes a [`overwrite::Confirm`] implementation. The
//! CLI passes a terminal prompt; tests pass scripted answers.

pub mod assets;
pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod overwrite;

#[cfg(test)]
pub(crate) mod test_helpers;
