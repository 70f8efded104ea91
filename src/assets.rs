//! The asset mapping: which source files are recognized and how their
//! variants are named.
//!
//! Every recognized source maps to a filename template carrying exactly one
//! placeholder. `{scale}` templates belong to the [`ResizeFamily::Scale`]
//! family, `{size}` templates to [`ResizeFamily::Size`]:
//!
//! ```text
//! Square44x44Logo.png        → Square44x44Logo.scale-{scale}
//!                              Square44x44Logo.scale-400.png
//!                              Square44x44Logo.scale-200.png  ...
//! Square44x44Logo-badge.png  → Square44x44Logo.targetsize-{size}
//!                              Square44x44Logo.targetsize-256.png
//!                              Square44x44Logo.targetsize-48.png  ...
//! ```
//!
//! The encoded extension is not part of the template; it is appended when the
//! template is rendered so the same table serves every output encoding.

const SCALE_PLACEHOLDER: &str = "{scale}";
const SIZE_PLACEHOLDER: &str = "{size}";

/// Source filename → output filename template.
pub const ASSET_NAMES: &[(&str, &str)] = &[
    ("BadgeLogo.png", "BadgeLogo.scale-{scale}"),
    ("SplashScreen.png", "SplashScreen.scale-{scale}"),
    ("Square44x44Logo.png", "Square44x44Logo.scale-{scale}"),
    (
        "Square44x44Logo-badge-unplated.png",
        "Square44x44Logo.targetsize-{size}_altform-unplated",
    ),
    (
        "Square44x44Logo-badge.png",
        "Square44x44Logo.targetsize-{size}",
    ),
    ("Square71x71Logo.png", "Square71x71Logo.scale-{scale}"),
    ("Square150x150Logo.png", "Square150x150Logo.scale-{scale}"),
    ("Square310x310Logo.png", "Square310x310Logo.scale-{scale}"),
    ("StoreLogo.png", "StoreLogo.scale-{scale}"),
    ("Wide310x150Logo.png", "Wide310x150Logo.scale-{scale}"),
];

/// Scale factors and the token each one is published under.
///
/// Tokens are percentages of the 100% (`scale-100`) asset; the source image is
/// treated as the 400% asset.
pub const SCALES: &[(f64, u32)] = &[
    (1.0, 400),
    (0.5, 200),
    (0.375, 150),
    (0.3125, 125),
    (0.25, 100),
];

/// Absolute target sizes, in pixels, for `targetsize-N` assets.
pub const TARGET_SIZES: &[u32] = &[256, 48, 32, 24, 16];

/// How a source image is turned into its variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeFamily {
    /// Proportional downscale by each of [`SCALES`].
    Scale,
    /// Square output at each of [`TARGET_SIZES`], ignoring the source aspect.
    Size,
}

/// One entry of a family, resolved against a source's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyEntry {
    /// Value substituted into the template placeholder.
    pub token: u32,
    pub width: u32,
    pub height: u32,
}

impl ResizeFamily {
    /// Number of variants this family produces per source.
    pub fn variant_count(self) -> usize {
        match self {
            ResizeFamily::Scale => SCALES.len(),
            ResizeFamily::Size => TARGET_SIZES.len(),
        }
    }

    /// The family's entries, in publication order, for a source of the given size.
    pub fn entries(self, source: (u32, u32)) -> Vec<FamilyEntry> {
        match self {
            ResizeFamily::Scale => SCALES
                .iter()
                .map(|&(factor, token)| {
                    let (width, height) = crate::imaging::scaled_dimensions(source, factor);
                    FamilyEntry {
                        token,
                        width,
                        height,
                    }
                })
                .collect(),
            ResizeFamily::Size => TARGET_SIZES
                .iter()
                .map(|&size| FamilyEntry {
                    token: size,
                    width: size,
                    height: size,
                })
                .collect(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResizeFamily::Scale => "scale",
            ResizeFamily::Size => "targetsize",
        }
    }
}

/// A recognized source file and the template its variants are named by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTemplate {
    pub source_name: &'static str,
    pub template: &'static str,
}

impl AssetTemplate {
    /// Size family iff the template carries the `{size}` placeholder.
    pub fn family(&self) -> ResizeFamily {
        if self.template.contains(SIZE_PLACEHOLDER) {
            ResizeFamily::Size
        } else {
            ResizeFamily::Scale
        }
    }

    /// Output filename for one family entry: placeholder substituted, then `.ext`.
    pub fn render(&self, token: u32, extension: &str) -> String {
        let placeholder = match self.family() {
            ResizeFamily::Scale => SCALE_PLACEHOLDER,
            ResizeFamily::Size => SIZE_PLACEHOLDER,
        };
        format!(
            "{}.{}",
            self.template.replace(placeholder, &token.to_string()),
            extension
        )
    }
}

/// Look up a source basename in the asset mapping.
///
/// Matching is exact (case-sensitive), like the manifest names themselves.
pub fn resolve_source(filename: &str) -> Option<AssetTemplate> {
    ASSET_NAMES
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|&(source_name, template)| AssetTemplate {
            source_name,
            template,
        })
}
