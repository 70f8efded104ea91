//! CLI output formatting for a generation run.
//!
//! # Output Format
//!
//! ```text
//! 001 Square44x44Logo-badge.png (targetsize)
//!     256: Square44x44Logo.targetsize-256.png 256x256 written
//!     48: Square44x44Logo.targetsize-48.png 48x48 overwritten
//!     ...
//! 002 StoreLogo.png (scale)
//!     400: StoreLogo.scale-400.png 200x200 written
//!     100: StoreLogo.scale-100.png 50x50 kept
//!
//! Ignored
//!     notes.txt
//!
//! Missing
//!     BadgeLogo.png
//!
//! Generated 9 files from 2 sources (1 overwritten, 1 kept)
//! ```
//!
//! # Architecture
//!
//! [`format_generate_output`] returns `Vec<String>` for testability and
//! [`print_generate_output`] writes it to stdout. The format function is
//! pure: no I/O and no side effects.

use crate::generate::GenerateReport;
use crate::imaging::VariantStatus;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn status_label(status: VariantStatus) -> &'static str {
    match status {
        VariantStatus::Written => "written",
        VariantStatus::Overwritten => "overwritten",
        VariantStatus::Skipped => "kept",
    }
}

/// Format the report of a `generate` run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, job) in report.jobs.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            job.template.source_name,
            job.family.label()
        ));
        for generated in &job.variants {
            let v = &generated.variant;
            let file = v
                .output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!(
                "{}{}: {} {}x{} {}",
                indent(1),
                v.token,
                file,
                v.width,
                v.height,
                status_label(generated.status)
            ));
        }
    }

    if !report.unrecognized.is_empty() {
        lines.push(String::new());
        lines.push("Ignored".to_string());
        for name in &report.unrecognized {
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    if !report.missing.is_empty() {
        lines.push(String::new());
        lines.push("Missing".to_string());
        for name in &report.missing {
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    let count = |status: VariantStatus| {
        report
            .jobs
            .iter()
            .flat_map(|j| &j.variants)
            .filter(|v| v.status == status)
            .count()
    };
    let written = count(VariantStatus::Written);
    let overwritten = count(VariantStatus::Overwritten);
    let kept = count(VariantStatus::Skipped);

    let mut summary = format!(
        "Generated {} file{} from {} source{}",
        written + overwritten,
        if written + overwritten == 1 { "" } else { "s" },
        report.jobs.len(),
        if report.jobs.len() == 1 { "" } else { "s" },
    );
    if overwritten > 0 || kept > 0 {
        summary.push_str(&format!(" ({overwritten} overwritten, {kept} kept)"));
    }
    lines.push(String::new());
    lines.push(summary);

    lines
}

/// Print the report of a `generate` run to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
