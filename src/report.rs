//! Audit report rendering.
//!
//! This module is separate from the core library logic to allow keyaudit
//! to be used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::reconciler::AuditSummary;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the audit report to stdout.
///
/// `reference` is the reference file path as the user configured it, shown
/// in the key-count line.
pub fn print_report(reference: &str, summary: &AuditSummary) {
    report_to(reference, summary, &mut io::stdout().lock());
}

/// Print the audit report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(reference: &str, summary: &AuditSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", "--- Translation Key Audit ---".bold());
    let _ = writeln!(
        writer,
        "Loaded {} keys from {}",
        summary.key_count, reference
    );
    let _ = writeln!(writer, "Found {} t() calls", summary.usage_count);
    let _ = writeln!(
        writer,
        "{} Verified {} usages.",
        SUCCESS_MARK.green(),
        summary.verified_count
    );

    if summary.suspicious.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{} Suspicious Usages (Potentially Missing or Dynamic):",
            summary.suspicious.len()
        )
        .bold()
        .yellow()
    );
    for usage in &summary.suspicious {
        let base_name = usage
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(writer, "  - '{}' in {}", usage.key.yellow(), base_name);
    }
}

/// Print a warning about source files that could not be read.
///
/// Shown at the end of a run when files were skipped.
pub fn print_skip_warning(skipped_count: usize, verbose: bool) {
    if skipped_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped_count,
            "-v".cyan()
        );
    }
}
