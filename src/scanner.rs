//! Source tree traversal and call-site extraction.
//!
//! The scanner is a lexical heuristic, not a parser: it recognizes
//! `t('key')`, `t("key")` and `t.rich('key')` calls by pattern matching the
//! raw file text. Computed or templated keys contribute nothing, and an
//! unrelated function named `t` is indistinguishable from a translation
//! call. Full static resolution would need type-aware parsing of the host
//! language and is out of scope.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// Matches `t('key')` / `t.rich("key")` where the key consists of letters,
/// digits, underscores, and dots. The `\b` keeps identifiers merely ending
/// in `t` (e.g. `format(`) from matching, while member calls like `obj.t(`
/// still do.
static CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt(?:\.rich)?\(['"]([A-Za-z0-9_.]+)['"]"#).unwrap());

/// One translation call site: the raw key literal and the file it came from.
///
/// The key may be fully qualified or relative to a namespace bound elsewhere
/// in the file; the scanner does not distinguish the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub key: String,
    pub file: PathBuf,
}

/// Result of scanning the source tree.
pub struct ScanOutcome {
    /// Extracted usages, in traversal order, not deduplicated.
    pub usages: Vec<Usage>,
    pub files_scanned: usize,
    /// Files matching the source extensions that could not be read.
    pub skipped_count: usize,
}

pub fn scan_usages(source_root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanOutcome {
    let mut outcome = ScanOutcome {
        usages: Vec::new(),
        files_scanned: 0,
        skipped_count: 0,
    };

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            let path = source_root.join(p);
            literal_ignore_paths.push(path);
        }
    }

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        // Literal ignore paths match by prefix
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if !entry.file_type().is_file() || !is_source_file(path) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                outcome.files_scanned += 1;
                extract_usages(&content, path, &mut outcome.usages);
            }
            Err(e) => {
                // Unreadable files are skipped, never fatal to the scan.
                outcome.skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    outcome
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts")
    )
}

/// Extract every call-site key from one file's text, in file order.
fn extract_usages(content: &str, path: &Path, out: &mut Vec<Usage>) {
    for captures in CALL_REGEX.captures_iter(content) {
        out.push(Usage {
            key: captures[1].to_string(),
            file: path.to_path_buf(),
        });
    }
}
