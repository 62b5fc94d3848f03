use std::path::Path;

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning for catalog files.
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Find catalog files below `base_dir`.
///
/// `includes` are glob patterns matched against the path relative to
/// `base_dir` (e.g. `**/*.ts`, `translations/*_he.ts`). `ignores` are glob
/// patterns matched against the full path, or literal directories relative
/// to `base_dir`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let include_patterns = compile_patterns(includes, "include", verbose);

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths = Vec::new();
    let mut ignore_patterns = Vec::new();
    for p in ignores {
        if is_glob_pattern(p) {
            ignore_patterns.extend(compile_patterns(std::slice::from_ref(p), "ignore", verbose));
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let walker = WalkDir::new(base_dir).into_iter().filter_entry(|entry| {
        let path = entry.path();
        !literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();
        if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if include_patterns.iter().any(|p| p.matches_path(relative)) {
            files.push(path_str.into_owned());
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Check if a pattern contains glob wildcards.
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn compile_patterns(patterns: &[String], kind: &str, verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid {} pattern '{}': {}",
                        "warning:".bold().yellow(),
                        kind,
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}
