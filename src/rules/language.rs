//! File name / declared language consistency rule.
//!
//! lupdate projects name catalogs `<project>_<locale>.ts` (`katvan_he.ts`,
//! `shell_pt_BR.ts`). When the locale in the file name and `TS@language`
//! disagree the catalog is usually loaded for the wrong locale.

use std::path::Path;

use crate::{
    core::{Catalog, CheckContext, primary_subtag},
    issues::LanguageMismatchIssue,
};

pub fn check_language_issues(ctx: &CheckContext) -> Vec<LanguageMismatchIssue> {
    check_language(ctx.catalogs())
}

pub fn check_language(catalogs: &[Catalog]) -> Vec<LanguageMismatchIssue> {
    let mut issues: Vec<LanguageMismatchIssue> = catalogs
        .iter()
        .filter_map(|catalog| {
            let file_locale = file_name_locale(&catalog.file_path)?;
            if primary_subtag(&file_locale) == catalog.language_code() {
                return None;
            }
            Some(LanguageMismatchIssue {
                file_path: catalog.file_path.clone(),
                file_locale,
                declared: catalog.language.clone(),
            })
        })
        .collect();

    issues.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    issues
}

/// Locale suffix of a catalog file name.
///
/// The locale starts at the last `_`-separated segment after the project
/// name that is a two or three letter lowercase language code, and runs to
/// the end of the stem: `katvan_he.ts` -> `he`, `shell_pt_BR.ts` -> `pt_BR`.
pub fn file_name_locale(file_path: &str) -> Option<String> {
    let stem = Path::new(file_path).file_stem()?.to_str()?;
    let segments: Vec<&str> = stem.split('_').collect();

    let start = segments[1..].iter().rposition(|s| is_language_code(s))? + 1;
    Some(segments[start..].join("_"))
}

fn is_language_code(segment: &str) -> bool {
    (2..=3).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_lowercase())
}
