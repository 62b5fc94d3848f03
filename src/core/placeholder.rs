//! Placeholder and accelerator handling for message text.
//!
//! Qt message text uses `%1`..`%99` for positional arguments (optionally
//! `%L1` for locale-aware formatting), `%n` / `%Ln` for the plural count
//! and `%%` for a literal percent sign. Menu texts mark their keyboard
//! mnemonic with a single `&`; `&&` is a literal ampersand.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%|%L?([0-9]{1,2})|%L?n").unwrap());

// Body of an HTML entity right after the '&' (rich-text sources).
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#x[0-9A-Fa-f]+);").unwrap()
});

/// Positional placeholder numbers used in `text` (`%1`, `%L2`, ...).
///
/// `%0` is not a Qt placeholder and is ignored.
pub fn positional_placeholders(text: &str) -> BTreeSet<u8> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .filter(|n| *n > 0)
        .collect()
}

/// Whether `text` contains the plural count marker `%n` or `%Ln`.
pub fn has_count_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE
        .find_iter(text)
        .any(|m| m.as_str().ends_with('n'))
}

/// Substitute positional arguments: `%1` becomes `args[0]`, and so on.
///
/// Markers without a matching argument are left untouched.
pub fn fill_args(template: &str, args: &[&str]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let whole = &caps[0];
            caps.get(1)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .filter(|n| *n >= 1 && *n <= args.len())
                .map(|n| args[n - 1].to_string())
                .unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

/// Substitute the plural count marker (`%n`, `%Ln`) with `count`.
pub fn fill_count(template: &str, count: i64) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let whole = &caps[0];
            if whole.ends_with('n') {
                count.to_string()
            } else {
                whole.to_string()
            }
        })
        .into_owned()
}

/// Keyboard accelerator (mnemonic) of a menu or button text.
///
/// Returns the character following the first single `&`. `&&` is a
/// literal ampersand, and an `&` followed by whitespace, end of text or an
/// HTML entity body (`&nbsp;`) is not a mnemonic.
pub fn accelerator(text: &str) -> Option<char> {
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        let after = &rest[pos + 1..];
        let mut chars = after.chars();
        match chars.next() {
            Some('&') => {
                rest = &after[1..];
            }
            Some(c) if c.is_whitespace() => {
                rest = after;
            }
            Some(c) => {
                if ENTITY_RE.is_match(after) {
                    rest = after;
                    continue;
                }
                return Some(c);
            }
            None => return None,
        }
    }
    None
}

/// Render a placeholder number the way it appears in text (`3` -> `%3`).
pub fn format_placeholder(n: u8) -> String {
    format!("%{}", n)
}
