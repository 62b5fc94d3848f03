//! Rule implementations for tsglot.
//!
//! This module contains pure functions that check parsed catalogs for
//! translation issues. Each `check_*` function takes only the inputs it
//! needs and returns a specific issue type; the `check_*_issues` wrappers
//! read those inputs from a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: Shared utilities (report locations, message filtering, sorting)
//! - `unfinished`: Missing or unfinished translations
//! - `vanished`: Stale (vanished/obsolete) entries
//! - `numerus`: Numerus form count per language
//! - `placeholder`: `%1..%N` / `%n` consistency
//! - `accelerator`: `&` mnemonic consistency
//! - `duplicate`: Repeated (context, source, comment) keys
//! - `identical`: Translations equal to their source
//! - `language`: File name locale vs declared language

pub mod accelerator;
pub mod duplicate;
pub mod helpers;
pub mod identical;
pub mod language;
pub mod numerus;
pub mod placeholder;
pub mod unfinished;
pub mod vanished;
