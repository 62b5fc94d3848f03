//! Core catalog engine.
//!
//! - `data`: catalog model (contexts, messages, translations) and report locations
//! - `parsers`: `.ts` reader
//! - `writer`: `.ts` writer in lupdate layout
//! - `editor`: in-place removal of messages from a `.ts` file
//! - `plural`: numerus rules per language
//! - `placeholder`: `%1` / `%n` markers and `&` accelerators
//! - `translator`: runtime-style lookup with source fallback
//! - `context`: [`CheckContext`], the loaded project shared by rules and commands

pub mod context;
pub mod data;
pub mod editor;
pub mod error;
pub mod file_scanner;
pub mod parsers;
pub mod placeholder;
pub mod plural;
pub mod stats;
pub mod translator;
pub mod writer;

pub use context::CheckContext;
pub use data::*;
pub use editor::TsEditor;
pub use error::{TsError, TsResult};
pub use plural::PluralRule;
pub use stats::CatalogStats;
pub use translator::Translator;
