//! tsglot - checker and toolkit for Qt Linguist `.ts` translation catalogs
//!
//! tsglot is a CLI tool and library that parses Qt Linguist catalogs
//! (`TS version="2.1"`), checks them for translation issues (unfinished
//! entries, placeholder and numerus form mismatches, stale entries, ...),
//! resolves source strings the way an application's translator does, and
//! rewrites catalogs in lupdate layout.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, TS reader/writer, plural rules and lookup
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Checks over parsed catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
