//! Catalog file parsers.
//!
//! - `ts`: Qt Linguist `.ts` XML catalogs (event-based, via quick-xml)

pub mod ts;
