//! Actions for processing catalog issues.
//!
//! Actions convert Issues into Operations and execute them.
//! This module provides a type-safe way to handle different issue types.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level catalog edit)
//!     ↓
//! execute (rewrite .ts file)
//! ```
//!
//! ## Actions
//!
//! - [`RemoveMessage`]: Remove vanished/obsolete messages from catalogs (clean)

mod operation;
mod remove_message;
mod traits;

pub use operation::Operation;
pub use remove_message::RemoveMessage;
pub use traits::{Action, ActionStats};
