//! Core data types for translation catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, Translation)
//! - `message`: Report locations (MessageLocation, MessageContext)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, Context, DEFAULT_TS_VERSION, Location, Message, Translation, TranslationForms,
    TranslationType, primary_subtag,
};
pub use message::{MessageContext, MessageLocation};
