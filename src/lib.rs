//! Emoji Favicon Library
//!
//! Browse, search, and export emoji as SVG favicons. Exposes modules for the
//! terminal UI binary and for testing.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod logic;
pub mod model;

pub use catalog::{Catalog, EmojiRecord};
pub use error::CatalogLoadError;
