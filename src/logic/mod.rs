//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - search: Case-insensitive filtering of the catalog
//! - pagination: Page slicing and previous/next clamping
//! - export: SVG favicon encoding and file naming
//! - navigation: Grid selection movement
//! - layout: Grid sizing and text truncation
//! - ui: Toast timing and classification

pub mod export;
pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod search;
pub mod ui;
