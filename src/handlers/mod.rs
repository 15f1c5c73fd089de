//! Event Handlers
//!
//! - keyboard: User keyboard input

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
