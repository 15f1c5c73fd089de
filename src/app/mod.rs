//! App Orchestration Methods
//!
//! `impl App` methods that connect the pure model to side effects:
//! - export: Save the selected emoji as a favicon, copy it to the clipboard

pub(crate) mod export;
