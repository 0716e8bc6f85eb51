//! Browser Commands
//!
//! Wrappers around the browser calls the UI needs, organized by concern.

mod dialog;
mod export;

// Re-export all public items
pub use dialog::*;
pub use export::*;
