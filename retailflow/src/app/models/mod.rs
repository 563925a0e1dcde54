//! Data models for the application
//!
//! This module contains the data structures used by the RetailFlow TUI.

mod app;
mod view;

// Re-export all public types
pub use app::*;
pub use view::*;
