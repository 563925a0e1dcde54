//! UI rendering functions for the RetailFlow TUI
//!
//! This module contains the rendering logic for the builder and saved views
//! plus the notification overlays.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};

// Module declarations
mod builder_view;
mod components;
mod header_footer;
mod notifications;
mod saved_view;

// Re-export public functions
pub use builder_view::render_builder;
pub use components::centered_rect;
pub use header_footer::{render_footer, render_header};
pub use notifications::{render_alert, render_notifications};
pub use saved_view::{record_lines, render_saved, EMPTY_SAVED_MESSAGE};

/// Main UI rendering function - orchestrates all view rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    match app.current_view {
        View::Builder => render_builder(f, chunks[1], app),
        View::Saved => render_saved(f, chunks[1], app),
    }

    render_footer(f, chunks[2], app);

    // Toasts sit over the bottom of the content area
    render_notifications(f, app, chunks[1]);

    // Blocking alert overlay
    if let Some(alert) = &app.alert {
        render_alert(f, alert, f.area());
    }
}
