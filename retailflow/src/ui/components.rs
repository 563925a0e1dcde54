//! Reusable UI helpers

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};

/// Style for a list row: highlighted under the cursor, bold when chosen
pub fn row_style(under_cursor: bool, chosen: bool, focused: bool) -> Style {
    let mut style = if under_cursor && focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else if chosen {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    if chosen {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
