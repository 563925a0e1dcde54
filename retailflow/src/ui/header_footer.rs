//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};
use retailflow_sdk::Step;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().add_modifier(Modifier::BOLD))
}

fn tab(label: String, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::Gray))
    }
}

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "RetailFlow",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        tab(
            " [1] Workflow Builder ".to_string(),
            app.current_view == View::Builder,
        ),
        Span::raw(" "),
        tab(
            format!(" [2] Saved Workflows ({}) ", app.saved.len()),
            app.current_view == View::Saved,
        ),
    ];

    if app.is_saving() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Saving...",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw("      "));
    spans.push(key("[Q]"));
    spans.push(Span::raw("uit"));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.alert.is_some() {
        Line::from(vec![key("[Enter/Esc/Space]"), Span::raw(" Dismiss")])
    } else {
        match app.current_view {
            View::Builder => {
                let mut spans = vec![
                    key("[↑↓]"),
                    Span::raw(" Navigate  "),
                    key("[←→]"),
                    Span::raw(" Column  "),
                    key("[Enter]"),
                    Span::raw(" Select  "),
                    key("[T/A]"),
                    Span::raw(" Step  "),
                ];
                if app.builder.step() == Step::Trigger && app.builder.trigger().event().is_some()
                {
                    spans.push(key("[C]"));
                    spans.push(Span::raw(" Continue  "));
                }
                if app.builder.can_save() {
                    spans.push(key("[S]"));
                    spans.push(Span::raw(" Save Workflow  "));
                }
                spans.push(key("[Q]"));
                spans.push(Span::raw(" Quit"));
                Line::from(spans)
            }
            View::Saved => {
                let mut spans = vec![key("[↑↓]"), Span::raw(" Navigate  ")];
                if !app.saved.is_empty() {
                    spans.push(key("[X]"));
                    spans.push(Span::raw(" Clear All Workflows  "));
                }
                spans.push(key("[1]"));
                spans.push(Span::raw(" Builder  "));
                spans.push(key("[Q]"));
                spans.push(Span::raw(" Quit"));
                Line::from(spans)
            }
        }
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
