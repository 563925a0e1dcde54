//! Saved workflows rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use retailflow_sdk::WorkflowRecord;

use crate::app::App;

pub const EMPTY_SAVED_MESSAGE: &str = "No workflows saved yet.";

/// One saved record as display lines
pub fn record_lines(record: &WorkflowRecord) -> Vec<String> {
    let mut lines = vec![format!(
        "Trigger: {} ({})",
        record.trigger.event, record.trigger.app
    )];
    if record.actions.is_empty() {
        lines.push("  Actions: none".to_string());
    } else {
        lines.push("  Actions:".to_string());
        for (app, actions) in record.actions.iter() {
            lines.push(format!("    • {}: {}", app, actions.join(", ")));
        }
    }
    lines
}

pub fn render_saved(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Saved Workflows ");

    if app.saved.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_SAVED_MESSAGE,
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .saved
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == app.saved_selected;
            let mut lines: Vec<Line> = record_lines(record)
                .into_iter()
                .enumerate()
                .map(|(n, text)| {
                    if n == 0 {
                        Line::from(Span::styled(
                            format!("{} {}", if is_selected { "▶" } else { " " }, text),
                            Style::default()
                                .fg(if is_selected { Color::White } else { Color::Gray })
                                .add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(Span::styled(
                            format!("  {}", text),
                            Style::default().fg(Color::DarkGray),
                        ))
                    }
                })
                .collect();
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.saved_selected));
    let list = List::new(items).block(block);
    f.render_stateful_widget(list, area, &mut state);
}
