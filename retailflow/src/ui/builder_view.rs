//! Workflow builder rendering (step tabs, app column, option column)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use retailflow_sdk::Step;

use super::components::row_style;
use crate::app::{App, BuilderPane};

pub fn render_builder(f: &mut Frame, area: Rect, app: &App) {
    let show_next_step =
        app.builder.step() == Step::Trigger && app.builder.trigger().event().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(if show_next_step { 4 } else { 0 }),
        ])
        .split(area);

    render_step_tabs(f, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_app_column(f, columns[0], app);
    render_option_column(f, columns[1], app);

    if show_next_step {
        render_next_step(f, chunks[2], app);
    }
}

fn render_step_tabs(f: &mut Frame, area: Rect, app: &App) {
    let step_span = |label: &'static str, step: Step| {
        if app.builder.step() == step {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::Gray))
        }
    };

    let line = Line::from(vec![
        step_span(" [T] Workflow Trigger ", Step::Trigger),
        Span::raw("  "),
        step_span(" [A] Workflow Action ", Step::Action),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Workflow Builder "),
    );
    f.render_widget(paragraph, area);
}

fn column_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn render_app_column(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.builder_pane == BuilderPane::Apps;
    let (title, chosen) = match app.builder.step() {
        Step::Trigger => (" Choose Trigger App ", app.builder.trigger().app()),
        Step::Action => (" Choose Action App ", app.builder.action_app()),
    };

    let items: Vec<ListItem> = app
        .pane_apps()
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let is_chosen = chosen == Some(name);
            let marker = if is_chosen { "▶" } else { " " };

            // Action apps show how many actions are already checked
            let count = match app.builder.step() {
                Step::Action => app.builder.selected_actions(name).len(),
                Step::Trigger => 0,
            };
            let mut spans = vec![Span::styled(
                format!(" {} {}", marker, name),
                row_style(i == app.app_cursor, is_chosen, focused),
            )];
            if count > 0 {
                spans.push(Span::styled(
                    format!(" ({})", count),
                    Style::default().fg(Color::Green),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.app_cursor));
    let list = List::new(items).block(column_block(title.to_string(), focused));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_option_column(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.builder_pane == BuilderPane::Options;

    let (chosen_app, placeholder) = match app.builder.step() {
        Step::Trigger => (
            app.builder.trigger().app(),
            "Select a connected app to view available triggers",
        ),
        Step::Action => (
            app.builder.action_app(),
            "Select an app to view available actions",
        ),
    };

    let Some(chosen_app) = chosen_app else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(placeholder, Style::default().fg(Color::Gray))),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(column_block(String::new(), false));
        f.render_widget(paragraph, area);
        return;
    };

    let items: Vec<ListItem> = app
        .pane_options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (marker, is_chosen) = match app.builder.step() {
                Step::Trigger => {
                    let chosen = app.builder.trigger().event() == Some(*option);
                    (if chosen { "(•)" } else { "( )" }, chosen)
                }
                Step::Action => {
                    let checked = app.builder.is_action_selected(chosen_app, option);
                    (if checked { "[x]" } else { "[ ]" }, checked)
                }
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", marker, option),
                row_style(i == app.option_cursor, is_chosen, focused),
            )))
        })
        .collect();

    let title = match app.builder.step() {
        Step::Trigger => format!(" {} Triggers ", chosen_app),
        Step::Action => format!(" {} Actions ", chosen_app),
    };

    let mut state = ListState::default().with_selected(Some(app.option_cursor));
    let list = List::new(items).block(column_block(title, focused));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_next_step(f: &mut Frame, area: Rect, app: &App) {
    let trigger = app.builder.trigger();
    let (Some(trigger_app), Some(event)) = (trigger.app(), trigger.event()) else {
        return;
    };

    let text = vec![
        Line::from(Span::styled(
            "Next Step: Configure Action",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!(
                "You've selected \"{}\" from {}. Press ",
                event, trigger_app
            )),
            Span::styled("[C]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to continue to action setup."),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
