//! Notification rendering for user-visible feedback

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::components::centered_rect;
use crate::app::{Alert, App, NotificationLevel};

fn level_colors(level: NotificationLevel) -> (Color, Color, &'static str) {
    match level {
        NotificationLevel::Error => (Color::Red, Color::White, "✗"),
        NotificationLevel::Warning => (Color::Yellow, Color::Black, "⚠"),
        NotificationLevel::Info => (Color::Blue, Color::White, "ℹ"),
        NotificationLevel::Success => (Color::Green, Color::White, "✓"),
    }
}

const TOAST_HEIGHT: u16 = 3;
const MAX_VISIBLE: usize = 3;

/// Stack the newest toasts along the bottom edge of `area`
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let active = app.notifications.get_active();

    let mut bottom = area.y + area.height;
    for toast in active.iter().rev().take(MAX_VISIBLE) {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        bottom -= TOAST_HEIGHT;
        let slot = Rect::new(area.x, bottom, area.width, TOAST_HEIGHT);

        let (accent, badge_fg, icon) = level_colors(toast.level);
        let line = Line::from(vec![
            Span::styled(
                format!("{} {} ", icon, toast.title),
                Style::default()
                    .fg(badge_fg)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(toast.message.as_str()),
        ]);

        let toast_widget = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            );

        f.render_widget(Clear, slot);
        f.render_widget(toast_widget, slot);
    }
}

/// Render the blocking alert box in the middle of the screen
pub fn render_alert(f: &mut Frame, alert: &Alert, area: Rect) {
    let popup_area = centered_rect(50, 30, area);
    let (color, _, icon) = level_colors(alert.level);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", icon, alert.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(Color::White),
        )),
    ];

    if let Some(detail) = &alert.detail {
        text.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled(
            "[Enter]",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" OK"),
    ]));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" RetailFlow "),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
