use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Focus;

/// Render the status bar (top bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Current time
    let now = Local::now();
    let time_str = now.format("%H:%M:%S").to_string();

    let mut spans = vec![
        Span::styled(
            " INVENTORY ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} parts", app.parts.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" "),
    ];

    // Show the open dialog, if any
    if app.dialog.is_open() {
        spans.push(Span::styled(
            format!("[{}]", app.dialog.title()),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Right-aligned time
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 2);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(Color::DarkGray),
    ));

    let status_line = Line::from(spans);

    let paragraph = Paragraph::new(status_line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}

/// Render the search bar below the status bar
pub fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search && !app.dialog.is_open();
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let mut spans = vec![Span::raw(app.search_input.as_str())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Green))); // Cursor
    } else if app.search_input.is_empty() {
        spans = vec![Span::styled(
            "Search parts by location...",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(paragraph, area);
}
