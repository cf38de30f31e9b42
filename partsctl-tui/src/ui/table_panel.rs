use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::mode::Focus;

/// Render the parts table (main content area)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.focus == Focus::Table && !app.dialog.is_open() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Parts ")
        .border_style(Style::default().fg(border_color));

    if app.parts.is_empty() {
        // Show empty state with helpful guidance
        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No parts yet",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'a' to add a part, or '/' to search by location",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(empty_msg, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Serial No."),
        Cell::from("Part Name"),
        Cell::from("Description"),
        Cell::from("Qty"),
        Cell::from("Rate"),
        Cell::from("Location"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .parts
        .iter()
        .map(|part| {
            Row::new(vec![
                Cell::from(part.serial_number.to_string()),
                Cell::from(part.part_name.clone()),
                Cell::from(part.description.clone().unwrap_or_default()),
                Cell::from(part.quantity.to_string()),
                Cell::from(format!("{:.2}", part.rate)),
                Cell::from(part.warehouse_location.clone().unwrap_or_default()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(table, area, &mut state);
}
