//! Modal dialogs: the add/edit form and the delete confirmation.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::{Dialog, FormField};

use super::layout::Layout;

/// Render the active dialog on top of the main view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match &app.dialog {
        Dialog::None => {}
        Dialog::Add | Dialog::Edit(_) => render_form(f, area, app),
        Dialog::ConfirmDelete(part) => render_confirm(f, area, app, &part.part_name),
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    // One bordered line per field plus the frame
    let height = (FormField::ALL.len() as u16) * 3 + 2;
    let modal = Layout::modal(area, 52, height);

    f.render_widget(Clear, modal);

    let frame = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.dialog.title()))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = frame.inner(modal);
    f.render_widget(frame, modal);

    let constraints: Vec<Constraint> =
        FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = app.form.focused == *field;
        let border_color = if focused { Color::Yellow } else { Color::DarkGray };

        let mut spans = vec![Span::raw(app.form.buffer(*field))];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Green))); // Cursor
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(input, *row);
    }
}

fn render_confirm(f: &mut Frame, area: Rect, app: &App, part_name: &str) {
    let modal = Layout::modal(area, 46, 5);

    f.render_widget(Clear, modal);

    let message = Paragraph::new(vec![
        Line::from(format!("Delete \"{}\"?", part_name)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(": delete  "),
            Span::styled(
                "n",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": keep"),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.dialog.title()))
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(message, modal);
}
