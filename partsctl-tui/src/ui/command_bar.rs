use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::{Dialog, Focus};

/// Render the command bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(ref msg) = app.status_message {
        Line::from(msg.as_str())
    } else {
        // Keybind hints based on state
        let hints = match (&app.dialog, app.focus) {
            (Dialog::Add, _) | (Dialog::Edit(_), _) => {
                "Tab: next field | Enter: save | Esc: cancel"
            }
            (Dialog::ConfirmDelete(_), _) => "y: delete | n: keep",
            (Dialog::None, Focus::Search) => "Enter: search | Esc: clear search",
            (Dialog::None, Focus::Table) => {
                "a: add | e: edit | d: delete | /: search | r: reload | q: quit"
            }
        };

        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    let paragraph = Paragraph::new(content);
    f.render_widget(paragraph, area);
}
