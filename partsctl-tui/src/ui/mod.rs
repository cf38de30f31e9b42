pub mod command_bar;
pub mod dialog;
pub mod layout;
pub mod status_bar;
pub mod table_panel;

use ratatui::Frame;

use crate::app::App;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    // Get main layout areas
    let full_area = f.area();
    let (status_area, search_area, table_area, command_area) = layout::Layout::main(full_area);

    // Render status bar
    status_bar::render(f, status_area, app);

    // Render search bar
    status_bar::render_search(f, search_area, app);

    // Render parts table
    table_panel::render(f, table_area, app);

    // Render command bar
    command_bar::render(f, command_area, app);

    // Render the active dialog on top, if any
    dialog::render(f, full_area, app);
}
