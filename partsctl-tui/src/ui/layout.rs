use ratatui::layout::{Constraint, Direction, Flex, Layout as RatatuiLayout, Rect};

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, search bar, table area, and
    /// command bar
    ///
    /// Returns: (status_area, search_area, table_area, command_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Parts table
                Constraint::Length(1), // Command bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Centered modal area for dialogs
    pub fn modal(area: Rect, width: u16, height: u16) -> Rect {
        let [area] = RatatuiLayout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = RatatuiLayout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }
}
