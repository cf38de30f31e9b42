use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use partsctl_core::{Part, PartsClient};

use crate::form::PartForm;
use crate::mode::{Dialog, Focus};

/// Main application state.
///
/// Owns the current row set and all UI state; every mutation goes through
/// the remote client followed by an unconditional full reload. Remote
/// failures are converted into a status message and leave the rest of the
/// state untouched.
pub struct App {
    /// Current row set (replaced wholesale on every reload)
    pub parts: Vec<Part>,

    /// Table cursor
    pub selected: usize,

    /// Search box contents
    pub search_input: String,

    /// Whether typed input goes to the table or the search box
    pub focus: Focus,

    /// Active modal dialog
    pub dialog: Dialog,

    /// Draft form for the add/edit dialog
    pub form: PartForm,

    /// Transient message (shown in the bottom bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,

    /// Remote table client
    pub client: PartsClient,
}

impl App {
    /// Create a new App
    pub fn new(client: PartsClient) -> Self {
        Self {
            parts: Vec::new(),
            selected: 0,
            search_input: String::new(),
            focus: Focus::Table,
            dialog: Dialog::None,
            form: PartForm::new(),
            status_message: None,
            should_quit: false,
            client,
        }
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if self.dialog.is_open() {
            self.handle_dialog_keys(key).await?;
        } else {
            match self.focus {
                Focus::Table => self.handle_table_keys(key).await?,
                Focus::Search => self.handle_search_keys(key).await?,
            }
        }
        Ok(())
    }

    /// Keys while the table has focus and no dialog is open
    async fn handle_table_keys(&mut self, key: KeyEvent) -> Result<()> {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
            }

            // Open the add dialog
            (KeyCode::Char('a'), KeyModifiers::NONE) => {
                self.open_add_dialog();
            }

            // Open the edit dialog for the selected row
            (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Enter, KeyModifiers::NONE) => {
                self.open_edit_dialog();
            }

            // Ask for delete confirmation
            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                self.open_delete_dialog();
            }

            // Focus the search box
            (KeyCode::Char('/'), KeyModifiers::NONE) => {
                self.focus = Focus::Search;
            }

            // Manual reload
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                self.load_parts().await;
            }

            // Table navigation
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.select_next();
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.select_previous();
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.selected = 0;
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.selected = self.parts.len().saturating_sub(1);
            }

            // Dismiss the status message
            (KeyCode::Esc, _) => {
                self.status_message = None;
            }

            _ => {}
        }
        Ok(())
    }

    /// Keys while the search box has focus
    async fn handle_search_keys(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Clear the search and go back to the full set
            KeyCode::Esc => {
                self.search_input.clear();
                self.focus = Focus::Table;
                self.load_parts().await;
            }

            // Run the search
            KeyCode::Enter => {
                self.focus = Focus::Table;
                self.run_search().await;
            }

            KeyCode::Backspace => {
                self.search_input.pop();
            }

            KeyCode::Char(c) => {
                self.search_input.push(c);
            }

            _ => {}
        }
        Ok(())
    }

    /// Keys while a dialog is open
    async fn handle_dialog_keys(&mut self, key: KeyEvent) -> Result<()> {
        if let Dialog::ConfirmDelete(_) = self.dialog {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete().await,
                KeyCode::Char('n') | KeyCode::Esc => self.cancel_dialog(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            // Cancel: close and clear without mutation
            KeyCode::Esc => {
                self.cancel_dialog();
            }

            // Submit: create or update, then reload
            KeyCode::Enter => {
                self.submit_dialog().await;
            }

            // Field navigation
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
            }

            KeyCode::Backspace => {
                self.form.backspace();
            }

            KeyCode::Char(c) => {
                self.form.insert_char(c);
            }

            _ => {}
        }
        Ok(())
    }

    /// Open the add dialog with a cleared form
    pub fn open_add_dialog(&mut self) {
        self.form.clear();
        self.dialog = Dialog::Add;
    }

    /// Open the edit dialog pre-populated from the selected row
    pub fn open_edit_dialog(&mut self) {
        if let Some(part) = self.selected_part().cloned() {
            self.form = PartForm::from_part(&part);
            self.dialog = Dialog::Edit(part);
        }
    }

    /// Ask for confirmation before deleting the selected row
    pub fn open_delete_dialog(&mut self) {
        if let Some(part) = self.selected_part().cloned() {
            self.dialog = Dialog::ConfirmDelete(part);
        }
    }

    /// Close the dialog and clear the form without mutating anything
    pub fn cancel_dialog(&mut self) {
        self.dialog = Dialog::None;
        self.form.clear();
    }

    /// The row under the table cursor
    pub fn selected_part(&self) -> Option<&Part> {
        self.parts.get(self.selected)
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected < self.parts.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Reload the full row set from the remote table
    pub async fn load_parts(&mut self) {
        match self.client.list_all().await {
            Ok(parts) => {
                self.parts = parts;
                self.clamp_selection();
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to load parts: {}", e));
            }
        }
    }

    /// Run the location search, or reload the full set for an empty query
    pub async fn run_search(&mut self) {
        match self.client.search_by_location(&self.search_input).await {
            Ok(parts) => {
                self.parts = parts;
                self.selected = 0;
            }
            Err(e) => {
                self.status_message = Some(format!("Search failed: {}", e));
            }
        }
    }

    /// Submit the open add/edit dialog. On success the dialog closes, the
    /// form clears, and the full set reloads; on failure the dialog stays
    /// open with the draft intact.
    pub async fn submit_dialog(&mut self) {
        match self.dialog.clone() {
            Dialog::Add => match self.client.create(&self.form.to_new_part()).await {
                Ok(_) => {
                    self.status_message = Some("Part added successfully".to_string());
                    self.cancel_dialog();
                    self.load_parts().await;
                }
                Err(e) => {
                    self.status_message = Some(format!("Failed to add part: {}", e));
                }
            },

            Dialog::Edit(original) => {
                match self.client.update(original.id, &self.form.to_patch()).await {
                    Ok(_) => {
                        self.status_message = Some("Part updated successfully".to_string());
                        self.cancel_dialog();
                        self.load_parts().await;
                    }
                    Err(e) => {
                        self.status_message = Some(format!("Failed to update part: {}", e));
                    }
                }
            }

            Dialog::None | Dialog::ConfirmDelete(_) => {}
        }
    }

    /// Run the confirmed delete, then reload
    pub async fn confirm_delete(&mut self) {
        if let Dialog::ConfirmDelete(part) = self.dialog.clone() {
            match self.client.delete(part.id).await {
                Ok(()) => {
                    self.status_message = Some("Part deleted successfully".to_string());
                }
                Err(e) => {
                    self.status_message = Some(format!("Failed to delete part: {}", e));
                }
            }
            self.dialog = Dialog::None;
            self.load_parts().await;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.parts.len() {
            self.selected = self.parts.len().saturating_sub(1);
        }
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use partsctl_core::PartsClient;

    fn test_app() -> App {
        // No request is made by the pure transitions under test
        App::new(PartsClient::new("http://127.0.0.1:1", "test"))
    }

    fn sample_part(id: i64, name: &str) -> Part {
        Part {
            id,
            serial_number: 1000 + id,
            part_name: name.into(),
            description: None,
            quantity: 100,
            rate: 2.5,
            image_url: None,
            warehouse_location: Some("Aisle 3".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_dialog_opens_with_cleared_form() {
        let mut app = test_app();
        app.form.part_name = "stale draft".into();

        app.open_add_dialog();
        assert_eq!(app.dialog, Dialog::Add);
        assert_eq!(app.form, PartForm::new());
    }

    #[test]
    fn test_edit_dialog_prefills_from_selected_row() {
        let mut app = test_app();
        app.parts = vec![sample_part(1, "Bolt M6"), sample_part(2, "Washer")];
        app.selected = 1;

        app.open_edit_dialog();
        match &app.dialog {
            Dialog::Edit(original) => assert_eq!(original.id, 2),
            other => panic!("expected edit dialog, got {:?}", other),
        }
        assert_eq!(app.form.part_name, "Washer");
        assert_eq!(app.form.quantity, "100");
    }

    #[test]
    fn test_dialogs_are_mutually_exclusive() {
        let mut app = test_app();
        app.parts = vec![sample_part(1, "Bolt M6")];

        app.open_add_dialog();
        app.open_edit_dialog();
        // Opening edit replaces add; there is exactly one active dialog
        assert!(matches!(app.dialog, Dialog::Edit(_)));
    }

    #[test]
    fn test_cancel_clears_form_and_closes() {
        let mut app = test_app();
        app.parts = vec![sample_part(1, "Bolt M6")];
        app.open_edit_dialog();

        app.cancel_dialog();
        assert_eq!(app.dialog, Dialog::None);
        assert_eq!(app.form, PartForm::new());
    }

    #[test]
    fn test_edit_and_delete_need_a_selected_row() {
        let mut app = test_app();

        app.open_edit_dialog();
        assert_eq!(app.dialog, Dialog::None);

        app.open_delete_dialog();
        assert_eq!(app.dialog, Dialog::None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = test_app();
        app.parts = vec![sample_part(1, "Bolt M6"), sample_part(2, "Washer")];

        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);

        app.parts.truncate(1);
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }
}
