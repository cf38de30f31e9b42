//! Draft field buffers for the add/edit dialog.

use partsctl_core::{NewPart, Part, PartPatch};

use crate::mode::FormField;

/// Text buffers for the part form. Numeric fields are kept as text while
/// editing and parsed on submit; unparseable input falls back to zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartForm {
    pub part_name: String,
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub warehouse_location: String,

    /// Which field is being edited
    pub focused: FormField,
}

impl PartForm {
    /// Empty form, focus on the name field
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-populated from an existing row (for the edit dialog)
    pub fn from_part(part: &Part) -> Self {
        Self {
            part_name: part.part_name.clone(),
            description: part.description.clone().unwrap_or_default(),
            quantity: part.quantity.to_string(),
            rate: part.rate.to_string(),
            warehouse_location: part.warehouse_location.clone().unwrap_or_default(),
            focused: FormField::Name,
        }
    }

    /// Reset all buffers and focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Buffer for a given field
    pub fn buffer(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.part_name,
            FormField::Description => &self.description,
            FormField::Quantity => &self.quantity,
            FormField::Rate => &self.rate,
            FormField::Location => &self.warehouse_location,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Name => &mut self.part_name,
            FormField::Description => &mut self.description,
            FormField::Quantity => &mut self.quantity,
            FormField::Rate => &mut self.rate,
            FormField::Location => &mut self.warehouse_location,
        }
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        self.buffer_mut().push(c);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Parsed quantity, zero when the buffer is not a number
    pub fn parsed_quantity(&self) -> i64 {
        self.quantity.trim().parse().unwrap_or(0)
    }

    /// Parsed rate, zero when the buffer is not a number
    pub fn parsed_rate(&self) -> f64 {
        self.rate.trim().parse().unwrap_or(0.0)
    }

    /// Insert payload for the add dialog
    pub fn to_new_part(&self) -> NewPart {
        NewPart {
            part_name: self.part_name.clone(),
            description: non_empty(&self.description),
            quantity: self.parsed_quantity(),
            rate: self.parsed_rate(),
            image_url: None,
            warehouse_location: non_empty(&self.warehouse_location),
        }
    }

    /// Full patch for the edit dialog. All form-backed fields are written,
    /// mirroring the submit behavior of the edit form; empty optional
    /// buffers clear the stored value.
    pub fn to_patch(&self) -> PartPatch {
        PartPatch {
            part_name: Some(self.part_name.clone()),
            description: Some(non_empty(&self.description)),
            quantity: Some(self.parsed_quantity()),
            rate: Some(self.parsed_rate()),
            image_url: None,
            warehouse_location: Some(non_empty(&self.warehouse_location)),
        }
    }
}

fn non_empty(buffer: &str) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_part() -> Part {
        Part {
            id: 7,
            serial_number: 1007,
            part_name: "Bolt M6".into(),
            description: Some("Hex head".into()),
            quantity: 100,
            rate: 2.5,
            image_url: None,
            warehouse_location: Some("Aisle 3".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_part_prefills_buffers() {
        let form = PartForm::from_part(&sample_part());
        assert_eq!(form.part_name, "Bolt M6");
        assert_eq!(form.description, "Hex head");
        assert_eq!(form.quantity, "100");
        assert_eq!(form.rate, "2.5");
        assert_eq!(form.warehouse_location, "Aisle 3");
        assert_eq!(form.focused, FormField::Name);
    }

    #[test]
    fn test_unparseable_numbers_fall_back_to_zero() {
        let mut form = PartForm::new();
        form.quantity = "lots".into();
        form.rate = "".into();
        assert_eq!(form.parsed_quantity(), 0);
        assert_eq!(form.parsed_rate(), 0.0);
    }

    #[test]
    fn test_to_new_part_maps_empty_optionals_to_none() {
        let mut form = PartForm::new();
        form.part_name = "Washer".into();
        form.quantity = "10".into();
        form.rate = "0.1".into();

        let new = form.to_new_part();
        assert_eq!(new.part_name, "Washer");
        assert!(new.description.is_none());
        assert!(new.warehouse_location.is_none());
    }

    #[test]
    fn test_to_patch_writes_every_form_field() {
        let form = PartForm::from_part(&sample_part());
        let patch = form.to_patch();
        assert_eq!(patch.part_name.as_deref(), Some("Bolt M6"));
        assert_eq!(patch.quantity, Some(100));
        assert_eq!(patch.rate, Some(2.5));
        assert_eq!(patch.description, Some(Some("Hex head".into())));
        // image_url has no form buffer and must never be patched
        assert!(patch.image_url.is_none());
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = PartForm::new();
        for _ in 0..FormField::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focused, FormField::Name);

        form.focus_prev();
        assert_eq!(form.focused, FormField::Location);
    }

    #[test]
    fn test_typing_edits_focused_buffer() {
        let mut form = PartForm::new();
        form.insert_char('B');
        form.insert_char('o');
        form.focus_next();
        form.insert_char('x');
        assert_eq!(form.part_name, "Bo");
        assert_eq!(form.description, "x");

        form.backspace();
        assert_eq!(form.description, "");
    }
}
