use partsctl_core::Part;

/// The active modal dialog, if any.
///
/// A single tagged variant instead of independent open/closed booleans, so
/// two dialogs can never be open at once. Edit and ConfirmDelete carry the
/// row they were opened from.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    None,
    Add,
    Edit(Part),
    ConfirmDelete(Part),
}

impl Dialog {
    /// True when any dialog is showing
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::None)
    }

    /// Dialog title for the modal frame
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::None => "",
            Dialog::Add => "Add New Part",
            Dialog::Edit(_) => "Edit Part",
            Dialog::ConfirmDelete(_) => "Delete Part",
        }
    }
}

/// Which top-level element receives typed input outside of dialogs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Navigating the parts table
    Table,

    /// Typing in the search box
    Search,
}

/// Form fields in the add/edit dialog, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Quantity,
    Rate,
    Location,
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Name
    }
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Quantity,
        FormField::Rate,
        FormField::Location,
    ];

    /// Field label for the dialog
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Part Name",
            FormField::Description => "Description",
            FormField::Quantity => "Quantity",
            FormField::Rate => "Rate",
            FormField::Location => "Warehouse Location",
        }
    }

    /// Next field in tab order (wraps)
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Quantity,
            FormField::Quantity => FormField::Rate,
            FormField::Rate => FormField::Location,
            FormField::Location => FormField::Name,
        }
    }

    /// Previous field in tab order (wraps)
    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Location,
            FormField::Description => FormField::Name,
            FormField::Quantity => FormField::Description,
            FormField::Rate => FormField::Quantity,
            FormField::Location => FormField::Rate,
        }
    }
}
