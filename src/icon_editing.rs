// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::config::IconEntry;

pub const EMPTY_FIELDS_NOTICE: &str = "Some fields are empty";

// what the icon dialog resolves to once it is closed
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Accepted(IconEntry),
    Cancelled,
}

// edit state of the icon dialog: three free-text fields, prefilled when an
// existing entry is being edited
#[derive(Debug, Clone, Default)]
pub struct IconEditForm {
    pub title_input: String,
    pub icon_input: String,
    pub command_input: String,
    pub validation_error: Option<String>,
}

impl IconEditForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_entry(entry: &IconEntry) -> Self {
        Self {
            title_input: entry.title().to_string(),
            icon_input: entry.icon().to_string(),
            command_input: entry.command().to_string(),
            validation_error: None,
        }
    }

    // the icon file chooser hands back an absolute path; it is stored as-is
    pub fn set_icon_path(&mut self, path: String) {
        self.icon_input = path;
    }

    pub fn set_command_path(&mut self, path: String) {
        self.command_input = path;
    }

    // accepting with an empty field is rejected with a blocking notice and
    // the dialog stays open for correction
    pub fn try_accept(&mut self) -> Option<IconEntry> {
        if self.title_input.is_empty()
            || self.icon_input.is_empty()
            || self.command_input.is_empty()
        {
            self.validation_error = Some(EMPTY_FIELDS_NOTICE.to_string());
            return None;
        }

        self.validation_error = None;
        Some(IconEntry::new(
            self.icon_input.clone(),
            self.command_input.clone(),
            self.title_input.clone(),
        ))
    }
}
