use std::path::Path;

// The config file is a sequence of record blocks. Each block is three
// prefixed lines (icon path, command, title) closed by a blank line; the
// first block holds the dock-wide preferences, the rest one dock icon each.
// The two record types share the field names but not their meaning: the
// preferences block stores the full flag string in `command` and the
// font-path/size composite in `title`.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferencesRecord {
    pub icon: Option<String>,
    pub command: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconEntry {
    pub icon: Option<String>,
    pub command: Option<String>,
    pub title: Option<String>,
}

impl PreferencesRecord {
    pub fn new(icon: String, command: String, title: String) -> Self {
        Self {
            icon: Some(icon),
            command: Some(command),
            title: Some(title),
        }
    }

    pub fn icon(&self) -> &str {
        field_or_abort(&self.icon, "icon")
    }

    pub fn command(&self) -> &str {
        field_or_abort(&self.command, "command")
    }

    pub fn title(&self) -> &str {
        field_or_abort(&self.title, "title")
    }
}

impl IconEntry {
    pub fn new(icon: String, command: String, title: String) -> Self {
        Self {
            icon: Some(icon),
            command: Some(command),
            title: Some(title),
        }
    }

    pub fn icon(&self) -> &str {
        field_or_abort(&self.icon, "icon")
    }

    pub fn command(&self) -> &str {
        field_or_abort(&self.command, "command")
    }

    pub fn title(&self) -> &str {
        field_or_abort(&self.title, "title")
    }
}

// a record block is allowed to miss a field; touching the missing field is
// a hard stop, never a silent default
fn field_or_abort<'a>(field: &'a Option<String>, name: &str) -> &'a str {
    match field {
        Some(value) => value,
        None => panic!("config record has no '{}' field", name),
    }
}

#[derive(Default)]
struct RecordDraft {
    icon: Option<String>,
    command: Option<String>,
    title: Option<String>,
}

impl RecordDraft {
    fn is_empty(&self) -> bool {
        self.icon.is_none() && self.command.is_none() && self.title.is_none()
    }
}

pub fn parse_config(text: &str) -> (PreferencesRecord, Vec<IconEntry>) {
    let mut records: Vec<RecordDraft> = Vec::new();
    let mut draft = RecordDraft::default();

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with('#') {
            continue;
        }

        if let Some(value) = line.strip_prefix("i: ") {
            draft.icon = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("c: ") {
            draft.command = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("t: ") {
            draft.title = Some(value.to_string());
        } else if !draft.is_empty() {
            records.push(std::mem::take(&mut draft));
        }
    }
    // a draft still open at the end of input is discarded; saved files close
    // every block with a blank line

    if records.is_empty() {
        panic!("config file contains no records");
    }

    let preferences = records.remove(0);
    let preferences = PreferencesRecord {
        icon: preferences.icon,
        command: preferences.command,
        title: preferences.title,
    };

    let icons = records
        .into_iter()
        .map(|record| IconEntry {
            icon: record.icon,
            command: record.command,
            title: record.title,
        })
        .collect();

    (preferences, icons)
}

pub fn serialize_config(preferences: &PreferencesRecord, icons: &[IconEntry]) -> String {
    let mut text = String::new();

    write_record_block(
        &mut text,
        preferences.icon(),
        preferences.command(),
        preferences.title(),
    );

    for entry in icons {
        write_record_block(&mut text, entry.icon(), entry.command(), entry.title());
    }

    text
}

fn write_record_block(text: &mut String, icon: &str, command: &str, title: &str) {
    text.push_str("i: ");
    text.push_str(icon);
    text.push_str("\nc: ");
    text.push_str(command);
    text.push_str("\nt: ");
    text.push_str(title);
    text.push_str("\n\n");
}

// a missing file is not an error, the editor just keeps its defaults
pub fn load_config(path: &Path) -> Result<Option<(PreferencesRecord, Vec<IconEntry>)>, String> {
    if !path.exists() {
        return Ok(None);
    }

    let text = std::fs::read_to_string(path).map_err(|err| {
        format!(
            "Config file '{}' can't be read.\nMake sure you have read rights to that file.\nError: {}",
            path.display(),
            err
        )
    })?;

    Ok(Some(parse_config(&text)))
}

// whole-file overwrite, no temp-file-and-rename
pub fn save_config(
    path: &Path,
    preferences: &PreferencesRecord,
    icons: &[IconEntry],
) -> Result<(), String> {
    let text = serialize_config(preferences, icons);
    std::fs::write(path, text).map_err(|err| {
        format!(
            "Can't write config file '{}', error {}",
            path.display(),
            err
        )
    })
}
