// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use std::path::PathBuf;

use crate::command_options::CommandOptions;
use crate::config;
use crate::config::{IconEntry, PreferencesRecord};
use crate::font_spec;
use crate::icon_editing::EditOutcome;
use crate::icon_list::IconList;

const DEFAULT_CONFIG_NAME: &str = ".wbar";

pub const DEFAULT_FONT_PATH: &str =
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf";
pub const DEFAULT_FONT_SIZE: i32 = 12;
pub const FONT_SIZE_MIN: i32 = 6;
pub const FONT_SIZE_MAX: i32 = 96;
pub const DEFAULT_BAR_IMAGE: &str = "/usr/share/pixmaps/wbar/dock.png";

// everything one open editor window binds to
pub struct EditorState {
    pub config_path: PathBuf,
    pub bar_image: String,
    pub font_path: String,
    pub font_size: i32,
    pub options: CommandOptions,
    pub icons: IconList,
    pub load_error: Option<String>,
    pub status_message: Option<String>,
}

pub fn get_config_path(custom_config_path: &Option<String>) -> PathBuf {
    if let Some(config_path) = custom_config_path {
        PathBuf::from(config_path)
    } else {
        dirs::home_dir().unwrap_or_default().join(DEFAULT_CONFIG_NAME)
    }
}

impl EditorState {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            bar_image: DEFAULT_BAR_IMAGE.to_string(),
            font_path: DEFAULT_FONT_PATH.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            options: CommandOptions::default(),
            icons: IconList::default(),
            load_error: None,
            status_message: None,
        }
    }

    pub fn load(config_path: PathBuf) -> Self {
        let mut state = EditorState::new(config_path);

        match config::load_config(&state.config_path) {
            Ok(Some((preferences, icons))) => state.populate_from_records(&preferences, icons),
            // no config file yet, the defaults stay as they are
            Ok(None) => {}
            Err(error) => state.load_error = Some(error),
        }

        state
    }

    fn populate_from_records(&mut self, preferences: &PreferencesRecord, icons: Vec<IconEntry>) {
        self.bar_image = preferences.icon().to_string();

        let (font_path_without_ext, font_size) = font_spec::split_font_spec(preferences.title());
        // when no font file matches the extension-less path, the default
        // font stays in place
        if let Some(font_path) = font_spec::resolve_font_file(&font_path_without_ext) {
            self.font_path = font_path;
        }
        self.font_size = font_size;

        self.options.apply_command_string(preferences.command());

        self.icons = IconList::new(icons);
    }

    // the preferences block rebuilt from the current editor values
    pub fn preferences_record(&self) -> PreferencesRecord {
        PreferencesRecord::new(
            self.bar_image.clone(),
            self.options.encode(),
            font_spec::encode_font_spec(&self.font_path, self.font_size),
        )
    }

    pub fn save(&mut self) -> Result<(), String> {
        let preferences = self.preferences_record();
        config::save_config(&self.config_path, &preferences, self.icons.entries())?;

        self.status_message = Some(format!(
            "Saved in '{}'. Right-click on wbar to reload.",
            self.config_path.display()
        ));
        Ok(())
    }

    pub fn add_icon(&mut self, outcome: EditOutcome) {
        if let EditOutcome::Accepted(entry) = outcome {
            self.icons.append(entry);
        }
    }

    pub fn apply_icon_edit(&mut self, outcome: EditOutcome) {
        if let EditOutcome::Accepted(entry) = outcome {
            self.icons.replace_selected(entry);
        }
    }
}
