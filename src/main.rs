// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use std::process::ExitCode;

use wbar_settings::{app_arguments, config, editor_state};

fn main() -> ExitCode {
    let args = app_arguments::get_app_arguments();

    if let Some(help_text) = args.help_text {
        println!("{}", help_text);
        return ExitCode::SUCCESS;
    }

    if let Some(error) = args.read_error {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    let config_path = editor_state::get_config_path(&args.custom_config_path);
    let state = editor_state::EditorState::load(config_path);

    if let Some(error) = &state.load_error {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    // the editor window binds to EditorState; headless, we echo the canonical
    // form of the loaded model instead
    print!(
        "{}",
        config::serialize_config(&state.preferences_record(), state.icons.entries())
    );

    ExitCode::SUCCESS
}
