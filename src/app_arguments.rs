// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

#[derive(Default, Clone)]
pub struct AppArguments {
    pub custom_config_path: Option<String>,
    pub help_text: Option<String>,
    pub read_error: Option<String>,
}

struct ArgumentDefinition {
    name: &'static str,
    short_name: &'static str,
    syntax: &'static str,
    description: &'static str,
    number_of_args: usize,
}

const SUPPORTED_ARGS: &[ArgumentDefinition] = &[
    ArgumentDefinition {
        name: "--help",
        short_name: "-h",
        syntax: "-h|--help",
        description: "Show this help and exit.",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--config",
        short_name: "-c",
        syntax: "-c|--config <wbarconfig>",
        description: "Pass the wbar config file.",
        number_of_args: 1,
    },
];

pub fn get_app_arguments() -> AppArguments {
    let args: Vec<String> = std::env::args().collect();
    read_arguments(&args)
}

pub fn read_arguments(args: &[String]) -> AppArguments {
    let program_name = args
        .first()
        .map(|path| get_file_name(path))
        .unwrap_or_default();

    let mut custom_config_path = None;

    let mut i: usize = 1;
    while i < args.len() {
        let arg = &args[i];

        let found_arg = SUPPORTED_ARGS
            .iter()
            .find(|supported_arg| supported_arg.name == arg || supported_arg.short_name == arg);

        let Some(found_arg) = found_arg else {
            return AppArguments {
                custom_config_path: None,
                help_text: None,
                read_error: Some(format!("{}: Unspecified option. Aborting.", program_name)),
            };
        };

        if found_arg.number_of_args > 0 && i + found_arg.number_of_args >= args.len() {
            return AppArguments {
                custom_config_path: None,
                help_text: None,
                read_error: Some(format!(
                    "{}: Not enough arguments for {}. Aborting.",
                    program_name, arg
                )),
            };
        }

        if found_arg.name == "--help" {
            return AppArguments {
                custom_config_path: None,
                help_text: Some(get_help_text(&program_name)),
                read_error: None,
            };
        }
        if found_arg.name == "--config" {
            custom_config_path = Some(args[i + 1].clone());
        }

        i += 1 + found_arg.number_of_args;
    }

    AppArguments {
        custom_config_path,
        help_text: None,
        read_error: None,
    }
}

fn get_help_text(program_name: &str) -> String {
    let mut help_text = "Editor for wbar\n".to_string();
    help_text.push_str(&format!("Version: {}\n", env!("CARGO_PKG_VERSION")));
    help_text.push_str(&format!("Usage: {} [options]\n", program_name));
    help_text.push_str("\n");
    help_text.push_str("Options:\n");
    let mut max_syntax_len = 0;
    for arg in SUPPORTED_ARGS {
        max_syntax_len = max_syntax_len.max(arg.syntax.len());
    }
    for arg in SUPPORTED_ARGS {
        help_text.push_str(arg.syntax);
        for _ in 0..max_syntax_len - arg.syntax.len() + 4 {
            help_text.push(' ');
        }
        help_text.push_str(arg.description);
        help_text.push_str("\n");
    }
    help_text
}

fn get_file_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
