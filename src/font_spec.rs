// The preferences title field packs the font as
// "<font-path-without-extension>/<size>", e.g.
// "/usr/share/fonts/truetype/liberation/LiberationMono-Regular/12".

pub const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf"];

pub fn encode_font_spec(font_path: &str, font_size: i32) -> String {
    format!("{}/{}", strip_extension(font_path), font_size)
}

// splits the packed value back into the extension-less path and the size;
// a non-numeric size is a hard stop
pub fn split_font_spec(title: &str) -> (String, i32) {
    let (path, size_text) = match title.rfind('/') {
        Some(idx) => (&title[..idx], &title[idx + 1..]),
        None => ("", title),
    };

    let size = match size_text.parse() {
        Ok(size) => size,
        Err(_) => panic!("font size '{}' in the config is not an integer", size_text),
    };

    (path.to_string(), size)
}

// tries the known font extensions against the filesystem
pub fn resolve_font_file(font_path_without_ext: &str) -> Option<String> {
    for ext in FONT_EXTENSIONS {
        let candidate = format!("{}{}", font_path_without_ext, ext);
        if std::path::Path::new(&candidate).exists() {
            return Some(candidate);
        }
    }
    None
}

// drops the final extension of the last path component only
fn strip_extension(path: &str) -> &str {
    let component_start = path.rfind('/').map(|idx| idx + 1).unwrap_or(0);
    match path[component_start..].rfind('.') {
        Some(dot_idx) if dot_idx > 0 => &path[..component_start + dot_idx],
        _ => path,
    }
}
