use crate::color_utils;
use crate::color_utils::SwatchColor;

// the dock binary the generated command line starts with
const BASE_COMMAND: &str = "wbar";

pub const SCREEN_POSITIONS: &[&str] = &[
    "top",
    "bottom",
    "left",
    "right",
    "center",
    "bot-right",
    "bot-left",
    "top-right",
    "top-left",
];

pub const ICON_SIZES: &[&str] = &["16", "24", "32", "48", "64", "72", "96", "128"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFilterMode {
    None,
    Hovered,
    Others,
    All,
}

pub const COLOR_FILTER_MODES: &[ColorFilterMode] = &[
    ColorFilterMode::None,
    ColorFilterMode::Hovered,
    ColorFilterMode::Others,
    ColorFilterMode::All,
];

impl ColorFilterMode {
    // the command string carries the key, the editor shows the label
    pub fn key(self) -> &'static str {
        match self {
            ColorFilterMode::None => "0",
            ColorFilterMode::Hovered => "1",
            ColorFilterMode::Others => "2",
            ColorFilterMode::All => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorFilterMode::None => "none",
            ColorFilterMode::Hovered => "hovered",
            ColorFilterMode::Others => "others",
            ColorFilterMode::All => "all",
        }
    }

    pub fn from_key(key: &str) -> Option<ColorFilterMode> {
        COLOR_FILTER_MODES
            .iter()
            .find(|mode| mode.key() == key)
            .copied()
    }

    pub fn from_label(label: &str) -> Option<ColorFilterMode> {
        COLOR_FILTER_MODES
            .iter()
            .find(|mode| mode.label() == label)
            .copied()
    }
}

// a stored value plus the independent "emit this option" toggle; a disabled
// option keeps its value but stays out of the command string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionToggle<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> OptionToggle<T> {
    pub fn enabled(value: T) -> Self {
        Self {
            enabled: true,
            value,
        }
    }

    pub fn disabled(value: T) -> Self {
        Self {
            enabled: false,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOptions {
    pub icon_pressed: bool,                               // --bpress
    pub above_desktop: bool,                              // --above-desk
    pub vertical_bar: bool,                               // --vbar
    pub no_font_rendering: bool,                          // --nofont
    pub inverted_icon_growth: bool,                       // --grow
    pub no_reload: bool,                                  // --noreload
    pub screen_position: OptionToggle<String>,            // --pos
    pub border_offset: OptionToggle<i32>,                 // --offset
    pub icon_size: OptionToggle<String>,                  // --isize
    pub icon_distance: OptionToggle<i32>,                 // --idist
    pub animated_icons: OptionToggle<i32>,                // --nanim
    pub zoom_factor: OptionToggle<f64>,                   // --zoomf
    pub jump_factor: OptionToggle<f64>,                   // --jumpf
    pub double_click_ms: OptionToggle<i32>,               // --dblclk
    pub bar_alpha: OptionToggle<i32>,                     // --balfa
    pub unfocused_alpha: OptionToggle<i32>,               // --falfa
    pub color_filter_mode: OptionToggle<ColorFilterMode>, // --filter
    pub filter_color: OptionToggle<SwatchColor>,          // --fc
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            icon_pressed: true,
            above_desktop: true,
            vertical_bar: true,
            no_font_rendering: true,
            inverted_icon_growth: false,
            no_reload: false,
            screen_position: OptionToggle::enabled("right".to_string()),
            border_offset: OptionToggle::disabled(0),
            icon_size: OptionToggle::enabled("32".to_string()),
            icon_distance: OptionToggle::enabled(5),
            animated_icons: OptionToggle::enabled(3),
            zoom_factor: OptionToggle::enabled(1.8),
            jump_factor: OptionToggle::enabled(0.9),
            double_click_ms: OptionToggle::enabled(250),
            bar_alpha: OptionToggle::enabled(23),
            unfocused_alpha: OptionToggle::enabled(84),
            color_filter_mode: OptionToggle::enabled(ColorFilterMode::None),
            filter_color: OptionToggle::enabled(SwatchColor {
                alpha: 0xff,
                red: 0x00,
                green: 0xc8,
                blue: 0x00,
            }),
        }
    }
}

impl CommandOptions {
    // option order in the output is fixed; wbar accepts the flags in any
    // order but saved files stay diffable this way
    pub fn encode(&self) -> String {
        let mut cmd = String::from(BASE_COMMAND);

        append_flag(&mut cmd, "--bpress", self.icon_pressed);
        append_flag(&mut cmd, "--above-desk", self.above_desktop);
        append_flag(&mut cmd, "--vbar", self.vertical_bar);
        append_flag(&mut cmd, "--nofont", self.no_font_rendering);
        append_flag(&mut cmd, "--grow", self.inverted_icon_growth);
        append_flag(&mut cmd, "--noreload", self.no_reload);
        append_value(
            &mut cmd,
            "--pos",
            self.screen_position.enabled,
            &self.screen_position.value,
        );
        append_value(
            &mut cmd,
            "--offset",
            self.border_offset.enabled,
            &self.border_offset.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--isize",
            self.icon_size.enabled,
            &self.icon_size.value,
        );
        append_value(
            &mut cmd,
            "--idist",
            self.icon_distance.enabled,
            &self.icon_distance.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--nanim",
            self.animated_icons.enabled,
            &self.animated_icons.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--zoomf",
            self.zoom_factor.enabled,
            &format_one_decimal(self.zoom_factor.value),
        );
        append_value(
            &mut cmd,
            "--jumpf",
            self.jump_factor.enabled,
            &format_one_decimal(self.jump_factor.value),
        );
        append_value(
            &mut cmd,
            "--dblclk",
            self.double_click_ms.enabled,
            &self.double_click_ms.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--balfa",
            self.bar_alpha.enabled,
            &self.bar_alpha.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--falfa",
            self.unfocused_alpha.enabled,
            &self.unfocused_alpha.value.to_string(),
        );
        append_value(
            &mut cmd,
            "--filter",
            self.color_filter_mode.enabled,
            self.color_filter_mode.value.key(),
        );
        append_value(
            &mut cmd,
            "--fc",
            self.filter_color.enabled,
            &self.filter_color.value.to_flag_value(),
        );

        cmd
    }

    // updates the options in place from a parsed command string; options
    // whose flag is absent get disabled but keep their stored value
    pub fn apply_command_string(&mut self, cmd: &str) {
        self.icon_pressed = cmd.contains("--bpress");
        self.above_desktop = cmd.contains("--above-desk");
        self.vertical_bar = cmd.contains("--vbar");
        self.no_font_rendering = cmd.contains("--nofont");
        self.inverted_icon_growth = cmd.contains("--grow");
        self.no_reload = cmd.contains("--noreload");

        update_choice_option(&mut self.screen_position, cmd, "--pos", SCREEN_POSITIONS);
        update_int_option(&mut self.border_offset, cmd, "--offset");
        update_choice_option(&mut self.icon_size, cmd, "--isize", ICON_SIZES);
        update_int_option(&mut self.icon_distance, cmd, "--idist");
        update_int_option(&mut self.animated_icons, cmd, "--nanim");
        update_float_option(&mut self.zoom_factor, cmd, "--zoomf");
        update_float_option(&mut self.jump_factor, cmd, "--jumpf");
        update_int_option(&mut self.double_click_ms, cmd, "--dblclk");
        update_int_option(&mut self.bar_alpha, cmd, "--balfa");
        update_int_option(&mut self.unfocused_alpha, cmd, "--falfa");

        if let Some(key) = flag_value(cmd, "--filter") {
            self.color_filter_mode.enabled = true;
            self.color_filter_mode.value = match ColorFilterMode::from_key(&key) {
                Some(mode) => mode,
                None => panic!("unknown color filter key '{}'", key),
            };
        } else {
            self.color_filter_mode.enabled = false;
        }

        if let Some(value) = flag_value(cmd, "--fc") {
            self.filter_color.enabled = true;
            let normalized = color_utils::normalize_color_value(&value);
            // a value that is not a color leaves the stored swatch untouched
            if let Some(color) = SwatchColor::from_hex_argb(&normalized) {
                self.filter_color.value = color;
            }
        } else {
            self.filter_color.enabled = false;
        }
    }
}

fn append_flag(cmd: &mut String, flag: &str, enabled: bool) {
    if enabled {
        cmd.push(' ');
        cmd.push_str(flag);
    }
}

fn append_value(cmd: &mut String, flag: &str, enabled: bool, value: &str) {
    if enabled {
        cmd.push(' ');
        cmd.push_str(flag);
        cmd.push(' ');
        cmd.push_str(value);
    }
}

// factor values step by 0.1 in the editor, so one decimal is the native form
fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

// flags are matched by plain substring search, not token boundaries; no
// token in the fixed set is a substring of another, so this never misparses
// here, but it would for a flag set without that property
fn flag_value(cmd: &str, flag: &str) -> Option<String> {
    let position = cmd.find(flag)?;
    let rest = &cmd[position + flag.len()..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    Some(rest.split(' ').next().unwrap_or("").to_string())
}

fn update_choice_option(
    option: &mut OptionToggle<String>,
    cmd: &str,
    flag: &str,
    choices: &[&str],
) {
    if let Some(value) = flag_value(cmd, flag) {
        option.enabled = true;
        // a value outside the fixed choice list leaves the stored choice as is
        if choices.contains(&value.as_str()) {
            option.value = value;
        }
    } else {
        option.enabled = false;
    }
}

fn update_int_option(option: &mut OptionToggle<i32>, cmd: &str, flag: &str) {
    if let Some(value) = flag_value(cmd, flag) {
        option.enabled = true;
        option.value = match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => panic!("value '{}' of {} is not an integer", value, flag),
        };
    } else {
        option.enabled = false;
    }
}

fn update_float_option(option: &mut OptionToggle<f64>, cmd: &str, flag: &str) {
    if let Some(value) = flag_value(cmd, flag) {
        option.enabled = true;
        option.value = match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => panic!("value '{}' of {} is not a number", value, flag),
        };
    } else {
        option.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_enabled_options() -> CommandOptions {
        CommandOptions {
            icon_pressed: true,
            above_desktop: true,
            vertical_bar: true,
            no_font_rendering: true,
            inverted_icon_growth: true,
            no_reload: true,
            screen_position: OptionToggle::enabled("bot-left".to_string()),
            border_offset: OptionToggle::enabled(12),
            icon_size: OptionToggle::enabled("48".to_string()),
            icon_distance: OptionToggle::enabled(7),
            animated_icons: OptionToggle::enabled(5),
            zoom_factor: OptionToggle::enabled(2.1),
            jump_factor: OptionToggle::enabled(0.4),
            double_click_ms: OptionToggle::enabled(175),
            bar_alpha: OptionToggle::enabled(40),
            unfocused_alpha: OptionToggle::enabled(90),
            color_filter_mode: OptionToggle::enabled(ColorFilterMode::Others),
            filter_color: OptionToggle::enabled(SwatchColor {
                alpha: 0x80,
                red: 0x11,
                green: 0x22,
                blue: 0x33,
            }),
        }
    }

    #[test]
    fn test_default_options_encode_in_the_fixed_order() {
        let cmd = CommandOptions::default().encode();

        assert_eq!(
            cmd,
            "wbar --bpress --above-desk --vbar --nofont --pos right --isize 32 \
             --idist 5 --nanim 3 --zoomf 1.8 --jumpf 0.9 --dblclk 250 --balfa 23 \
             --falfa 84 --filter 0 --fc 0xff00c800"
        );
    }

    #[test]
    fn test_all_enabled_options_decode_back_to_the_same_options() {
        let options = all_enabled_options();

        let mut decoded = CommandOptions::default();
        decoded.apply_command_string(&options.encode());

        assert_eq!(decoded, options);
    }

    #[test]
    fn test_disabled_option_flags_never_appear_in_the_encoded_string() {
        let options = CommandOptions {
            icon_pressed: false,
            above_desktop: false,
            vertical_bar: false,
            no_font_rendering: false,
            inverted_icon_growth: false,
            no_reload: false,
            screen_position: OptionToggle::disabled("right".to_string()),
            border_offset: OptionToggle::disabled(10),
            icon_size: OptionToggle::disabled("32".to_string()),
            icon_distance: OptionToggle::disabled(5),
            animated_icons: OptionToggle::disabled(3),
            zoom_factor: OptionToggle::disabled(1.8),
            jump_factor: OptionToggle::disabled(0.9),
            double_click_ms: OptionToggle::disabled(250),
            bar_alpha: OptionToggle::disabled(23),
            unfocused_alpha: OptionToggle::disabled(84),
            color_filter_mode: OptionToggle::disabled(ColorFilterMode::All),
            filter_color: OptionToggle::disabled(SwatchColor {
                alpha: 0xff,
                red: 0x00,
                green: 0xc8,
                blue: 0x00,
            }),
        };

        let cmd = options.encode();

        assert_eq!(cmd, "wbar");
        for flag in [
            "--bpress",
            "--above-desk",
            "--vbar",
            "--nofont",
            "--grow",
            "--noreload",
            "--pos",
            "--offset",
            "--isize",
            "--idist",
            "--nanim",
            "--zoomf",
            "--jumpf",
            "--dblclk",
            "--balfa",
            "--falfa",
            "--filter",
            "--fc",
        ] {
            assert!(!cmd.contains(flag));
        }
    }

    #[test]
    fn test_decoding_a_sparse_command_string_disables_the_other_options() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --bpress --isize 32");

        assert!(options.icon_pressed);
        assert!(options.icon_size.enabled);
        assert_eq!(options.icon_size.value, "32");

        assert!(!options.above_desktop);
        assert!(!options.vertical_bar);
        assert!(!options.no_font_rendering);
        assert!(!options.inverted_icon_growth);
        assert!(!options.no_reload);
        assert!(!options.screen_position.enabled);
        assert!(!options.border_offset.enabled);
        assert!(!options.icon_distance.enabled);
        assert!(!options.animated_icons.enabled);
        assert!(!options.zoom_factor.enabled);
        assert!(!options.jump_factor.enabled);
        assert!(!options.double_click_ms.enabled);
        assert!(!options.bar_alpha.enabled);
        assert!(!options.unfocused_alpha.enabled);
        assert!(!options.color_filter_mode.enabled);
        assert!(!options.filter_color.enabled);
    }

    #[test]
    fn test_absent_flag_disables_the_option_but_keeps_its_value() {
        let mut options = CommandOptions::default();
        options.screen_position = OptionToggle::enabled("bot-right".to_string());
        options.border_offset = OptionToggle::enabled(17);

        options.apply_command_string("wbar --vbar");

        assert!(!options.screen_position.enabled);
        assert_eq!(options.screen_position.value, "bot-right");
        assert!(!options.border_offset.enabled);
        assert_eq!(options.border_offset.value, 17);
    }

    #[test]
    fn test_choice_value_outside_the_fixed_list_keeps_the_stored_choice() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --pos sideways");

        assert!(options.screen_position.enabled);
        assert_eq!(options.screen_position.value, "right");
    }

    #[test]
    fn test_quoted_0x_color_value_updates_the_swatch() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --fc '0x80112233'");

        assert!(options.filter_color.enabled);
        assert_eq!(
            options.filter_color.value,
            SwatchColor {
                alpha: 0x80,
                red: 0x11,
                green: 0x22,
                blue: 0x33,
            }
        );
    }

    #[test]
    fn test_malformed_color_value_keeps_the_stored_swatch() {
        let mut options = CommandOptions::default();
        let stored = options.filter_color.value;

        options.apply_command_string("wbar --fc 0xnotacolor");

        assert!(options.filter_color.enabled);
        assert_eq!(options.filter_color.value, stored);
    }

    #[test]
    fn test_filter_key_decodes_to_its_display_label() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --filter 2");

        assert!(options.color_filter_mode.enabled);
        assert_eq!(options.color_filter_mode.value, ColorFilterMode::Others);
        assert_eq!(options.color_filter_mode.value.label(), "others");
    }

    #[test]
    #[should_panic(expected = "unknown color filter key")]
    fn test_unknown_filter_key_aborts() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --filter 9");
    }

    #[test]
    #[should_panic(expected = "is not an integer")]
    fn test_non_numeric_offset_value_aborts() {
        let mut options = CommandOptions::default();

        options.apply_command_string("wbar --offset wide");
    }

    #[test]
    fn test_whole_factor_values_encode_with_one_decimal() {
        let mut options = CommandOptions::default();
        options.zoom_factor = OptionToggle::enabled(2.0);

        let cmd = options.encode();

        assert!(cmd.contains("--zoomf 2.0"));
    }
}
