use std::path::{Path, PathBuf};

use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use super::theme::Theme;
use crate::section::SyncPolicy;

/// Viewport width in columns below which optional cells and pills are hidden.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 45;

/// Parse a color string into a ratatui Color
/// Supports: named colors, hex (#ff0000, #f00), rgb (rgb(255, 0, 0)), indexed (0-255)
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    // Named colors
    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightyellow" => return Some(Color::LightYellow),
        "lightblue" => return Some(Color::LightBlue),
        "lightmagenta" => return Some(Color::LightMagenta),
        "lightcyan" => return Some(Color::LightCyan),
        "white" => return Some(Color::White),
        "reset" => return Some(Color::Reset),
        _ => {}
    }

    // Hex color: #rrggbb or #rgb
    if let Some(hex) = s.strip_prefix('#').filter(|hex| hex.is_ascii()) {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // RGB format: rgb(r, g, b)
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() == 3 {
            let r: u8 = parts[0].trim().parse().ok()?;
            let g: u8 = parts[1].trim().parse().ok()?;
            let b: u8 = parts[2].trim().parse().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // ANSI 256 color: just a number
    if let Ok(n) = s.parse::<u8>() {
        return Some(Color::Indexed(n));
    }

    None
}

/// Color overrides in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub section_header: Option<String>,
    pub header_bg: Option<String>,
    pub indicator: Option<String>,
    pub add_control: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub icon: Option<String>,
    pub border: Option<String>,
    pub selection_bg: Option<String>,
}

/// Main config structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub colors: ColorOverrides,

    /// When a section re-applies its default-open hint
    #[serde(default, alias = "sync_policy")]
    pub sync_policy: SyncPolicy,

    #[serde(default = "default_narrow_breakpoint", alias = "narrow_breakpoint")]
    pub narrow_breakpoint: u16,

    #[serde(default = "default_log_level", alias = "log_level")]
    pub log_level: String,
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_narrow_breakpoint() -> u16 {
    DEFAULT_NARROW_BREAKPOINT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            colors: ColorOverrides::default(),
            sync_policy: SyncPolicy::default(),
            narrow_breakpoint: default_narrow_breakpoint(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("foldtable").join("config.toml"))
    }

    /// Load config from the default path, or return default config
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Log level filter, `Info` when the configured name is not recognised
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Resolve the theme with overrides applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme).unwrap_or_else(Theme::default_theme);

        // Apply overrides using a macro to reduce repetition
        macro_rules! apply_override {
            ($field:ident) => {
                if let Some(ref color_str) = self.colors.$field {
                    if let Some(color) = parse_color(color_str) {
                        theme.$field = color;
                    }
                }
            };
        }

        apply_override!(section_header);
        apply_override!(header_bg);
        apply_override!(indicator);
        apply_override!(add_control);
        apply_override!(text);
        apply_override!(text_muted);
        apply_override!(icon);
        apply_override!(border);
        apply_override!(selection_bg);

        theme
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#00ff00"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Green"), Some(Color::Green));
        assert_eq!(parse_color("dark-gray"), None);
    }

    #[test]
    fn test_parse_rgb_color() {
        assert_eq!(
            parse_color("rgb(100, 150, 200)"),
            Some(Color::Rgb(100, 150, 200))
        );
        assert_eq!(parse_color("rgb(0,0,0)"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_color("rgb(0,0)"), None);
    }

    #[test]
    fn test_parse_indexed_color() {
        assert_eq!(parse_color("196"), Some(Color::Indexed(196)));
    }

    #[test]
    fn test_config_with_overrides() {
        let toml_str = r##"
            theme = "default"
            [colors]
            section_header = "#ff0000"
            header_bg = "not a color"
        "##;
        let config: Config = toml::from_str(toml_str).unwrap();
        let theme = config.resolve_theme();
        assert_eq!(theme.section_header, Color::Rgb(255, 0, 0));
        // Unparseable and missing overrides keep the theme's color
        assert_eq!(theme.header_bg, Theme::default().header_bg);
        assert_eq!(theme.add_control, Color::Cyan);
    }

    #[test]
    fn test_config_with_theme() {
        let toml_str = r#"
            theme = "catppuccin-frappe"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let theme = config.resolve_theme();
        assert_eq!(theme.section_header, Color::Rgb(229, 200, 144));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config: Config = toml::from_str(r#"theme = "solarized""#).unwrap();
        assert_eq!(config.resolve_theme(), Theme::default());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.resolve_theme().section_header, Color::Yellow);
        assert_eq!(config.sync_policy, SyncPolicy::Always);
        assert_eq!(config.narrow_breakpoint, DEFAULT_NARROW_BREAKPOINT);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_table_settings() {
        let toml_str = r#"
            sync-policy = "on-change"
            narrow-breakpoint = 60
            log-level = "debug"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sync_policy, SyncPolicy::OnChange);
        assert_eq!(config.narrow_breakpoint, 60);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_snake_case_keys_are_accepted() {
        let toml_str = r#"
            sync_policy = "on-mount"
            log_level = "nonsense"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sync_policy, SyncPolicy::OnMount);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"catppuccin-mocha\"").unwrap();
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_from_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = ").unwrap();
        let result = Config::load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
