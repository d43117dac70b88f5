use ratatui::style::Color;

/// Semantic colour roles a table is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Section header colors
    pub section_header: Color,
    pub header_bg: Color,
    pub indicator: Color,
    pub add_control: Color,

    // Cell content colors
    pub text: Color,
    pub text_muted: Color,
    pub icon: Color,

    // Pill outline
    pub border: Color,

    // Selection
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Plain ANSI colors that work on any terminal
    pub fn default_theme() -> Self {
        Self {
            section_header: Color::Yellow,
            header_bg: Color::Rgb(40, 40, 52),
            indicator: Color::DarkGray,
            add_control: Color::Cyan,
            text: Color::Reset,
            text_muted: Color::Gray,
            icon: Color::Blue,
            border: Color::DarkGray,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Catppuccin Frappe theme
    pub fn catppuccin_frappe() -> Self {
        Self {
            section_header: Color::Rgb(229, 200, 144), // Yellow
            header_bg: Color::Rgb(41, 44, 60),         // Mantle
            indicator: Color::Rgb(115, 121, 148),      // Overlay0
            add_control: Color::Rgb(166, 209, 137),    // Green
            text: Color::Rgb(198, 208, 245),           // Text
            text_muted: Color::Rgb(165, 173, 206),     // Subtext0
            icon: Color::Rgb(140, 170, 238),           // Blue
            border: Color::Rgb(81, 87, 109),           // Surface1
            selection_bg: Color::Rgb(65, 69, 89),      // Surface0
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            section_header: Color::Rgb(249, 226, 175), // Yellow
            header_bg: Color::Rgb(24, 24, 37),         // Mantle
            indicator: Color::Rgb(108, 112, 134),      // Overlay0
            add_control: Color::Rgb(166, 227, 161),    // Green
            text: Color::Rgb(205, 214, 244),           // Text
            text_muted: Color::Rgb(166, 173, 200),     // Subtext0
            icon: Color::Rgb(137, 180, 250),           // Blue
            border: Color::Rgb(69, 71, 90),            // Surface1
            selection_bg: Color::Rgb(49, 50, 68),      // Surface0
        }
    }

    /// Get a built-in theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin-frappe" => Some(Self::catppuccin_frappe()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.section_header, Color::Yellow);
        assert_eq!(theme.add_control, Color::Cyan);
    }

    #[test]
    fn test_from_name() {
        assert!(Theme::from_name("default").is_some());
        assert!(Theme::from_name("catppuccin-frappe").is_some());
        assert!(Theme::from_name("catppuccin_frappe").is_some());
        assert!(Theme::from_name("Catppuccin-Mocha").is_some());
        assert!(Theme::from_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_colors() {
        let theme = Theme::catppuccin_mocha();
        assert_eq!(theme.section_header, Color::Rgb(249, 226, 175));
        assert_eq!(theme.selection_bg, Color::Rgb(49, 50, 68));
    }
}
