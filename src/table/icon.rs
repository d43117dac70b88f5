use std::collections::HashMap;

use lazy_static::lazy_static;

/// Drawn for icon names with no known glyph.
pub const FALLBACK_GLYPH: char = '•';

lazy_static! {
    /// Terminal stand-ins for icon font names, keyed without the `fa-` prefix.
    static ref GLYPHS: HashMap<&'static str, char> = HashMap::from([
        ("plus", '+'),
        ("minus", '-'),
        ("check", '✓'),
        ("times", '✗'),
        ("xmark", '✗'),
        ("star", '★'),
        ("heart", '♥'),
        ("circle", '●'),
        ("square", '■'),
        ("folder", '▤'),
        ("file", '▯'),
        ("apple-alt", '●'),
        ("apple-whole", '●'),
        ("lemon", '◐'),
        ("carrot", '▼'),
        ("leaf", '❦'),
        ("seedling", '❦'),
        ("box", '▣'),
        ("tag", '⌂'),
        ("clock", '◷'),
        ("calendar", '▦'),
        ("user", '☺'),
        ("bolt", '⚡'),
        ("flag", '⚑'),
        ("music", '♪'),
        ("sun", '☀'),
        ("cloud", '☁'),
        ("arrow-right", '→'),
        ("arrow-left", '←'),
        ("arrow-up", '↑'),
        ("arrow-down", '↓'),
    ]);
}

/// An icon made of one or more icon class lists, e.g. `"fas fa-star"`.
///
/// Each class list becomes one glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Icon {
    pub icons: Vec<String>,
}

impl Icon {
    pub fn new<I, S>(icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icons: icons.into_iter().map(Into::into).collect(),
        }
    }

    pub fn glyphs(&self) -> String {
        self.icons.iter().map(|icon| glyph_for(icon)).collect()
    }
}

/// Resolves a class list such as `"far fa-plus"` to its glyph.
///
/// Style prefixes (`fas`, `far`, `fa-solid`, ...) are skipped; the first
/// name with a known glyph wins.
pub fn glyph_for(class_list: &str) -> char {
    class_list
        .split_whitespace()
        .filter_map(|class| class.strip_prefix("fa-"))
        .find_map(|name| GLYPHS.get(name).copied())
        .unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_for_known_icon() {
        assert_eq!(glyph_for("far fa-plus"), '+');
        assert_eq!(glyph_for("fa-solid fa-star"), '★');
    }

    #[test]
    fn test_glyph_for_unknown_icon_falls_back() {
        assert_eq!(glyph_for("fas fa-does-not-exist"), FALLBACK_GLYPH);
        assert_eq!(glyph_for(""), FALLBACK_GLYPH);
    }

    #[test]
    fn test_icon_glyphs_one_per_class_list() {
        let icon = Icon::new(["fas fa-circle", "fas fa-check"]);
        assert_eq!(icon.glyphs(), "●✓");
        assert_eq!(Icon::default().glyphs(), "");
    }
}
