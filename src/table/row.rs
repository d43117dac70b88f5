use ratatui::text::Span;

use super::{Icon, Pill};

/// A piece of cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(Span<'static>),
    Icon(Icon),
    Pill(Pill),
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(Span::raw(text.to_string()))
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Inline::Text(Span::raw(text))
    }
}

impl From<Span<'static>> for Inline {
    fn from(span: Span<'static>) -> Self {
        Inline::Text(span)
    }
}

impl From<Icon> for Inline {
    fn from(icon: Icon) -> Self {
        Inline::Icon(icon)
    }
}

impl From<Pill> for Inline {
    fn from(pill: Pill) -> Self {
        Inline::Pill(pill)
    }
}

/// One cell of a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub content: Vec<Inline>,
    /// Fixed width in columns. Without it the cell is as wide as its content.
    pub size: Option<u16>,
    /// Allows the cell to shrink when the row does not fit.
    pub long: bool,
    /// Hidden when the viewport is narrow.
    pub optional: bool,
}

impl Cell {
    pub fn new(content: impl Into<Inline>) -> Self {
        Self {
            content: vec![content.into()],
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(mut self, content: impl Into<Inline>) -> Self {
        self.content.push(content.into());
        self
    }

    pub fn size(mut self, columns: u16) -> Self {
        self.size = Some(columns);
        self
    }

    pub fn long(mut self) -> Self {
        self.long = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A horizontal run of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }
}
