use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};

use crate::config::{DEFAULT_NARROW_BREAKPOINT, Theme};
use crate::table::{LineKind, Table};
use crate::view::util::{selection_style, to_text_line};

/// Draws a [`Table`].
///
/// `block` and `style` are passed through to the container the rows are
/// drawn in. Header lines get the theme's header background; the line at
/// `cursor` gets the selection background.
pub struct TableView<'a> {
    table: &'a Table,
    theme: &'a Theme,
    block: Option<Block<'a>>,
    style: Style,
    cursor: Option<usize>,
    scroll: usize,
    narrow_breakpoint: u16,
}

impl<'a> TableView<'a> {
    pub fn new(table: &'a Table, theme: &'a Theme) -> Self {
        Self {
            table,
            theme,
            block: None,
            style: Style::default(),
            cursor: None,
            scroll: 0,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Index of the highlighted laid out line
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Number of laid out lines skipped at the top
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn narrow_breakpoint(mut self, columns: u16) -> Self {
        self.narrow_breakpoint = columns;
        self
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }

        let narrow = inner.width < self.narrow_breakpoint;
        let lines = self.table.lines(inner.width, narrow);
        let visible = lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize);

        for (y, (index, line)) in (inner.y..).zip(visible) {
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            if matches!(line.kind, LineKind::Header { .. }) {
                buf.set_style(row_area, selection_style(self.theme.header_bg));
            }
            if self.cursor == Some(index) {
                buf.set_style(row_area, selection_style(self.theme.selection_bg));
            }
            buf.set_line(inner.x, y, &to_text_line(line, self.theme), inner.width);
        }
    }
}
