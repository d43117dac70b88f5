//! Flattens a node tree into the terminal lines a table occupies.
//!
//! Layout is pure: it depends on the nodes, a snapshot of the visibility
//! map, the available width and the narrow-viewport flag. Both drawing and
//! mouse hit testing work from its output, so they always agree.

use std::ops::Range;

use ratatui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Cell, Inline, Node, Row};
use crate::section::{Body, Section};
use crate::store::{SectionId, VisibilityMap};

/// Columns each nesting level is indented by.
pub const INDENT: usize = 2;
/// Columns of padding in front of every cell.
pub const CELL_PADDING: usize = 1;
pub const ADD_CONTROL: &str = "[+]";
pub const ELLIPSIS: char = '…';

/// Use '>' when collapsed, '∨' when expanded
pub fn indicator(open: bool) -> &'static str {
    if open { "∨" } else { ">" }
}

/// Semantic role of a segment, mapped to a theme colour when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Plain,
    Muted,
    Border,
    Header,
    Indicator,
    Icon,
    AddControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub role: Role,
    /// Patched over the role's colour.
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            style: Style::default(),
        }
    }

    fn styled(text: impl Into<String>, role: Role, style: Style) -> Self {
        Self {
            text: text.into(),
            role,
            style,
        }
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Child indices leading from the root nodes to a section.
pub type SectionPath = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Header {
        id: SectionId,
        /// Where the section sits in the tree, unique even when titles repeat.
        path: SectionPath,
        open: bool,
        /// Columns occupied by the "add" control.
        add_control: Range<u16>,
    },
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutLine {
    pub kind: LineKind,
    pub depth: usize,
    pub segments: Vec<Segment>,
}

impl LaidOutLine {
    pub fn section_id(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Header { id, .. } => Some(id),
            LineKind::Row => None,
        }
    }

    pub fn width(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Lays out `nodes` into lines. Closed sections contribute only their header.
pub fn lay_out(
    nodes: &[Node],
    visibility: &VisibilityMap,
    width: u16,
    narrow: bool,
) -> Vec<LaidOutLine> {
    let mut lines = Vec::new();
    walk(nodes, &mut Vec::new(), visibility, width as usize, narrow, &mut lines);
    lines
}

fn walk(
    nodes: &[Node],
    path: &mut SectionPath,
    visibility: &VisibilityMap,
    width: usize,
    narrow: bool,
    lines: &mut Vec<LaidOutLine>,
) {
    let depth = path.len();
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Row(row) => lines.push(LaidOutLine {
                kind: LineKind::Row,
                depth,
                segments: indented(depth, lay_out_row(row, available(depth, width), narrow)),
            }),
            Node::Section(section) => {
                let open = visibility.is_open(&section.title);
                path.push(index);
                if open {
                    let children = section.body.nodes();
                    lines.push(lay_out_header(section, &children, open, path, width));
                    walk(&children, path, visibility, width, narrow, lines);
                } else {
                    // Lazy bodies stay unevaluated while closed
                    let children = match &section.body {
                        Body::Nodes(nodes) => nodes.as_slice(),
                        Body::Lazy(_) => &[][..],
                    };
                    lines.push(lay_out_header(section, children, open, path, width));
                }
                path.pop();
            }
        }
    }
}

fn available(depth: usize, width: usize) -> usize {
    width.saturating_sub(depth * INDENT)
}

fn indented(depth: usize, mut segments: Vec<Segment>) -> Vec<Segment> {
    if depth > 0 {
        segments.insert(0, Segment::new(" ".repeat(depth * INDENT), Role::Plain));
    }
    segments
}

/// Header: indicator, icon, title, summary content, then the add control.
///
/// When space runs out the title is truncated first so the add control
/// stays reachable. `path` ends with the section's own index.
pub fn lay_out_header(
    section: &Section,
    children: &[Node],
    open: bool,
    path: &[usize],
    width: usize,
) -> LaidOutLine {
    let depth = path.len().saturating_sub(1);
    let indent = depth * INDENT;
    let mut segments = Vec::new();
    if indent > 0 {
        segments.push(Segment::new(" ".repeat(indent), Role::Plain));
    }
    segments.push(Segment::new(indicator(open), Role::Indicator));
    if let Some(icon) = &section.icon {
        segments.push(Segment::new(format!("{} ", icon.glyphs()), Role::Icon));
    }

    let mut summary = Vec::new();
    if let Some(summarize) = &section.summary {
        summary.push(Segment::new(" ", Role::Plain));
        summary.extend(
            summarize(children)
                .into_iter()
                .map(|span| Segment::styled(span.content.into_owned(), Role::Plain, span.style)),
        );
    }

    let fixed: usize = segments.iter().map(Segment::width).sum::<usize>()
        + summary.iter().map(Segment::width).sum::<usize>()
        + 1
        + ADD_CONTROL.width();
    let title_width = width.saturating_sub(fixed).max(1);
    segments.push(Segment::new(truncate(&section.title, title_width), Role::Header));
    segments.extend(summary);
    segments.push(Segment::new(" ", Role::Plain));

    let start = segments.iter().map(Segment::width).sum::<usize>();
    let end = start + ADD_CONTROL.width();
    segments.push(Segment::new(ADD_CONTROL, Role::AddControl));

    LaidOutLine {
        kind: LineKind::Header {
            id: section.title.clone(),
            path: path.to_vec(),
            open,
            add_control: to_column(start)..to_column(end),
        },
        depth,
        segments,
    }
}

fn to_column(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Lays out one row into `width` columns.
pub fn lay_out_row(row: &Row, width: usize, narrow: bool) -> Vec<Segment> {
    let cells: Vec<(&Cell, Vec<Segment>)> = row
        .cells
        .iter()
        .filter(|cell| !(narrow && cell.optional))
        .map(|cell| (cell, cell_segments(cell, narrow)))
        .collect();

    let bases: Vec<usize> = cells
        .iter()
        .map(|(cell, segments)| match cell.size {
            Some(size) => size as usize,
            None => segments.iter().map(Segment::width).sum(),
        })
        .collect();
    let shrinkable: Vec<bool> = cells.iter().map(|(cell, _)| cell.long).collect();
    let widths = shrink(&bases, &shrinkable, width.saturating_sub(cells.len() * CELL_PADDING));

    let mut out = Vec::new();
    for ((_, segments), cell_width) in cells.into_iter().zip(widths) {
        out.push(Segment::new(" ".repeat(CELL_PADDING), Role::Plain));
        out.extend(fit(segments, cell_width));
    }
    out
}

fn cell_segments(cell: &Cell, narrow: bool) -> Vec<Segment> {
    let mut segments = Vec::new();
    for inline in &cell.content {
        match inline {
            Inline::Text(span) => segments.push(Segment::styled(
                span.content.clone().into_owned(),
                Role::Plain,
                span.style,
            )),
            Inline::Icon(icon) => segments.push(Segment::new(icon.glyphs(), Role::Icon)),
            Inline::Pill(pill) if narrow && pill.optional => {}
            Inline::Pill(pill) => {
                segments.push(Segment::new(" (", Role::Border));
                segments.push(Segment::new(pill.text.clone(), Role::Muted));
                segments.push(Segment::new(") ", Role::Border));
            }
        }
    }
    segments
}

/// Shrinks the `long` cells proportionally to their basis until the row
/// fits in `available`. Other cells keep their basis.
pub fn shrink(bases: &[usize], shrinkable: &[bool], available: usize) -> Vec<usize> {
    let mut widths = bases.to_vec();
    let total: usize = bases.iter().sum();
    if total <= available {
        return widths;
    }
    let shrink_total: usize = bases
        .iter()
        .zip(shrinkable)
        .filter(|(_, long)| **long)
        .map(|(basis, _)| *basis)
        .sum();
    if shrink_total == 0 {
        return widths;
    }

    let target = (total - available).min(shrink_total);
    let mut remaining = target;
    for (width, (basis, long)) in widths.iter_mut().zip(bases.iter().zip(shrinkable)) {
        if *long {
            let cut = target * basis / shrink_total;
            *width -= cut;
            remaining -= cut;
        }
    }
    // Rounding leftovers come off the last shrinkable cells first.
    for (width, long) in widths.iter_mut().zip(shrinkable).rev() {
        if remaining == 0 {
            break;
        }
        if *long {
            let cut = remaining.min(*width);
            *width -= cut;
            remaining -= cut;
        }
    }
    widths
}

/// Pads or truncates segments to exactly `width` columns.
fn fit(segments: Vec<Segment>, width: usize) -> Vec<Segment> {
    let natural: usize = segments.iter().map(Segment::width).sum();
    if natural <= width {
        let mut segments = segments;
        if natural < width {
            segments.push(Segment::new(" ".repeat(width - natural), Role::Plain));
        }
        return segments;
    }
    if width == 0 {
        return Vec::new();
    }

    // Room for the ellipsis at the end.
    let mut budget = width - 1;
    let mut out = Vec::new();
    for segment in segments {
        if budget == 0 {
            break;
        }
        let segment_width = segment.width();
        if segment_width <= budget {
            budget -= segment_width;
            out.push(segment);
        } else {
            let text = take_columns(&segment.text, budget);
            out.push(Segment { text, ..segment });
            break;
        }
    }
    let role = out.last().map(|s| s.role).unwrap_or(Role::Plain);
    out.push(Segment::new(ELLIPSIS.to_string(), role));
    let used: usize = out.iter().map(Segment::width).sum();
    if used < width {
        out.push(Segment::new(" ".repeat(width - used), Role::Plain));
    }
    out
}

fn take_columns(text: &str, columns: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= columns
        })
        .collect()
}

/// Truncates `text` to `width` columns, ending in an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = take_columns(text, width - 1);
    out.push(ELLIPSIS);
    out
}
