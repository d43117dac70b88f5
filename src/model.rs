use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::config::{Config, DEFAULT_NARROW_BREAKPOINT, Theme};
use crate::msg::Message;
use crate::section::{Section, SyncPolicy};
use crate::table::{Cell, Icon, LaidOutLine, Node, Pill, Row, Table};
use crate::view::table_area;

use inventory::{Category, Inventory, Item};

pub mod inventory;

/// Messages queued by table callbacks, drained by the update loop.
pub type Outbox = Rc<RefCell<VecDeque<Message>>>;

/// The whole state of the demo application
pub struct Model {
    /// Running state of the application
    pub running_state: RunningState,
    /// Cursor and viewport state
    pub ui_model: UiModel,
    /// The data the table is rendered from
    pub inventory: Inventory,
    /// The collapsible table and its visibility state
    pub table: Table,
    /// Color scheme
    pub theme: Theme,
    /// Toast notification that auto-dismisses after a timeout
    pub toast: Option<Toast>,
    /// Messages produced by section callbacks
    pub outbox: Outbox,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiModel {
    /// Index into the laid out table lines
    pub cursor_position: usize,
    /// Terminal area of the last drawn frame
    pub frame_area: Rect,
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub viewport_width: u16,
    pub narrow_breakpoint: u16,
}

impl Default for UiModel {
    fn default() -> Self {
        Self {
            cursor_position: 0,
            frame_area: Rect::default(),
            scroll_offset: 0,
            viewport_height: 0,
            viewport_width: 80,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
        }
    }
}

impl UiModel {
    pub fn is_narrow(&self) -> bool {
        self.viewport_width < self.narrow_breakpoint
    }

    /// Records the terminal size and derives the table viewport from it.
    pub fn resize(&mut self, frame_area: Rect) {
        let area = table_area(frame_area);
        self.frame_area = frame_area;
        self.viewport_width = area.width;
        self.viewport_height = area.height as usize;
    }
}

#[derive(Default, PartialEq, Eq, Debug)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

impl Model {
    pub fn new(inventory: Inventory, config: &Config) -> Self {
        let mut model = Self {
            running_state: RunningState::Running,
            ui_model: UiModel {
                narrow_breakpoint: config.narrow_breakpoint,
                ..Default::default()
            },
            inventory,
            table: Table::with_policy(config.sync_policy),
            theme: config.resolve_theme(),
            toast: None,
            outbox: Outbox::default(),
        };
        model.render_table();
        model
    }

    pub fn with_policy(inventory: Inventory, policy: SyncPolicy) -> Self {
        let config = Config {
            sync_policy: policy,
            ..Default::default()
        };
        Self::new(inventory, &config)
    }

    /// Re-renders the table from the inventory, as a host re-render would.
    pub fn render_table(&mut self) {
        let nodes = self
            .inventory
            .categories
            .iter()
            .map(|category| category_node(category, &self.outbox))
            .collect();
        self.table.update(nodes);
    }

    /// The table laid out for the current viewport
    pub fn lines(&self) -> Vec<LaidOutLine> {
        self.table
            .lines(self.ui_model.viewport_width, self.ui_model.is_narrow())
    }

    /// The section whose header is under the cursor, if any
    pub fn section_at_cursor(&self) -> Option<String> {
        self.lines()
            .get(self.ui_model.cursor_position)
            .and_then(|line| line.section_id().map(String::from))
    }

    pub fn next_pending(&self) -> Option<Message> {
        self.outbox.borrow_mut().pop_front()
    }
}

fn category_node(category: &Category, outbox: &Outbox) -> Node {
    let mut children: Vec<Node> = category.items.iter().map(item_row).map(Node::Row).collect();
    children.extend(
        category
            .subcategories
            .iter()
            .map(|subcategory| category_node(subcategory, outbox)),
    );

    let outbox = outbox.clone();
    let name = category.name.clone();
    Section::new(category.name.as_str())
        .open(category.open)
        .icon(Icon::new([category.icon.as_str()]))
        .on_new(move || {
            outbox
                .borrow_mut()
                .push_back(Message::AddItem(name.clone()))
        })
        .summary(row_count)
        .children(children)
        .into()
}

fn item_row(item: &Item) -> Row {
    let mut cells = vec![
        Cell::new(item.name.as_str()).size(12),
        Cell::new(format!("{:>3}", item.quantity)).size(4),
        Cell::new(item.note.as_str()).long().optional(),
    ];
    if let Some(tag) = &item.tag {
        cells.push(Cell::new(Pill::new(tag.as_str()).optional()));
    }
    Row::new(cells)
}

fn row_count(children: &[Node]) -> Vec<Span<'static>> {
    let rows = children
        .iter()
        .filter(|node| matches!(node, Node::Row(_)))
        .count();
    vec![Span::styled(
        format!("({})", rows),
        Style::default().add_modifier(Modifier::DIM),
    )]
}
