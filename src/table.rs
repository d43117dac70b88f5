use std::collections::{HashMap, HashSet};

use log::{info, warn};

use crate::section::{Section, SectionController, SyncPolicy};
use crate::store::{SectionId, VisibilityMap, VisibilityStore};

pub use icon::Icon;
pub use layout::{LaidOutLine, LineKind, Role, SectionPath, Segment};
pub use pill::Pill;
pub use row::{Cell, Inline, Row};

pub mod icon;
pub mod layout;
pub mod pill;
pub mod row;

/// One entry of a table's declarative tree.
#[derive(Debug, Clone)]
pub enum Node {
    Row(Row),
    Section(Section),
}

impl From<Row> for Node {
    fn from(row: Row) -> Self {
        Node::Row(row)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

/// What a click or key press on the table did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Toggled { id: SectionId, open: bool },
    /// The section's "add" control was activated.
    NewRequested { id: SectionId },
}

/// What sits under a given column of a laid out line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Header(SectionId),
    /// The "add" control of the section at `path`.
    AddControl { id: SectionId, path: SectionPath },
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// The host supplied a new tree; hints are re-applied per policy.
    Host,
    /// The store changed; only newly mounted sections apply their hint.
    Store,
}

/// Root of a collapsible table.
///
/// Owns the visibility store shared by all of its sections and the
/// controllers of the sections currently mounted. A section is mounted
/// while it is reachable from the root through open sections.
#[derive(Debug, Default)]
pub struct Table {
    store: VisibilityStore,
    policy: SyncPolicy,
    nodes: Vec<Node>,
    controllers: HashMap<SectionId, SectionController>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SyncPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// The current visibility state. Later changes do not affect it.
    pub fn visibility(&self) -> VisibilityMap {
        self.store.snapshot()
    }

    /// Bumped whenever a section's visible open state changes.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Writes the open state of `id` directly, mounted or not.
    ///
    /// Sections revealed or hidden by the write are mounted and unmounted
    /// as by a toggle. Returns true if the visible state changed.
    pub fn set_open(&mut self, id: &str, open: bool) -> bool {
        let changed = self.store.write(id, open);
        self.reconcile(Pass::Store);
        changed
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Renders the table with a new tree from the host.
    ///
    /// Sections seen for the first time mount and apply their default-open
    /// hint; mounted sections re-apply theirs according to the sync policy.
    pub fn update(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
        self.reconcile(Pass::Host);
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.store.read(id)
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.controllers.contains_key(id)
    }

    pub fn mounted(&self) -> impl Iterator<Item = &str> + '_ {
        self.controllers.keys().map(String::as_str)
    }

    /// Toggles a mounted section. Returns the new state, or `None` if no
    /// section with that id is mounted.
    pub fn toggle_section(&mut self, id: &str) -> Option<bool> {
        let open = self.controllers.get(id)?.toggle();
        self.reconcile(Pass::Store);
        Some(open)
    }

    /// Activates the "add" control of the first mounted section titled `id`.
    ///
    /// Returns true if the section had a callback to invoke. The section's
    /// visibility is left untouched.
    pub fn new_in_section(&self, id: &str) -> bool {
        if !self.is_mounted(id) {
            return false;
        }
        find_path(&self.nodes, id, &self.store).is_some_and(|path| self.new_at(&path))
    }

    /// Activates the "add" control of the section at `path`, as recorded in
    /// its header line. Sections sharing a title are told apart this way.
    pub fn new_at(&self, path: &[usize]) -> bool {
        section_at(&self.nodes, path, &self.store).is_some_and(|section| section.request_new())
    }

    /// Lays the table out for a viewport `width` columns wide.
    pub fn lines(&self, width: u16, narrow: bool) -> Vec<LaidOutLine> {
        layout::lay_out(&self.nodes, &self.store.snapshot(), width, narrow)
    }

    /// Classifies a click at `column` on `line`.
    pub fn hit(line: &LaidOutLine, column: u16) -> Hit {
        match &line.kind {
            LineKind::Header {
                id,
                path,
                add_control,
                ..
            } if add_control.contains(&column) => Hit::AddControl {
                id: id.clone(),
                path: path.clone(),
            },
            LineKind::Header { id, .. } => Hit::Header(id.clone()),
            LineKind::Row => Hit::Row,
        }
    }

    /// Handles a click at `column` of laid out line `line_index`.
    ///
    /// A click on the "add" control requests a new item and never toggles.
    /// Anywhere else on a header toggles the section.
    pub fn click(
        &mut self,
        width: u16,
        narrow: bool,
        column: u16,
        line_index: usize,
    ) -> Option<TableEvent> {
        let lines = self.lines(width, narrow);
        let line = lines.get(line_index)?;
        self.activate(Self::hit(line, column))
    }

    /// Performs the action of a hit target.
    pub fn activate(&mut self, hit: Hit) -> Option<TableEvent> {
        match hit {
            Hit::AddControl { id, path } => {
                self.new_at(&path);
                Some(TableEvent::NewRequested { id })
            }
            Hit::Header(id) => {
                let open = self.toggle_section(&id)?;
                Some(TableEvent::Toggled { id, open })
            }
            Hit::Row => None,
        }
    }

    fn reconcile(&mut self, pass: Pass) {
        let nodes = std::mem::take(&mut self.nodes);
        let mut seen = HashSet::new();
        self.reconcile_nodes(&nodes, pass, &mut seen);
        self.nodes = nodes;

        self.controllers.retain(|id, _| {
            let keep = seen.contains(id);
            if !keep {
                info!("unmount section {:?}", id);
            }
            keep
        });
    }

    fn reconcile_nodes(&mut self, nodes: &[Node], pass: Pass, seen: &mut HashSet<SectionId>) {
        for node in nodes {
            let Node::Section(section) = node else {
                continue;
            };
            if !seen.insert(section.title.clone()) {
                warn!(
                    "duplicate section title {:?}; these sections share one open state",
                    section.title
                );
            }
            match self.controllers.get_mut(&section.title) {
                Some(controller) => {
                    if pass == Pass::Host {
                        controller.sync(section.open, self.policy);
                    }
                }
                None => {
                    let controller =
                        SectionController::mount(self.store.clone(), &section.title, section.open);
                    self.controllers.insert(section.title.clone(), controller);
                }
            }
            // The hint is applied before the body is evaluated, so a section
            // mounted open never has its children skipped.
            if self.store.read(&section.title) {
                let children = section.body.nodes();
                self.reconcile_nodes(&children, pass, seen);
            }
        }
    }
}

/// Path of the first reachable section titled `id`, descending only into
/// open sections.
fn find_path(nodes: &[Node], id: &str, store: &VisibilityStore) -> Option<SectionPath> {
    for (index, node) in nodes.iter().enumerate() {
        let Node::Section(section) = node else {
            continue;
        };
        if section.title == id {
            return Some(vec![index]);
        }
        if store.read(&section.title) {
            if let Some(mut path) = find_path(&section.body.nodes(), id, store) {
                path.insert(0, index);
                return Some(path);
            }
        }
    }
    None
}

/// The section at `path`, if every section along the way is open.
fn section_at(nodes: &[Node], path: &[usize], store: &VisibilityStore) -> Option<Section> {
    let (&index, rest) = path.split_first()?;
    let Node::Section(section) = nodes.get(index)? else {
        return None;
    };
    if rest.is_empty() {
        return Some(section.clone());
    }
    if !store.read(&section.title) {
        return None;
    }
    section_at(&section.body.nodes(), rest, store)
}
