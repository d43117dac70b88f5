use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use ratatui::text::Span;
use serde::Deserialize;

use crate::store::{SectionId, VisibilityStore};
use crate::table::{Icon, Node, Row};

/// Callback fired when a section's "add" control is activated.
pub type OnNew = Rc<dyn Fn()>;

/// Callback producing extra header content from the section's children.
pub type Summary = Rc<dyn Fn(&[Node]) -> Vec<Span<'static>>>;

/// Callback producing a section's children on demand.
pub type ChildrenFn = Rc<dyn Fn() -> Vec<Node>>;

/// When a mounted section re-applies its default-open hint to the store.
///
/// The hint is always applied on mount regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncPolicy {
    /// Every host update re-applies the hint, even when it did not change.
    /// A manual toggle only lasts until the host renders the table again.
    #[default]
    Always,
    /// The hint is re-applied only when it differs from the previous one.
    OnChange,
    /// The hint is applied once, when the section mounts.
    OnMount,
}

/// The children of a section.
#[derive(Clone)]
pub enum Body {
    Nodes(Vec<Node>),
    /// Evaluated only while the section is open.
    Lazy(ChildrenFn),
}

impl Body {
    pub fn nodes(&self) -> Vec<Node> {
        match self {
            Body::Nodes(nodes) => nodes.clone(),
            Body::Lazy(children) => children(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Nodes(Vec::new())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Nodes(nodes) => f.debug_tuple("Nodes").field(nodes).finish(),
            Body::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Declarative description of a collapsible section.
///
/// The title is both the label drawn in the header and the key of the
/// section's entry in the table's visibility store, so it must be unique
/// within one table.
#[derive(Clone, Default)]
pub struct Section {
    pub title: SectionId,
    /// Default-open hint. `None` behaves like `Some(false)` when applied.
    pub open: Option<bool>,
    pub icon: Option<Icon>,
    pub on_new: Option<OnNew>,
    pub summary: Option<Summary>,
    pub body: Body,
}

impl Section {
    pub fn new(title: impl Into<SectionId>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn on_new(mut self, on_new: impl Fn() + 'static) -> Self {
        self.on_new = Some(Rc::new(on_new));
        self
    }

    /// Extra header content computed from the section's children.
    ///
    /// A closed section with a lazy body (see [`Section::children_with`])
    /// passes an empty slice, since its children are never built while
    /// closed. Eager children are always passed.
    pub fn summary(mut self, summary: impl Fn(&[Node]) -> Vec<Span<'static>> + 'static) -> Self {
        self.summary = Some(Rc::new(summary));
        self
    }

    pub fn rows(self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.children(rows.into_iter().map(Node::Row))
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.body = Body::Nodes(children.into_iter().collect());
        self
    }

    pub fn children_with(mut self, children: impl Fn() -> Vec<Node> + 'static) -> Self {
        self.body = Body::Lazy(Rc::new(children));
        self
    }

    /// Invokes the "add" callback. A section without one ignores the request.
    pub fn request_new(&self) -> bool {
        match &self.on_new {
            Some(on_new) => {
                on_new();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("title", &self.title)
            .field("open", &self.open)
            .field("icon", &self.icon)
            .field("on_new", &self.on_new.is_some())
            .field("summary", &self.summary.is_some())
            .field("body", &self.body)
            .finish()
    }
}

/// Per-section state machine bound to a table's visibility store.
///
/// Created when a section first appears in a table and dropped when it
/// disappears. The open state itself lives in the store, keyed by id.
#[derive(Debug)]
pub struct SectionController {
    id: SectionId,
    hint: Option<bool>,
    store: VisibilityStore,
}

impl SectionController {
    /// Mounts a section and applies its default-open hint.
    pub fn mount(store: VisibilityStore, id: impl Into<SectionId>, hint: Option<bool>) -> Self {
        let id = id.into();
        info!("mount section {:?} (open hint {:?})", id, hint);
        store.write(&id, hint.unwrap_or(false));
        Self { id, hint, store }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hint(&self) -> Option<bool> {
        self.hint
    }

    pub fn is_open(&self) -> bool {
        self.store.read(&self.id)
    }

    /// Flips the section and returns the new state.
    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.store.write(&self.id, open);
        open
    }

    /// Handles a host update carrying the section's current hint.
    ///
    /// Returns true if the hint was written to the store.
    pub fn sync(&mut self, hint: Option<bool>, policy: SyncPolicy) -> bool {
        let fire = match policy {
            SyncPolicy::Always => true,
            SyncPolicy::OnChange => hint != self.hint,
            SyncPolicy::OnMount => false,
        };
        self.hint = hint;
        if fire {
            debug!("sync section {:?} to hint {:?}", self.id, hint);
            self.store.write(&self.id, hint.unwrap_or(false));
        }
        fire
    }
}
