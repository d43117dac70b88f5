//! Collapsible, sectioned tables for ratatui.
//!
//! A [`Table`] owns a [`VisibilityStore`] mapping each section title to
//! whether it is open. Hosts describe the table as a tree of [`Node`]s
//! (rows and [`Section`]s) and hand it to [`Table::update`] whenever their
//! data changes; [`TableView`] draws the result.

pub mod app;
pub mod config;
pub mod errors;
pub mod keys;
pub mod logging;
pub mod model;
pub mod msg;
pub mod section;
pub mod store;
pub mod table;
pub mod view;

pub use section::{Section, SyncPolicy};
pub use store::{SectionId, VisibilityMap, VisibilityStore};
pub use table::{Cell, Icon, Node, Pill, Row, Table, TableEvent};
pub use view::TableView;
