#![allow(unused)]

use std::{cell::Cell as Counter, rc::Rc};

use foldtable::{
    Cell, Node, Row, Section, SyncPolicy, Table,
    config::Config,
    model::{Model, inventory::Inventory},
};
use ratatui::layout::Rect;

/// A row with a single text cell.
pub fn row(text: &str) -> Node {
    Row::new([Cell::new(text)]).into()
}

/// A section with the given default-open hint holding plain rows.
pub fn section(title: &str, open: Option<bool>, rows: &[&str]) -> Section {
    let section = Section::new(title).children(rows.iter().map(|text| row(text)));
    match open {
        Some(open) => section.open(open),
        None => section,
    }
}

/// A table rendered once with `nodes`.
pub fn create_table(policy: SyncPolicy, nodes: Vec<Node>) -> Table {
    let mut table = Table::with_policy(policy);
    table.update(nodes);
    table
}

/// A section whose children are built lazily, counting evaluations.
pub fn lazy_section(title: &str, open: bool, calls: &Rc<Counter<usize>>) -> Section {
    let calls = calls.clone();
    Section::new(title).open(open).children_with(move || {
        calls.set(calls.get() + 1);
        vec![row("lazy child")]
    })
}

/// The demo model on an 80x24 terminal.
pub fn create_test_model() -> Model {
    create_test_model_with_policy(SyncPolicy::default())
}

pub fn create_test_model_with_policy(policy: SyncPolicy) -> Model {
    let config = Config {
        sync_policy: policy,
        ..Default::default()
    };
    let mut model = Model::new(Inventory::sample(), &config);
    model.ui_model.resize(Rect::new(0, 0, 80, 24));
    model
}

/// Texts of the laid out lines, trailing padding removed.
pub fn line_texts(model: &Model) -> Vec<String> {
    model
        .lines()
        .iter()
        .map(|line| line.text().trim_end().to_string())
        .collect()
}
