use std::{cell::Cell as Counter, rc::Rc};

use foldtable::{
    Section, SyncPolicy, TableEvent,
    table::{Hit, LineKind},
};

use crate::utils::{create_table, row, section};

mod utils;

fn counting_section(title: &str, calls: &Rc<Counter<usize>>) -> Section {
    let calls = calls.clone();
    section(title, Some(false), &["x"]).on_new(move || calls.set(calls.get() + 1))
}

fn add_control_column(table: &foldtable::Table, line_index: usize) -> u16 {
    match &table.lines(40, false)[line_index].kind {
        LineKind::Header { add_control, .. } => add_control.start,
        LineKind::Row => panic!("expected a header"),
    }
}

#[test]
fn test_click_on_header_toggles() {
    let mut table = create_table(
        SyncPolicy::Always,
        vec![section("X", Some(false), &["x"]).into()],
    );

    let event = table.click(40, false, 0, 0);
    assert_eq!(
        event,
        Some(TableEvent::Toggled {
            id: "X".to_string(),
            open: true
        })
    );
    assert!(table.is_open("X"));
}

#[test]
fn test_click_on_add_control_requests_new_without_toggling() {
    let calls = Rc::new(Counter::new(0));
    let mut table = create_table(SyncPolicy::Always, vec![counting_section("X", &calls).into()]);

    // ">X [+]"
    let column = add_control_column(&table, 0);
    assert_eq!(column, 3);

    let event = table.click(40, false, column + 1, 0);
    assert_eq!(
        event,
        Some(TableEvent::NewRequested {
            id: "X".to_string()
        })
    );
    assert_eq!(calls.get(), 1);
    assert!(!table.is_open("X"));
}

#[test]
fn test_add_control_without_callback_does_nothing() {
    let mut table = create_table(
        SyncPolicy::Always,
        vec![section("X", Some(false), &["x"]).into()],
    );

    assert!(!table.new_in_section("X"));
    let column = add_control_column(&table, 0);
    table.click(40, false, column, 0);
    assert!(!table.is_open("X"));
}

#[test]
fn test_click_on_row_does_nothing() {
    let mut table = create_table(
        SyncPolicy::Always,
        vec![section("X", Some(true), &["x"]).into()],
    );

    assert_eq!(table.click(40, false, 2, 1), None);
    assert!(table.is_open("X"));
}

#[test]
fn test_click_below_last_line_does_nothing() {
    let mut table = create_table(SyncPolicy::Always, vec![row("only")]);
    assert_eq!(table.click(40, false, 0, 5), None);
}

#[test]
fn test_hit_classifies_columns() {
    let table = create_table(
        SyncPolicy::Always,
        vec![section("X", Some(true), &["x"]).into()],
    );
    let lines = table.lines(40, false);

    assert_eq!(
        foldtable::Table::hit(&lines[0], 0),
        Hit::Header("X".to_string())
    );
    assert_eq!(
        foldtable::Table::hit(&lines[0], 4),
        Hit::AddControl {
            id: "X".to_string(),
            path: vec![0],
        }
    );
    assert_eq!(foldtable::Table::hit(&lines[1], 0), Hit::Row);
}

#[test]
fn test_new_in_hidden_nested_section_is_ignored() {
    let calls = Rc::new(Counter::new(0));
    let parent = Section::new("Parent")
        .open(false)
        .children([counting_section("Child", &calls).into()]);
    let table = create_table(SyncPolicy::Always, vec![parent.into()]);

    assert!(!table.new_in_section("Child"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_add_control_runs_the_clicked_duplicate() {
    let first = Rc::new(Counter::new(0));
    let second = Rc::new(Counter::new(0));
    let mut table = create_table(
        SyncPolicy::Always,
        vec![
            counting_section("S", &first).into(),
            counting_section("S", &second).into(),
        ],
    );

    let column = add_control_column(&table, 1);
    table.click(40, false, column, 1);
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);

    table.click(40, false, column, 0);
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_header_path_locates_nested_duplicate() {
    let outer = Rc::new(Counter::new(0));
    let inner = Rc::new(Counter::new(0));
    let parent = Section::new("Parent")
        .open(true)
        .children([row("a"), counting_section("S", &inner).into()]);
    let mut table = create_table(
        SyncPolicy::Always,
        vec![counting_section("S", &outer).into(), parent.into()],
    );

    let lines = table.lines(40, false);
    match &lines[3].kind {
        LineKind::Header { id, path, .. } => {
            assert_eq!(id, "S");
            assert_eq!(path, &vec![1, 1]);
        }
        LineKind::Row => panic!("expected the nested header"),
    }

    let column = add_control_column(&table, 3);
    table.click(40, false, column, 3);
    assert_eq!(inner.get(), 1);
    assert_eq!(outer.get(), 0);
    assert!(!table.new_at(&[1, 5]));
}
