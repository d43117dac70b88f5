use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::{
    model::Model,
    view::{render::render_toast, status_bar::render_status_bar},
};

pub use table_view::TableView;

mod render;
mod status_bar;
mod table_view;
pub mod util;

/// Splits the frame into the bordered table and the status bar below it.
fn split(frame_area: Rect) -> (Rect, Rect) {
    let [table, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame_area);
    (table, status)
}

/// The area table lines are drawn in, inside the border.
///
/// Mouse clicks are mapped back to table lines with the same geometry.
pub fn table_area(frame_area: Rect) -> Rect {
    let (table, _) = split(frame_area);
    Block::default().borders(Borders::ALL).inner(table)
}

/// The view functions draws the UI using the application
/// state (Model).
///
/// ┌Inventory───────────────────────────────────────────┐
/// |∨● Fruits (3) [+]                                   |
/// | Apple         12  Braeburn, from the orchard down… |
/// | Banana         6  Still a little green (ripening)  |
/// | Pear           3  Conference                       |
/// |  >◐ Citrus (2) [+]                                 |
/// |>▼ Veggies (2) [+]                                  |
/// |>❦ Herbs (0) [+]                                    |
/// └────────────────────────────────────────────────────┘
///  Tab toggle  + add  q quit                     always
pub fn view(model: &Model, frame: &mut Frame) {
    let (table_rect, status_rect) = split(frame.area());
    let theme = &model.theme;

    let table_view = TableView::new(&model.table, theme)
        .block(Block::default().borders(Borders::ALL).title("Inventory"))
        .cursor(Some(model.ui_model.cursor_position))
        .scroll(model.ui_model.scroll_offset)
        .narrow_breakpoint(model.ui_model.narrow_breakpoint);
    frame.render_widget(table_view, table_rect);

    render_status_bar(frame, status_rect, model.table.policy(), theme);

    // Render toast in bottom-right corner if present
    if let Some(toast) = &model.toast {
        render_toast(toast, frame, table_rect, theme);
    }
}
