use log::debug;

use crate::{
    model::Model,
    msg::{Message, util::clamp_cursor},
    view::table_area,
};

/// Routes a mouse click on the table to the line under it.
pub fn update(model: &mut Model, column: u16, row: u16) -> Option<Message> {
    let area = table_area(model.ui_model.frame_area);
    if !area.contains((column, row).into()) {
        return None;
    }
    let line_index = model.ui_model.scroll_offset + (row - area.y) as usize;
    if line_index >= model.lines().len() {
        return None;
    }
    model.ui_model.cursor_position = line_index;

    let width = model.ui_model.viewport_width;
    let narrow = model.ui_model.is_narrow();
    if let Some(event) = model.table.click(width, narrow, column - area.x, line_index) {
        debug!("click on line {}: {:?}", line_index, event);
    }
    clamp_cursor(model);
    None
}
