use crate::model::Model;

/// Clamps the cursor to the laid out lines and scrolls it into view.
pub fn clamp_cursor(model: &mut Model) {
    let line_count = model.lines().len();
    let ui_model = &mut model.ui_model;
    let max_pos = line_count.saturating_sub(1);
    if ui_model.cursor_position > max_pos {
        ui_model.cursor_position = max_pos;
    }
    scroll_to_cursor(model);
}

/// Adjusts the scroll offset so the cursor line is inside the viewport.
pub fn scroll_to_cursor(model: &mut Model) {
    let ui_model = &mut model.ui_model;
    if ui_model.cursor_position < ui_model.scroll_offset {
        ui_model.scroll_offset = ui_model.cursor_position;
    }
    let viewport_height = ui_model.viewport_height;
    if viewport_height > 0 && ui_model.cursor_position >= ui_model.scroll_offset + viewport_height
    {
        ui_model.scroll_offset = ui_model.cursor_position + 1 - viewport_height;
    }
}
