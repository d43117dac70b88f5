use crate::{
    model::Model,
    msg::{Message, util::scroll_to_cursor},
};

pub fn update(model: &mut Model) -> Option<Message> {
    let max_pos = model.lines().len().saturating_sub(1);
    if model.ui_model.cursor_position < max_pos {
        model.ui_model.cursor_position += 1;
        scroll_to_cursor(model);
    }
    None
}
