use crate::{
    model::Model,
    msg::{Message, util::scroll_to_cursor},
};

pub fn update(model: &mut Model) -> Option<Message> {
    model.ui_model.cursor_position = model.lines().len().saturating_sub(1);
    scroll_to_cursor(model);
    None
}
