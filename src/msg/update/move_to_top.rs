use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    model.ui_model.cursor_position = 0;
    model.ui_model.scroll_offset = 0;
    None
}
