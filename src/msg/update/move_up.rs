use crate::{
    model::Model,
    msg::{Message, util::scroll_to_cursor},
};

pub fn update(model: &mut Model) -> Option<Message> {
    if model.ui_model.cursor_position > 0 {
        model.ui_model.cursor_position -= 1;
        scroll_to_cursor(model);
    }
    None
}
