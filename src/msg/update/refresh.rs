use crate::{
    model::Model,
    msg::{Message, util::clamp_cursor},
};

pub fn update(model: &mut Model) -> Option<Message> {
    model.render_table();
    clamp_cursor(model);
    None
}
