use log::debug;

use crate::{
    model::Model,
    msg::{Message, util::clamp_cursor},
};

pub fn update(model: &mut Model) -> Option<Message> {
    // Only section headers are collapsible
    if let Some(id) = model.section_at_cursor() {
        if let Some(open) = model.table.toggle_section(&id) {
            debug!("toggled {:?} from keyboard, open = {}", id, open);
        }
        clamp_cursor(model);
    }
    None
}
