use crate::{
    model::Model,
    msg::Message,
    table::{Hit, LineKind},
};

pub fn update(model: &mut Model) -> Option<Message> {
    let cursor = model.ui_model.cursor_position;
    let Some(line) = model.lines().into_iter().nth(cursor) else {
        return None;
    };
    // The section's callback queues the follow up message
    if let LineKind::Header { id, path, .. } = line.kind {
        model.table.activate(Hit::AddControl { id, path });
    }
    None
}
