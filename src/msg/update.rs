use std::time::Duration;

use crate::{
    model::{Model, RunningState},
    msg::Message,
};

mod add_item;
mod click;
mod move_down;
mod move_to_bottom;
mod move_to_top;
mod move_up;
mod new_in_section;
mod refresh;
mod toggle_section;

/// Duration for toast notifications
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Processes a [`Message`], modifying the passed model.
///
/// Returns a follow up [`Message`] for sequences of actions.
/// e.g. after an item is added, a [`Message::Refresh`] re-renders the table.
/// Messages queued by section callbacks are returned once the current
/// message has no follow up of its own.
pub fn update(model: &mut Model, msg: Message) -> Option<Message> {
    let follow_up = match msg {
        Message::Quit => {
            model.running_state = RunningState::Done;
            None
        }
        Message::Refresh => refresh::update(model),
        Message::MoveUp => move_up::update(model),
        Message::MoveDown => move_down::update(model),
        Message::MoveToTop => move_to_top::update(model),
        Message::MoveToBottom => move_to_bottom::update(model),
        Message::ToggleSection => toggle_section::update(model),
        Message::NewInSection => new_in_section::update(model),
        Message::Click { column, row } => click::update(model, column, row),
        Message::AddItem(category) => add_item::update(model, &category),
        Message::DismissToast => {
            model.toast = None;
            None
        }
    };
    follow_up.or_else(|| model.next_pending())
}
