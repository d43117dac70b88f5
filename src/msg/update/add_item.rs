use std::time::Instant;

use log::{info, warn};

use crate::{
    model::{Model, Toast},
    msg::{Message, update::TOAST_DURATION},
};

pub fn update(model: &mut Model, category: &str) -> Option<Message> {
    match model.inventory.add_item(category) {
        Some(name) => {
            info!("added {:?} to {:?}", name, category);
            model.toast = Some(Toast {
                message: format!("Added {} to {}", name, category),
                expires_at: Instant::now() + TOAST_DURATION,
            });
            // The host re-renders the table with the new data
            Some(Message::Refresh)
        }
        None => {
            warn!("no category named {:?}", category);
            None
        }
    }
}
