use crossterm::event::{self, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

use crate::{model::Model, msg::Message};

/// Maps a key event into a [`Message`] given the application state.
/// If function returns [`None`], no action should be triggered.
pub fn handle_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
    // Esc dismisses a visible toast
    if model.toast.is_some() && key.code == KeyCode::Esc {
        return Some(Message::DismissToast);
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(Message::Refresh),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Message::Quit),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => Some(Message::MoveToTop),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            Some(Message::MoveToBottom)
        }
        (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Enter) => Some(Message::ToggleSection),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('+'))
        | (KeyModifiers::NONE, KeyCode::Char('a')) => Some(Message::NewInSection),
        _ => None,
    }
}

/// Maps a mouse event into a [`Message`]. Left clicks and the wheel are handled.
pub fn handle_mouse(mouse: event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Message::MoveUp),
        MouseEventKind::ScrollDown => Some(Message::MoveDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::config::Config;
    use crate::model::{Toast, inventory::Inventory};
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState, MouseEvent};

    fn create_key_event(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn create_test_model() -> Model {
        Model::new(Inventory::sample(), &Config::default())
    }

    #[test]
    fn test_tab_toggles_section() {
        let model = create_test_model();
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Tab);
        assert_eq!(handle_key(key, &model), Some(Message::ToggleSection));
    }

    #[test]
    fn test_plus_adds_with_or_without_shift() {
        let model = create_test_model();
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            let key = create_key_event(modifiers, KeyCode::Char('+'));
            assert_eq!(handle_key(key, &model), Some(Message::NewInSection));
        }
    }

    #[test]
    fn test_quit_keys() {
        let model = create_test_model();
        let q = create_key_event(KeyModifiers::NONE, KeyCode::Char('q'));
        let ctrl_c = create_key_event(KeyModifiers::CONTROL, KeyCode::Char('c'));
        assert_eq!(handle_key(q, &model), Some(Message::Quit));
        assert_eq!(handle_key(ctrl_c, &model), Some(Message::Quit));
    }

    #[test]
    fn test_esc_dismisses_toast_only_when_visible() {
        let mut model = create_test_model();
        let esc = create_key_event(KeyModifiers::NONE, KeyCode::Esc);
        assert_eq!(handle_key(esc, &model), None);

        model.toast = Some(Toast {
            message: "Added".to_string(),
            expires_at: Instant::now(),
        });
        assert_eq!(handle_key(esc, &model), Some(Message::DismissToast));
    }

    #[test]
    fn test_left_click_maps_to_click() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse(mouse),
            Some(Message::Click { column: 4, row: 2 })
        );

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..mouse
        };
        assert_eq!(handle_mouse(right), None);
    }
}
