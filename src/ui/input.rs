use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::message::AppMessage;

pub struct InputHandler;

impl InputHandler {
    // Bindings that win over whatever the active view does with the key.
    pub fn handle_priority_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => Some(AppMessage::ToggleChat),
            (KeyCode::F(1), _) => Some(AppMessage::ToggleChat),
            _ => None,
        }
    }

    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSidebarItem),
            (KeyCode::PageUp, _) => Some(AppMessage::ScrollUp),
            (KeyCode::PageDown, _) => Some(AppMessage::ScrollDown),
            (KeyCode::Char(c @ '1'..='7'), _) => {
                Some(AppMessage::SetSidebarIndex(c as usize - '1' as usize))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_jump_to_sidebar_entries() {
        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(InputHandler::handle_key(key), Some(AppMessage::SetSidebarIndex(2)));

        let key = KeyEvent::new(KeyCode::Char('8'), KeyModifiers::NONE);
        assert_eq!(InputHandler::handle_key(key), None);
    }

    #[test]
    fn only_ctrl_c_quits() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(InputHandler::handle_key(q), None);
        assert_eq!(InputHandler::handle_priority_key(q), None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::handle_priority_key(ctrl_c), Some(AppMessage::Quit));
    }

    #[test]
    fn chat_toggle_has_two_bindings() {
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::handle_priority_key(f1), Some(AppMessage::ToggleChat));
        assert_eq!(InputHandler::handle_priority_key(ctrl_t), Some(AppMessage::ToggleChat));
        assert_eq!(
            InputHandler::handle_priority_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
            None
        );
    }
}
