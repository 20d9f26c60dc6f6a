use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::{message::AppMessage, state::AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Key consumed, nothing to apply.
    None,
    Dispatch(AppMessage),
}

impl From<AppMessage> for Action {
    fn from(msg: AppMessage) -> Self {
        Action::Dispatch(msg)
    }
}

pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState);

    /// `None` lets the key fall through to the global bindings.
    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action>;

    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }

    fn hints(&self) -> &'static str {
        ""
    }
}
