use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::{
    state::AppState,
    traits::{Action, View},
};

/// Mounted for detail pages whose id did not resolve.
pub struct Blank;

impl View for Blank {
    fn render(&mut self, _f: &mut Frame, _area: Rect, _state: &AppState) {}

    fn handle_input(&mut self, _key: KeyEvent, _state: &AppState) -> Option<Action> {
        None
    }
}
