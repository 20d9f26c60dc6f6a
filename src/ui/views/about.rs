use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, text::Line};

use super::{heading, muted, page};
use crate::{
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
};

pub struct About;

impl View for About {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let lines = vec![
            heading("About Nova Medical"),
            Line::default(),
            Line::from(
                "Nova Campus was founded on the principle that healthcare should be a blend of \
                 scientific precision and human kindness.",
            ),
            Line::default(),
            heading("Our Mission"),
            Line::default(),
            muted(
                "To deliver exceptional patient-centered care through clinical excellence, \
                 advanced research, and compassionate community service. We strive to lead the \
                 healthcare industry by continuously integrating innovative medical technologies \
                 into our practice.",
            ),
            Line::default(),
            Line::from("[c] Contact Our Concierge"),
        ];
        f.render_widget(page(lines, state), area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') => Some(AppMessage::Navigate(PageId::Contact, None).into()),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "c contact"
    }
}
