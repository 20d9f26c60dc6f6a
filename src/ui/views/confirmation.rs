use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, page};
use crate::{
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct Confirmation;

impl View for Confirmation {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let booking = state.nav.last_booking();
        let name = booking.map_or("Patient", |b| b.name.as_str());
        let date = booking.map_or("", |b| b.date.as_str());
        let time = booking.map_or("", |b| b.time.as_str());
        let email = booking.map_or("your email", |b| b.email.as_str());

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let accent = Style::default().fg(colors::PRIMARY);

        let lines = vec![
            Line::default(),
            Line::styled("✓", accent.add_modifier(Modifier::BOLD)),
            Line::default(),
            heading("Request Received"),
            Line::default(),
            Line::from(vec![
                Span::raw("Thank you, "),
                Span::styled(name, bold),
                Span::raw(". We've scheduled your request for "),
                Span::styled(date, bold),
                Span::raw(" at "),
                Span::styled(time, accent.add_modifier(Modifier::BOLD)),
                Span::raw("."),
            ]),
            Line::from(vec![
                Span::raw("A summary has been sent to "),
                Span::styled(email, accent),
                Span::raw("."),
            ]),
            Line::default(),
            Line::styled("[Enter] Return Home", Style::default().fg(colors::SECONDARY)),
        ];

        f.render_widget(page(lines, state).alignment(Alignment::Center), area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('h') => {
                Some(AppMessage::Navigate(PageId::Home, None).into())
            }
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "Enter return home"
    }
}
