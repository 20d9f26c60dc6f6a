use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::{heading, muted, step_selection};
use crate::{
    catalog::DOCTORS,
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct Doctors {
    pub list_state: ListState,
}

impl Default for Doctors {
    fn default() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl View for Doctors {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                heading("Meet Our Medical Faculty"),
                muted("Board-certified experts from around the globe."),
            ]),
            chunks[0],
        );

        let items: Vec<ListItem> = DOCTORS
            .iter()
            .map(|doctor| {
                let status = if doctor.available {
                    Span::styled("● available", Style::default().fg(colors::PRIMARY))
                } else {
                    Span::styled("○ unavailable", Style::default().fg(colors::MUTED))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(doctor.name, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        status,
                    ]),
                    Line::styled(
                        format!(
                            "  {} · {} years",
                            doctor.specialization, doctor.experience_years
                        ),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(colors::SECONDARY))
            .highlight_symbol("› ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                step_selection(&mut self.list_state, DOCTORS.len(), 1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                step_selection(&mut self.list_state, DOCTORS.len(), -1);
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| DOCTORS.get(i))
                .map(|doctor| {
                    AppMessage::Navigate(PageId::DoctorDetail, Some(doctor.id.to_string())).into()
                }),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ select · Enter view profile"
    }
}
