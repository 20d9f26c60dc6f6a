use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, muted, page};
use crate::{
    catalog::{CORE_EXPERTISE, Doctor},
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct DoctorDetail {
    doctor: &'static Doctor,
}

impl DoctorDetail {
    pub fn new(doctor: &'static Doctor) -> Self {
        Self { doctor }
    }
}

impl View for DoctorDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let doctor = self.doctor;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let (status, status_style) = if doctor.available {
            ("Available", Style::default().fg(colors::PRIMARY))
        } else {
            ("Unavailable", Style::default().fg(colors::DANGER))
        };

        let mut lines = vec![
            Line::styled("← [Esc] Back to Faculty", Style::default().fg(colors::MUTED)),
            Line::default(),
            Line::styled(doctor.name, bold.fg(colors::TEXT)),
            Line::styled(
                doctor.specialization.to_uppercase(),
                Style::default().fg(colors::PRIMARY),
            ),
            Line::default(),
            heading("Professional Background"),
            Line::from(doctor.bio),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} Years", doctor.experience_years), bold),
                Span::styled(" experience   ", Style::default().fg(colors::NEUTRAL)),
                Span::styled(status, status_style.add_modifier(Modifier::BOLD)),
                Span::styled(" status", Style::default().fg(colors::NEUTRAL)),
            ]),
            Line::default(),
            heading("Core Expertise"),
            Line::from(
                CORE_EXPERTISE
                    .iter()
                    .flat_map(|tag| {
                        [
                            Span::styled(
                                format!(" {tag} "),
                                Style::default().fg(colors::SECONDARY),
                            ),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
            Line::default(),
            heading("Schedule a Consultation"),
        ];
        lines.push(muted(
            "Book a direct meeting through our simplified appointment request system.",
        ));
        lines.push(Line::styled(
            format!("[b] Request Appointment with {}", doctor.name),
            Style::default().fg(colors::PRIMARY),
        ));

        f.render_widget(page(lines, state), area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                Some(AppMessage::Navigate(PageId::Doctors, None).into())
            }
            // A doctor booking carries no department context.
            KeyCode::Char('b') => Some(AppMessage::BookWithContext(None).into()),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "b request appointment · Esc back"
    }
}
