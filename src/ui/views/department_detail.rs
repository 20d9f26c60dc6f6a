use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
};

use super::{heading, page};
use crate::{
    catalog::Department,
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct DepartmentDetail {
    department: &'static Department,
}

impl DepartmentDetail {
    pub fn new(department: &'static Department) -> Self {
        Self { department }
    }
}

impl View for DepartmentDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let department = self.department;
        let lines = vec![
            Line::styled("← [Esc] Back to Services", Style::default().fg(colors::MUTED)),
            Line::default(),
            Line::from(department.icon),
            heading(department.name),
            Line::default(),
            Line::from(department.description),
            Line::default(),
            Line::styled(
                format!("[b] Book a Visit in {}", department.name),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        f.render_widget(page(lines, state), area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                Some(AppMessage::Navigate(PageId::Departments, None).into())
            }
            KeyCode::Char('b') => {
                Some(AppMessage::BookWithContext(Some(self.department.id.to_string())).into())
            }
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "b book a visit · Esc back"
    }
}
