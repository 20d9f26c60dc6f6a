use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::{heading, muted, step_selection};
use crate::{
    catalog::DEPARTMENTS,
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct Departments {
    pub list_state: ListState,
}

impl Default for Departments {
    fn default() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl View for Departments {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(4),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                heading("Centers of Excellence"),
                muted("Specialized care across every major discipline."),
            ]),
            chunks[0],
        );

        let items: Vec<ListItem> = DEPARTMENTS
            .iter()
            .map(|d| ListItem::new(format!("{} {}", d.icon, d.name)))
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        // Preview of the highlighted department.
        if let Some(department) = self.list_state.selected().and_then(|i| DEPARTMENTS.get(i)) {
            f.render_widget(
                Paragraph::new(vec![
                    Line::default(),
                    muted(department.description),
                ])
                .wrap(Wrap { trim: true }),
                chunks[2],
            );
        }
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                step_selection(&mut self.list_state, DEPARTMENTS.len(), 1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                step_selection(&mut self.list_state, DEPARTMENTS.len(), -1);
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| DEPARTMENTS.get(i))
                .map(|d| {
                    AppMessage::Navigate(PageId::DepartmentDetail, Some(d.id.to_string())).into()
                }),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ select · Enter view department"
    }
}
