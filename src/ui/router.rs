use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tracing::debug;

use crate::{
    calendar,
    navigation::Page,
    ui::{
        state::AppState,
        traits::{Action, View},
        views::{
            About, Appointment, Blank, ChatPanel, Confirmation, Contact, DepartmentDetail,
            Departments, DoctorDetail, Doctors, Home, Privacy,
        },
    },
};

pub struct Router {
    view: Box<dyn View>,
    revision: Option<u64>,
    chat: ChatPanel,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            view: Box::new(Home::default()),
            revision: None,
            chat: ChatPanel::default(),
        }
    }

    // Views are remounted on every transition, like a page load.
    pub fn sync(&mut self, state: &AppState) {
        let revision = state.nav.revision();
        if self.revision != Some(revision) {
            debug!(page = state.nav.page().id().as_str(), revision, "view_mounted");
            self.view = Self::build(state);
            self.revision = Some(revision);
        }
    }

    fn build(state: &AppState) -> Box<dyn View> {
        match state.nav.page() {
            Page::Home => Box::new(Home::default()),
            Page::About => Box::new(About),
            Page::Doctors => Box::new(Doctors::default()),
            Page::Departments => Box::new(Departments::default()),
            Page::DoctorDetail(doctor) => Box::new(DoctorDetail::new(doctor)),
            Page::DepartmentDetail(department) => Box::new(DepartmentDetail::new(department)),
            Page::Contact => Box::new(Contact::default()),
            Page::Privacy => Box::new(Privacy),
            Page::Appointment => Box::new(Appointment::new(
                state.nav.preselected_department(),
                calendar::today(),
            )),
            Page::Confirmation => Box::new(Confirmation),
            Page::Unresolved { .. } => Box::new(Blank),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        self.view.render(f, area, state);
    }

    pub fn render_chat(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        if state.ui.chat_open {
            self.chat.render(f, area, state);
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        if state.ui.chat_open {
            self.chat.handle_input(key, state)
        } else {
            self.view.handle_input(key, state)
        }
    }

    pub fn handle_paste(&mut self, text: &str, state: &AppState) -> bool {
        if state.ui.chat_open {
            self.chat.handle_paste(text)
        } else {
            self.view.handle_paste(text)
        }
    }

    pub fn hints(&self, state: &AppState) -> &'static str {
        if state.ui.chat_open {
            self.chat.hints()
        } else {
            self.view.hints()
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{navigation::PageId, ui::message::AppMessage};

    fn rendered(router: &mut Router, state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                router.render(f, area, state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn unknown_doctor_renders_nothing() {
        let mut state = AppState::default();
        state.update(AppMessage::Navigate(PageId::DoctorDetail, Some("404".into())));

        let mut router = Router::new();
        router.sync(&state);

        assert!(rendered(&mut router, &state).trim().is_empty());
    }

    #[test]
    fn known_doctor_renders_profile() {
        let mut state = AppState::default();
        state.update(AppMessage::Navigate(PageId::DoctorDetail, Some("1".into())));

        let mut router = Router::new();
        router.sync(&state);

        assert!(rendered(&mut router, &state).contains("Dr. Ananya Rao"));
    }

    #[test]
    fn chat_panel_takes_input_when_open() {
        let mut state = AppState::default();
        let mut router = Router::new();
        router.sync(&state);
        state.update(AppMessage::ToggleChat);

        let key = KeyEvent::new(
            ratatui::crossterm::event::KeyCode::Char('1'),
            ratatui::crossterm::event::KeyModifiers::NONE,
        );
        assert_eq!(router.handle_input(key, &state), Some(Action::None));
    }
}
