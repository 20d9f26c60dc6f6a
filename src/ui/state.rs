use tracing::info;

use crate::{
    chat::ChatSession,
    navigation::{NavigationState, PageId},
    ui::message::AppMessage,
};

pub const SIDEBAR: [(&str, PageId); 7] = [
    ("Home", PageId::Home),
    ("About", PageId::About),
    ("Doctors", PageId::Doctors),
    ("Departments", PageId::Departments),
    ("Contact", PageId::Contact),
    ("Privacy Policy", PageId::Privacy),
    ("Book Appointment", PageId::Appointment),
];

const CONTACT_THANKS: &str = "Thank you for reaching out. Our concierge team will be in touch.";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavigationState,
    pub chat: ChatSession,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub scroll: u16,
    pub chat_open: bool,
    pub status: Option<String>,
}

/// Side effects the shell runs on behalf of the state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    AskAssistant { generation: u64, query: String },
    CancelChat,
}

impl AppState {
    pub fn sidebar_index(&self) -> Option<usize> {
        let page = match self.nav.page().id() {
            PageId::DoctorDetail => PageId::Doctors,
            PageId::DepartmentDetail => PageId::Departments,
            PageId::Confirmation => PageId::Appointment,
            other => other,
        };
        SIDEBAR.iter().position(|(_, p)| *p == page)
    }

    pub fn update(&mut self, msg: AppMessage) -> Option<Command> {
        match msg {
            AppMessage::Quit => return Some(Command::Quit),
            AppMessage::ScrollUp => self.ui.scroll = self.ui.scroll.saturating_sub(1),
            AppMessage::ScrollDown => self.ui.scroll = self.ui.scroll.saturating_add(1),
            AppMessage::Navigate(page, id) => self.navigate(page, id.as_deref()),
            AppMessage::BookWithContext(department) => {
                self.nav.book_with_context(department.as_deref());
                self.after_transition();
            }
            AppMessage::NextSidebarItem => self.step_sidebar(1),
            AppMessage::PreviousSidebarItem => self.step_sidebar(-1),
            AppMessage::SetSidebarIndex(index) => {
                if let Some((_, page)) = SIDEBAR.get(index) {
                    self.navigate(*page, None);
                }
            }
            AppMessage::SelectDate(date) => self.nav.select_date(date),
            AppMessage::SubmitBooking(summary) => {
                info!(date = summary.date.as_str(), time = summary.time.as_str(), "booking_recorded");
                self.nav.record_booking(summary);
                self.navigate(PageId::Confirmation, None);
            }
            AppMessage::SubmitContact => {
                self.navigate(PageId::Home, None);
                self.ui.status = Some(CONTACT_THANKS.to_string());
            }
            AppMessage::ToggleChat => self.ui.chat_open = !self.ui.chat_open,
            AppMessage::CloseChat => self.ui.chat_open = false,
            AppMessage::SendChat(text) => {
                return self.chat.submit(&text).map(|generation| Command::AskAssistant {
                    generation,
                    query: text.trim().to_string(),
                });
            }
            AppMessage::ClearChat => {
                self.chat.reset();
                return Some(Command::CancelChat);
            }
            AppMessage::ChatReplied { generation, reply } => {
                self.chat.receive(generation, reply);
            }
            AppMessage::Status(status) => self.ui.status = Some(status),
        }
        None
    }

    fn navigate(&mut self, page: PageId, id: Option<&str>) {
        self.nav.navigate(page, id);
        self.after_transition();
    }

    // Every page change starts at the top of the content pane.
    fn after_transition(&mut self) {
        self.ui.scroll = 0;
        self.ui.status = None;
    }

    fn step_sidebar(&mut self, delta: i32) {
        let len = SIDEBAR.len() as i32;
        let next = match self.sidebar_index() {
            Some(i) => (i as i32 + delta).rem_euclid(len),
            None => 0,
        };
        self.navigate(SIDEBAR[next as usize].1, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Page;

    #[test]
    fn navigation_resets_scroll() {
        let mut state = AppState::default();
        state.update(AppMessage::ScrollDown);
        state.update(AppMessage::ScrollDown);
        assert_eq!(state.ui.scroll, 2);

        state.update(AppMessage::Navigate(PageId::About, None));
        assert_eq!(state.ui.scroll, 0);

        state.update(AppMessage::ScrollDown);
        state.update(AppMessage::BookWithContext(None));
        assert_eq!(state.ui.scroll, 0);
    }

    #[test]
    fn scroll_up_saturates() {
        let mut state = AppState::default();
        state.update(AppMessage::ScrollUp);
        assert_eq!(state.ui.scroll, 0);
    }

    #[test]
    fn unknown_doctor_does_not_fail() {
        let mut state = AppState::default();
        assert_eq!(
            state.update(AppMessage::Navigate(PageId::DoctorDetail, Some("404".into()))),
            None
        );
        assert!(matches!(state.nav.page(), Page::Unresolved { .. }));
        assert_eq!(state.sidebar_index(), Some(2));
    }

    #[test]
    fn sidebar_cycles_and_wraps() {
        let mut state = AppState::default();
        state.update(AppMessage::PreviousSidebarItem);
        assert_eq!(state.nav.page(), &Page::Appointment);

        state.update(AppMessage::NextSidebarItem);
        assert_eq!(state.nav.page(), &Page::Home);

        state.update(AppMessage::SetSidebarIndex(5));
        assert_eq!(state.nav.page(), &Page::Privacy);

        state.update(AppMessage::SetSidebarIndex(42));
        assert_eq!(state.nav.page(), &Page::Privacy);
    }

    #[test]
    fn detail_pages_highlight_their_list() {
        let mut state = AppState::default();
        state.update(AppMessage::Navigate(PageId::DepartmentDetail, Some("neuro".into())));
        assert_eq!(state.sidebar_index(), Some(3));
    }

    #[test]
    fn contact_submission_returns_home_with_status() {
        let mut state = AppState::default();
        state.update(AppMessage::Navigate(PageId::Contact, None));
        state.update(AppMessage::SubmitContact);
        assert_eq!(state.nav.page(), &Page::Home);
        assert_eq!(state.ui.status.as_deref(), Some(CONTACT_THANKS));
    }

    #[test]
    fn chat_send_produces_one_request_at_a_time() {
        let mut state = AppState::default();

        let first = state.update(AppMessage::SendChat(" Where is cardiology? ".into()));
        assert_eq!(
            first,
            Some(Command::AskAssistant {
                generation: 1,
                query: "Where is cardiology?".to_string(),
            })
        );
        assert_eq!(state.update(AppMessage::SendChat("again".into())), None);

        state.update(AppMessage::ChatReplied {
            generation: 1,
            reply: "Second floor.".into(),
        });
        assert!(!state.chat.is_pending());
        assert_eq!(state.chat.messages().last().unwrap().text, "Second floor.");
    }

    #[test]
    fn clearing_chat_cancels_and_ignores_late_reply() {
        let mut state = AppState::default();
        state.update(AppMessage::SendChat("hello".into()));
        assert_eq!(state.update(AppMessage::ClearChat), Some(Command::CancelChat));

        state.update(AppMessage::ChatReplied {
            generation: 1,
            reply: "late".into(),
        });
        assert_eq!(state.chat.messages().len(), 1);
    }

    #[test]
    fn quit_is_a_command() {
        let mut state = AppState::default();
        assert_eq!(state.update(AppMessage::Quit), Some(Command::Quit));
    }
}
