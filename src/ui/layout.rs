use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    calendar,
    navigation::Page,
    ui::{app::App, components::sidebar::Sidebar, state::SIDEBAR},
    util::colors,
};

const SIDEBAR_WIDTH: u16 = 25;
const CHAT_WIDTH: u16 = 56;
const CHAT_HEIGHT: u16 = 22;

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND).fg(colors::TEXT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let main_area = chunks[0];
        let status_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED))
            .title(Span::styled(
                " ♥ Nova Campus ",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED))
            .title(page_title(self.app.state.nav.page()));

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let items: Vec<&str> = SIDEBAR.iter().map(|(label, _)| *label).collect();
        f.render_widget(
            Sidebar::new(items, self.app.state.sidebar_index()),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state);

        if self.app.state.ui.chat_open {
            let chat_area = chat_area(content_area);
            f.render_widget(Clear, chat_area);
            self.app.router.render_chat(f, chat_area, &self.app.state);
        }

        f.render_widget(self.status_line(), status_area);
    }

    fn status_line(&self) -> Paragraph<'static> {
        let state = &self.app.state;
        let mut spans = Vec::new();

        if let Some(status) = &state.ui.status {
            spans.push(Span::styled(
                format!(" {status} "),
                Style::default().fg(colors::SECONDARY),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", self.app.router.hints(state)),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        if state.chat.is_pending() && !state.ui.chat_open {
            spans.push(Span::styled(
                "· assistant is typing (F1) ",
                Style::default().fg(colors::PRIMARY),
            ));
        }

        spans.push(Span::styled(
            format!(
                "· © {} Nova Medical Campus",
                calendar::today().year()
            ),
            Style::default().fg(colors::MUTED),
        ));

        Paragraph::new(Line::from(spans))
    }
}

pub fn page_title(page: &Page) -> String {
    match page {
        Page::Home => " Home ".to_string(),
        Page::About => " About Nova Medical ".to_string(),
        Page::Doctors => " Meet Our Medical Faculty ".to_string(),
        Page::Departments => " Centers of Excellence ".to_string(),
        Page::DoctorDetail(doctor) => format!(" {} ", doctor.name),
        Page::DepartmentDetail(department) => format!(" {} ", department.name),
        Page::Contact => " Get in Touch ".to_string(),
        Page::Privacy => " Privacy Policy ".to_string(),
        Page::Appointment => " Appointment Request ".to_string(),
        Page::Confirmation => " Request Received ".to_string(),
        Page::Unresolved { .. } => String::new(),
    }
}

pub fn chat_area(content: Rect) -> Rect {
    let width = CHAT_WIDTH.min(content.width);
    let height = CHAT_HEIGHT.min(content.height);
    Rect {
        x: content.x + content.width - width,
        y: content.y + content.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::PageId;

    #[test]
    fn chat_area_hugs_bottom_right() {
        let content = Rect::new(25, 0, 100, 40);
        let area = chat_area(content);
        assert_eq!(area, Rect::new(69, 18, 56, 22));

        let tiny = Rect::new(0, 0, 30, 10);
        assert_eq!(chat_area(tiny), tiny);
    }

    #[test]
    fn unresolved_pages_have_no_title() {
        let page = Page::resolve(PageId::DepartmentDetail, Some("nope"));
        assert!(page_title(&page).is_empty());
        assert_eq!(page_title(&Page::resolve(PageId::DoctorDetail, Some("4"))), " Dr. Julian Chen ");
    }
}
