use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{heading, muted};
use crate::{
    booking::{ContactField, ContactForm},
    catalog::{CAMPUS_ADDRESS, EMERGENCY_PHONE, GENERAL_PHONE},
    ui::{
        components::text_field::{TextField, edit_text},
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[derive(Default)]
pub struct Contact {
    form: ContactForm,
    error: Option<&'static str>,
}

impl Contact {
    fn field(&self, f: &mut Frame, area: Rect, field: ContactField) {
        let widget = TextField::new(field.placeholder(), self.form.value(field))
            .placeholder(field.placeholder())
            .focused(self.form.focus() == field);
        f.render_widget(widget, area);
    }
}

impl View for Contact {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                heading("Get in Touch"),
                muted("We're here to help 24/7 with your medical inquiries."),
                Line::default(),
                Line::from(vec![
                    Span::styled("Campus Address  ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(CAMPUS_ADDRESS),
                ]),
                Line::from(vec![
                    Span::styled("Phone Support   ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!("{EMERGENCY_PHONE} (Emergency)")),
                ]),
                Line::from(format!("                {GENERAL_PHONE} (General Inquiry)")),
            ]),
            chunks[0],
        );

        let names = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.field(f, names[0], ContactField::FirstName);
        self.field(f, names[1], ContactField::LastName);
        self.field(f, chunks[2], ContactField::Email);
        self.field(f, chunks[3], ContactField::Message);

        let send_focused = self.form.focus() == ContactField::Send;
        let send_style = if send_focused {
            Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        f.render_widget(
            Paragraph::new(ContactField::Send.placeholder())
                .alignment(Alignment::Center)
                .style(send_style)
                .block(Block::default().borders(Borders::ALL).border_style(send_style)),
            chunks[4],
        );

        if let Some(error) = self.error {
            f.render_widget(
                Paragraph::new(error).style(Style::default().fg(colors::DANGER)),
                chunks[5],
            );
        }
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Some(Action::None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Some(Action::None)
            }
            KeyCode::Enter if self.form.focus() == ContactField::Send => {
                if self.form.is_sendable() {
                    Some(AppMessage::SubmitContact.into())
                } else {
                    self.error = Some(INVALID_EMAIL);
                    Some(Action::None)
                }
            }
            KeyCode::Enter => {
                self.form.focus_next();
                Some(Action::None)
            }
            _ => {
                let text = self.form.focused_text_mut()?;
                if edit_text(text, key) {
                    self.error = None;
                    Some(Action::None)
                } else {
                    None
                }
            }
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        match self.form.focused_text_mut() {
            Some(target) => {
                target.push_str(text);
                true
            }
            None => false,
        }
    }

    fn hints(&self) -> &'static str {
        "Tab next field · Enter send"
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    fn press(view: &mut Contact, code: KeyCode) -> Option<Action> {
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE), &AppState::default())
    }

    fn type_text(view: &mut Contact, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut view = Contact::default();
        type_text(&mut view, "Jane");
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "Doe");

        assert_eq!(view.form.value(ContactField::FirstName), "Jane");
        assert_eq!(view.form.value(ContactField::LastName), "Doe");
    }

    #[test]
    fn send_submits_and_goes_home() {
        let mut view = Contact::default();
        for _ in 0..4 {
            press(&mut view, KeyCode::Tab);
        }
        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Some(Action::Dispatch(AppMessage::SubmitContact))
        );
    }

    #[test]
    fn malformed_email_blocks_send() {
        let mut view = Contact::default();
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "not-an-email");
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Tab);

        assert_eq!(press(&mut view, KeyCode::Enter), Some(Action::None));
        assert_eq!(view.error, Some(INVALID_EMAIL));
    }

    #[test]
    fn global_keys_fall_through_on_send() {
        let mut view = Contact::default();
        press(&mut view, KeyCode::BackTab);
        assert_eq!(press(&mut view, KeyCode::Char('q')), None);
    }
}
