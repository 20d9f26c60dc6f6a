use chrono::NaiveDate;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use super::{heading, muted, render_scrolled};
use crate::{
    booking::{AppointmentForm, FormError, FormField},
    calendar::Calendar,
    catalog::EMERGENCY_PHONE,
    ui::{
        components::{
            calendar::CalendarWidget,
            text_field::{TextField, edit_text, field_block},
        },
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

// Header plus six bordered form rows and the error line.
const PAGE_HEIGHT: u16 = 2 + 6 * 3 + 1;

pub struct Appointment {
    form: AppointmentForm,
    calendar: Calendar,
    today: NaiveDate,
    error: Option<FormError>,
}

impl Appointment {
    pub fn new(preselected_department: Option<&str>, today: NaiveDate) -> Self {
        Self {
            form: AppointmentForm::with_department(preselected_department),
            calendar: Calendar::new(today),
            today,
            error: None,
        }
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    fn handle_date_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.calendar.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.calendar.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.calendar.move_cursor(-7),
            KeyCode::Down | KeyCode::Char('j') => self.calendar.move_cursor(7),
            KeyCode::Char('[') => self.calendar.shift_month(-1),
            KeyCode::Char(']') => self.calendar.shift_month(1),
            KeyCode::Enter => {
                return match self.calendar.select_cursor(self.today) {
                    Some(date) => {
                        self.error = None;
                        Some(AppMessage::SelectDate(date).into())
                    }
                    None => {
                        // Past days are inert.
                        debug!(day = self.calendar.cursor_day(), "calendar_past_day_ignored");
                        Some(Action::None)
                    }
                };
            }
            _ => return self.handle_navigation_key(key),
        }
        Some(Action::None)
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ => return None,
        }
        Some(Action::None)
    }

    fn submit(&mut self, state: &AppState) -> Action {
        match self.form.submit(state.nav.selected_date()) {
            Ok(summary) => {
                self.error = None;
                AppMessage::SubmitBooking(summary).into()
            }
            Err(e) => {
                debug!(error = %e, "booking_rejected");
                self.error = Some(e);
                Action::None
            }
        }
    }

    fn render_select(
        &self,
        buf: &mut Buffer,
        area: Rect,
        field: FormField,
        value: Option<&str>,
        empty: &str,
    ) {
        let focused = self.form.focus() == field;
        let line = match value {
            Some(value) => Line::from(vec![
                Span::styled("‹ ", Style::default().fg(colors::MUTED)),
                Span::raw(value.to_string()),
                Span::styled(" ›", Style::default().fg(colors::MUTED)),
            ]),
            None => Line::styled(empty.to_string(), Style::default().fg(colors::MUTED)),
        };
        Paragraph::new(line)
            .block(field_block(field.label(), focused))
            .render(area, buf);
    }

    fn render_form(&self, buf: &mut Buffer, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let focus = self.form.focus();
        TextField::new(FormField::Name.label(), &self.form.name)
            .placeholder("e.g. Margaret Thompson")
            .focused(focus == FormField::Name)
            .render(chunks[0], buf);
        TextField::new(FormField::Email.label(), &self.form.email)
            .placeholder("your@email.com")
            .focused(focus == FormField::Email)
            .render(chunks[1], buf);
        self.render_select(
            buf,
            chunks[2],
            FormField::Department,
            self.form.department_name(),
            "Select Department",
        );
        self.render_select(
            buf,
            chunks[3],
            FormField::Time,
            self.form.time_slot(),
            "Choose Time Slot",
        );
        TextField::new(FormField::Reason.label(), &self.form.reason)
            .placeholder("Briefly describe your symptoms or reason for visit...")
            .focused(focus == FormField::Reason)
            .render(chunks[4], buf);

        let enabled = AppointmentForm::can_submit(state.nav.selected_date());
        let submit_style = match (enabled, focus == FormField::Submit) {
            (false, _) => Style::default().fg(colors::MUTED),
            (true, true) => Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(colors::PRIMARY),
        };
        Paragraph::new(FormField::Submit.label())
            .alignment(Alignment::Center)
            .style(submit_style)
            .block(field_block("", focus == FormField::Submit))
            .render(chunks[5], buf);

        if let Some(error) = &self.error {
            Paragraph::new(error.to_string())
                .style(Style::default().fg(colors::DANGER))
                .render(chunks[6], buf);
        }
    }

    fn render_schedule(&self, buf: &mut Buffer, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(area);

        let focused = self.form.focus() == FormField::Date;
        let block = field_block(FormField::Date.label(), focused);
        let inner = block.inner(chunks[0]);
        block.render(chunks[0], buf);
        CalendarWidget::new(&self.calendar, state.nav.selected_date(), self.today)
            .focused(focused)
            .render(inner, buf);

        let summary = match state.nav.selected_date() {
            Some(date) => format!("Date: {date}"),
            None => "Please select a date from the calendar.".to_string(),
        };
        Paragraph::new(vec![
            heading("Schedule Summary"),
            Line::from(summary),
            muted("Faculty availability is confirmed after request submission."),
            Line::default(),
            Line::from(vec![
                Span::styled("Emergency Assistance  ", Style::default().fg(colors::NEUTRAL)),
                Span::styled(EMERGENCY_PHONE, Style::default().fg(colors::DANGER)),
            ]),
        ])
        .render(chunks[1], buf);
    }

    fn render_page(&self, area: Rect, buf: &mut Buffer, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        Paragraph::new(vec![
            heading("Appointment Request"),
            muted("Your Journey to Wellness Starts Here."),
        ])
        .render(rows[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        self.render_form(buf, columns[0], state);
        self.render_schedule(buf, columns[1], state);
    }
}

impl View for Appointment {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        render_scrolled(f, area, PAGE_HEIGHT, state.ui.scroll, |canvas, buf| {
            self.render_page(canvas, buf, state)
        });
    }

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let field = self.form.focus();
        if field == FormField::Date {
            return self.handle_date_key(key);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                return Some(Action::None);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                return Some(Action::None);
            }
            KeyCode::Enter if field == FormField::Submit => return Some(self.submit(state)),
            KeyCode::Enter => {
                self.form.focus_next();
                return Some(Action::None);
            }
            _ => {}
        }

        match (field, key.code) {
            (FormField::Department, KeyCode::Left) => self.form.cycle_department(-1),
            (FormField::Department, KeyCode::Right) => self.form.cycle_department(1),
            (FormField::Time, KeyCode::Left) => self.form.cycle_time(-1),
            (FormField::Time, KeyCode::Right) => self.form.cycle_time(1),
            _ => {
                let text = self.form.focused_text_mut()?;
                if !edit_text(text, key) {
                    return None;
                }
            }
        }
        self.error = None;
        Some(Action::None)
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
        match self.form.focus() {
            FormField::Date => "←→↑↓ move day · [ ] month · Enter select · Tab next",
            FormField::Department | FormField::Time => "←→ choose · Tab next field",
            FormField::Submit => "Enter confirm booking · Shift+Tab back",
            _ => "type to edit · Tab next field",
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, crossterm::event::KeyModifiers};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn press(view: &mut Appointment, state: &AppState, code: KeyCode) -> Option<Action> {
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn focus(view: &mut Appointment, field: FormField) {
        view.form.set_focus(field);
    }

    #[test]
    fn preselected_department_is_shown() {
        let view = Appointment::new(Some("heart"), date(2025, 6, 1));
        assert_eq!(view.form().department(), Some("heart"));
    }

    #[test]
    fn enter_selects_cursor_day() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 1));
        focus(&mut view, FormField::Date);

        press(&mut view, &state, KeyCode::Down);
        press(&mut view, &state, KeyCode::Down);
        assert_eq!(
            press(&mut view, &state, KeyCode::Enter),
            Some(Action::Dispatch(AppMessage::SelectDate("2025-06-15".to_string())))
        );
    }

    #[test]
    fn past_day_is_inert() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 10));
        focus(&mut view, FormField::Date);

        press(&mut view, &state, KeyCode::Left);
        assert_eq!(press(&mut view, &state, KeyCode::Enter), Some(Action::None));
    }

    #[test]
    fn month_keys_move_the_grid() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 10));
        focus(&mut view, FormField::Date);

        press(&mut view, &state, KeyCode::Char(']'));
        assert_eq!(view.calendar.displayed().title(), "July 2025");
        press(&mut view, &state, KeyCode::Char('['));
        press(&mut view, &state, KeyCode::Char('['));
        assert_eq!(view.calendar.displayed().title(), "May 2025");
    }

    #[test]
    fn submit_without_date_is_rejected() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 1));
        focus(&mut view, FormField::Submit);

        assert_eq!(press(&mut view, &state, KeyCode::Enter), Some(Action::None));
        assert_eq!(view.error(), Some(&FormError::MissingDate));
    }

    #[test]
    fn arrows_cycle_select_fields() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 1));

        focus(&mut view, FormField::Department);
        press(&mut view, &state, KeyCode::Right);
        assert_eq!(view.form().department(), Some("heart"));

        focus(&mut view, FormField::Time);
        press(&mut view, &state, KeyCode::Left);
        assert_eq!(view.form().time_slot(), Some("04:30 PM"));
    }

    fn rendered(view: &mut Appointment, state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, state);
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
    fn short_screens_scroll_to_the_submit_button() {
        let mut state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 1));
        let screen = rendered(&mut view, &state);
        assert!(screen.contains("Appointment Request"));
        assert!(!screen.contains("Confirm Booking Request"));

        for _ in 0..14 {
            state.update(AppMessage::ScrollDown);
        }
        let screen = rendered(&mut view, &state);
        assert!(screen.contains("Confirm Booking Request"));
        assert!(!screen.contains("Appointment Request"));
    }

    #[test]
    fn digits_fall_through_outside_text_fields() {
        let state = AppState::default();
        let mut view = Appointment::new(None, date(2025, 6, 1));

        assert_eq!(press(&mut view, &state, KeyCode::Char('3')), Some(Action::None));
        assert_eq!(view.form().name, "3");

        focus(&mut view, FormField::Time);
        assert_eq!(press(&mut view, &state, KeyCode::Char('3')), None);
    }
}
