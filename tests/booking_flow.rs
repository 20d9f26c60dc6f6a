use chrono::NaiveDate;
use novacare::{
    booking::{BookingSummary, FormError},
    calendar::Calendar,
    navigation::{Page, PageId},
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
        views::Appointment,
    },
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn press(view: &mut Appointment, state: &mut AppState, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(Action::Dispatch(msg)) = view.handle_input(key, state) {
        state.update(msg);
    }
}

fn type_text(view: &mut Appointment, state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(view, state, KeyCode::Char(c));
    }
}

#[test]
fn department_booking_reaches_confirmation() {
    let mut state = AppState::default();
    state.update(AppMessage::Navigate(PageId::DepartmentDetail, Some("heart".into())));
    state.update(AppMessage::BookWithContext(Some("heart".into())));

    assert_eq!(state.nav.page(), &Page::Appointment);
    assert_eq!(state.nav.preselected_department(), Some("heart"));

    let mut view = Appointment::new(state.nav.preselected_department(), today());
    assert_eq!(view.form().department(), Some("heart"));

    // Name, Email, Department, Date, Time, Reason, Submit.
    type_text(&mut view, &mut state, "Jane Doe");
    press(&mut view, &mut state, KeyCode::Tab);
    type_text(&mut view, &mut state, "jane@example.com");
    press(&mut view, &mut state, KeyCode::Tab);
    press(&mut view, &mut state, KeyCode::Tab);

    // Two weeks down from the 1st is the 15th.
    press(&mut view, &mut state, KeyCode::Down);
    press(&mut view, &mut state, KeyCode::Down);
    press(&mut view, &mut state, KeyCode::Enter);
    assert_eq!(state.nav.selected_date(), Some("2025-06-15"));

    press(&mut view, &mut state, KeyCode::Tab);
    for _ in 0..3 {
        press(&mut view, &mut state, KeyCode::Right);
    }
    assert_eq!(view.form().time_slot(), Some("10:00 AM"));

    press(&mut view, &mut state, KeyCode::Tab);
    press(&mut view, &mut state, KeyCode::Tab);
    press(&mut view, &mut state, KeyCode::Enter);

    assert_eq!(state.nav.page(), &Page::Confirmation);
    assert_eq!(
        state.nav.last_booking(),
        Some(&BookingSummary {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            date: "2025-06-15".to_string(),
            time: "10:00 AM".to_string(),
        })
    );

    state.update(AppMessage::Navigate(PageId::Home, None));
    assert!(state.nav.last_booking().is_none());
}

#[test]
fn calendar_selection_feeds_the_state_container() {
    let mut state = AppState::default();
    state.update(AppMessage::BookWithContext(None));

    let calendar = Calendar::new(today());
    let date = calendar.select_day(15, today()).unwrap();
    state.update(AppMessage::SelectDate(date));

    assert_eq!(state.nav.selected_date(), Some("2025-06-15"));
    assert_eq!(state.nav.preselected_department(), None);
}

#[test]
fn past_days_leave_selection_untouched() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let mut state = AppState::default();
    state.update(AppMessage::SelectDate("2025-06-12".into()));

    let mut view = Appointment::new(None, today);
    for code in [KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Up, KeyCode::Enter] {
        press(&mut view, &mut state, code);
    }

    assert_eq!(state.nav.selected_date(), Some("2025-06-12"));
}

#[test]
fn unknown_ids_render_an_empty_detail_page() {
    let mut state = AppState::default();
    state.update(AppMessage::Navigate(PageId::DoctorDetail, Some("999".into())));

    assert!(matches!(
        state.nav.page(),
        Page::Unresolved {
            page: PageId::DoctorDetail,
            ..
        }
    ));
    assert_eq!(state.nav.selected_id(), None);

    // The app keeps working afterwards.
    state.update(AppMessage::Navigate(PageId::Doctors, None));
    assert_eq!(state.nav.page(), &Page::Doctors);
}

#[test]
fn incomplete_form_stays_on_appointment() {
    let mut state = AppState::default();
    state.update(AppMessage::BookWithContext(None));
    state.update(AppMessage::SelectDate("2025-06-15".into()));

    let mut view = Appointment::new(None, today());
    // Focus wraps from the name field back to the submit control.
    press(&mut view, &mut state, KeyCode::BackTab);
    press(&mut view, &mut state, KeyCode::Enter);

    assert_eq!(state.nav.page(), &Page::Appointment);
    assert_eq!(view.error(), Some(&FormError::MissingName));
}
