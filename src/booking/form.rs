use thiserror::Error;

use super::{BookingSummary, TIME_SLOTS, cycle, time_slot_index};
use crate::catalog::{self, DEPARTMENTS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a date from the calendar")]
    MissingDate,

    #[error("Patient full name is required")]
    MissingName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Please choose a time slot")]
    MissingTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Department,
    Date,
    Time,
    Reason,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Department,
        FormField::Date,
        FormField::Time,
        FormField::Reason,
        FormField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Patient Full Name",
            FormField::Email => "Email Address",
            FormField::Department => "Preferred Department",
            FormField::Date => "Availability Date",
            FormField::Time => "Preferred Time",
            FormField::Reason => "Health Context / Reason for Visit",
            FormField::Submit => "Confirm Booking Request",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Reason)
    }

    pub fn next(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub reason: String,
    department: Option<usize>,
    time: Option<usize>,
    focus: FormField,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            reason: String::new(),
            department: None,
            time: None,
            focus: FormField::Name,
        }
    }
}

impl AppointmentForm {
    // Unknown ids leave the department unselected, like a select with no matching option.
    pub fn with_department(department_id: Option<&str>) -> Self {
        Self {
            department: department_id.and_then(catalog::department_index),
            ..Self::default()
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn department(&self) -> Option<&'static str> {
        self.department.map(|i| DEPARTMENTS[i].id)
    }

    pub fn department_name(&self) -> Option<&'static str> {
        self.department.map(|i| DEPARTMENTS[i].name)
    }

    pub fn cycle_department(&mut self, delta: i32) {
        self.department = cycle(self.department, DEPARTMENTS.len(), delta);
    }

    pub fn time_slot(&self) -> Option<&'static str> {
        self.time.map(|i| TIME_SLOTS[i])
    }

    pub fn cycle_time(&mut self, delta: i32) {
        self.time = cycle(self.time, TIME_SLOTS.len(), delta);
    }

    pub fn select_time(&mut self, slot: &str) -> bool {
        match time_slot_index(slot) {
            Some(i) => {
                self.time = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Reason => Some(&mut self.reason),
            _ => None,
        }
    }

    pub fn can_submit(selected_date: Option<&str>) -> bool {
        selected_date.is_some_and(|d| !d.is_empty())
    }

    pub fn submit(&self, selected_date: Option<&str>) -> Result<BookingSummary, FormError> {
        let date = selected_date
            .filter(|d| !d.is_empty())
            .ok_or(FormError::MissingDate)?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        let time = self.time_slot().ok_or(FormError::MissingTime)?;

        Ok(BookingSummary {
            name: name.to_string(),
            email: email.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        })
    }
}

pub(crate) fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
