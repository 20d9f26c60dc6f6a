//! Page state machine.
//!
//! [`Page`] carries resolved catalog entries for detail pages, so a view never
//! holds a raw id. Ids that do not resolve land on [`Page::Unresolved`], which
//! renders as an empty pane.

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    booking::BookingSummary,
    catalog::{self, Department, Doctor},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Doctors,
    Departments,
    DoctorDetail,
    DepartmentDetail,
    Contact,
    Privacy,
    Appointment,
    Confirmation,
}

impl PageId {
    pub const ALL: [PageId; 10] = [
        PageId::Home,
        PageId::About,
        PageId::Doctors,
        PageId::Departments,
        PageId::DoctorDetail,
        PageId::DepartmentDetail,
        PageId::Contact,
        PageId::Privacy,
        PageId::Appointment,
        PageId::Confirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Doctors => "doctors",
            PageId::Departments => "departments",
            PageId::DoctorDetail => "doctorDetail",
            PageId::DepartmentDetail => "departmentDetail",
            PageId::Contact => "contact",
            PageId::Privacy => "privacy",
            PageId::Appointment => "appointment",
            PageId::Confirmation => "confirmation",
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, PageId::DoctorDetail | PageId::DepartmentDetail)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Doctors,
    Departments,
    DoctorDetail(&'static Doctor),
    DepartmentDetail(&'static Department),
    Contact,
    Privacy,
    Appointment,
    Confirmation,
    Unresolved { page: PageId, id: Option<String> },
}

impl Page {
    pub fn resolve(page: PageId, id: Option<&str>) -> Page {
        match page {
            PageId::Home => Page::Home,
            PageId::About => Page::About,
            PageId::Doctors => Page::Doctors,
            PageId::Departments => Page::Departments,
            PageId::DoctorDetail => id
                .and_then(catalog::doctor)
                .map(Page::DoctorDetail)
                .unwrap_or_else(|| Page::unresolved(page, id)),
            PageId::DepartmentDetail => id
                .and_then(catalog::department)
                .map(Page::DepartmentDetail)
                .unwrap_or_else(|| Page::unresolved(page, id)),
            PageId::Contact => Page::Contact,
            PageId::Privacy => Page::Privacy,
            PageId::Appointment => Page::Appointment,
            PageId::Confirmation => Page::Confirmation,
        }
    }

    fn unresolved(page: PageId, id: Option<&str>) -> Page {
        warn!(page = page.as_str(), id = ?id, "navigation_unresolved_entity");
        Page::Unresolved {
            page,
            id: id.map(str::to_string),
        }
    }

    pub fn id(&self) -> PageId {
        match self {
            Page::Home => PageId::Home,
            Page::About => PageId::About,
            Page::Doctors => PageId::Doctors,
            Page::Departments => PageId::Departments,
            Page::DoctorDetail(_) => PageId::DoctorDetail,
            Page::DepartmentDetail(_) => PageId::DepartmentDetail,
            Page::Contact => PageId::Contact,
            Page::Privacy => PageId::Privacy,
            Page::Appointment => PageId::Appointment,
            Page::Confirmation => PageId::Confirmation,
            Page::Unresolved { page, .. } => *page,
        }
    }

    pub fn entity_id(&self) -> Option<&'static str> {
        match self {
            Page::DoctorDetail(doctor) => Some(doctor.id),
            Page::DepartmentDetail(department) => Some(department.id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    page: Page,
    preselected_department: Option<String>,
    selected_date: Option<String>,
    last_booking: Option<BookingSummary>,
    revision: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            preselected_department: None,
            selected_date: None,
            last_booking: None,
            revision: 0,
        }
    }
}

impl NavigationState {
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Entity id of the current detail page; `None` everywhere else.
    pub fn selected_id(&self) -> Option<&'static str> {
        self.page.entity_id()
    }

    pub fn preselected_department(&self) -> Option<&str> {
        self.preselected_department.as_deref()
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn last_booking(&self) -> Option<&BookingSummary> {
        self.last_booking.as_ref()
    }

    /// Bumped on every transition, including navigating to the current page.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn navigate(&mut self, page: PageId, id: Option<&str>) {
        let next = Page::resolve(page, id);

        if self.page.id() == PageId::Confirmation && page != PageId::Confirmation {
            self.last_booking = None;
        }

        debug!(from = self.page.id().as_str(), to = page.as_str(), id = ?id, "navigate");
        self.page = next;
        self.revision += 1;
    }

    pub fn book_with_context(&mut self, department_id: Option<&str>) {
        self.preselected_department = department_id.map(str::to_string);
        self.navigate(PageId::Appointment, None);
    }

    pub fn record_booking(&mut self, summary: BookingSummary) {
        self.last_booking = Some(summary);
    }

    pub fn select_date(&mut self, date: String) {
        self.selected_date = Some(date);
    }
}
