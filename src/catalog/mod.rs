//! Read-only reference tables for the campus: doctors, departments,
//! testimonials and facilities. Everything here lives for the whole process.

mod data;

pub use data::{
    CAMPUS_ADDRESS, CORE_EXPERTISE, DEPARTMENTS, DOCTORS, EMERGENCY_PHONE, FACILITIES,
    GENERAL_PHONE, STATS, TESTIMONIALS,
};

const FEATURED_DEPARTMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience_years: u8,
    pub bio: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub quote: &'static str,
    pub treatment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn doctor(id: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.id == id)
}

pub fn department(id: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.id == id)
}

pub fn department_index(id: &str) -> Option<usize> {
    DEPARTMENTS.iter().position(|d| d.id == id)
}

pub fn featured_departments() -> &'static [Department] {
    &DEPARTMENTS[..FEATURED_DEPARTMENTS.min(DEPARTMENTS.len())]
}
