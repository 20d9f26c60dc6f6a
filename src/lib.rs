pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod event;
pub mod navigation;
pub mod ui;
pub mod util;
