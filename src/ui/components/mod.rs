pub mod calendar;
pub mod sidebar;
pub mod spinner;
pub mod text_field;
