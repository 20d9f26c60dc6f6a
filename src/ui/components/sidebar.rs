use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::util::colors;

pub struct Sidebar<'a> {
    items: Vec<&'a str>,
    selected_index: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: Vec<&'a str>, selected_index: Option<usize>) -> Self {
        Self {
            items,
            selected_index,
        }
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let last = self.items.len().saturating_sub(1);
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = Some(i) == self.selected_index;
                let style = match (selected, i == last) {
                    (true, _) => Style::default()
                        .fg(colors::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                    // Booking is the call to action.
                    (false, true) => Style::default().fg(colors::PRIMARY),
                    (false, false) => Style::default().fg(colors::NEUTRAL),
                };
                let marker = if selected { "›" } else { " " };
                ListItem::new(format!("{marker} {} {item}", i + 1)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
