use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

pub fn field_block(label: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::MUTED)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            label,
            Style::default()
                .fg(colors::NEUTRAL)
                .add_modifier(Modifier::BOLD),
        ))
}

impl<'a> Widget for TextField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = field_block(self.label, self.focused);
        let inner_width = block.inner(area).width as usize;

        let line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(colors::MUTED),
            ))
        } else {
            // Keep the tail visible while typing past the edge.
            let mut visible = self.value;
            while visible.width() + 1 > inner_width && !visible.is_empty() {
                let mut chars = visible.chars();
                chars.next();
                visible = chars.as_str();
            }
            let mut spans = vec![Span::raw(visible)];
            if self.focused {
                spans.push(Span::styled("▏", Style::default().fg(colors::SECONDARY)));
            }
            Line::from(spans)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

pub fn edit_text(target: &mut String, key: ratatui::crossterm::event::KeyEvent) -> bool {
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.push(c);
            true
        }
        KeyCode::Backspace => {
            target.pop();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn edit_text_types_and_deletes() {
        let mut value = String::new();
        assert!(edit_text(&mut value, KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)));
        assert!(edit_text(&mut value, KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE)));
        assert!(edit_text(&mut value, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!edit_text(&mut value, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!edit_text(&mut value, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(value, "J");
    }
}
