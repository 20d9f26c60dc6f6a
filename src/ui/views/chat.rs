use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    catalog::EMERGENCY_PHONE,
    chat::{ChatMessage, Role},
    ui::{
        components::{
            spinner::Spinner,
            text_field::{TextField, edit_text},
        },
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

#[derive(Default)]
pub struct ChatPanel {
    input: String,
}

impl ChatPanel {
    pub fn input(&self) -> &str {
        &self.input
    }

    fn transcript(messages: &[ChatMessage]) -> Vec<Line<'_>> {
        let mut lines = Vec::with_capacity(messages.len() * 3);
        for message in messages {
            let (label, style) = match message.role {
                Role::User => ("You", Style::default().fg(colors::SECONDARY)),
                Role::Assistant => ("Nova AI", Style::default().fg(colors::PRIMARY)),
            };
            lines.push(Line::styled(label, style.add_modifier(Modifier::BOLD)));
            lines.extend(message.text.lines().map(Line::from));
            lines.push(Line::default());
        }
        lines
    }
}

// Rows the transcript occupies once wrapped to `width`.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| {
            let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(width).max(1)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl View for ChatPanel {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::PRIMARY))
            .style(Style::default().bg(colors::BACKGROUND))
            .title(Span::styled(
                " Nova AI Assistant ",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::styled(" ● Online ", Style::default().fg(colors::SECONDARY)));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(inner);

        let lines = Self::transcript(state.chat.messages());
        // Keep the newest message in view.
        let scroll = wrapped_height(&lines, chunks[0].width).saturating_sub(chunks[0].height);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            chunks[0],
        );

        if state.chat.is_pending() {
            f.render_widget(
                Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Nova AI is typing..."),
                chunks[1],
            );
        } else {
            f.render_widget(
                Paragraph::new(format!("AI guidance only. Emergencies: {EMERGENCY_PHONE}"))
                    .style(Style::default().fg(colors::MUTED)),
                chunks[1],
            );
        }

        f.render_widget(
            TextField::new(" Message ", &self.input)
                .placeholder("Ask a health question...")
                .focused(true),
            chunks[2],
        );
    }

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Esc => return Some(AppMessage::CloseChat.into()),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppMessage::ClearChat.into());
            }
            KeyCode::Enter => {
                // Input is kept while a reply is outstanding.
                if self.input.trim().is_empty() || state.chat.is_pending() {
                    return Some(Action::None);
                }
                let text = std::mem::take(&mut self.input);
                return Some(AppMessage::SendChat(text).into());
            }
            _ => {
                edit_text(&mut self.input, key);
            }
        }
        // The panel is modal.
        Some(Action::None)
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        self.input.extend(text.chars().map(|c| if c == '\n' { ' ' } else { c }));
        true
    }

    fn hints(&self) -> &'static str {
        "Enter send · Ctrl+L clear · Esc close"
    }
}
