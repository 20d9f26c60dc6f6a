use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListState,
};

use super::{heading, muted, page, step_selection};
use crate::{
    catalog::{self, FACILITIES, STATS, TESTIMONIALS},
    navigation::PageId,
    ui::{
        message::AppMessage,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub struct Home {
    featured: ListState,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            featured: ListState::default().with_selected(Some(0)),
        }
    }
}

impl Home {
    fn hero(&self) -> Vec<Line<'static>> {
        vec![
            Line::styled(
                "✓ Accredited Center of Excellence",
                Style::default().fg(colors::SECONDARY),
            ),
            Line::default(),
            Line::styled(
                "Expertise You Trust.",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            heading("Care You Deserve."),
            Line::default(),
            muted(
                "Welcome to Nova Medical Campus. We combine state-of-the-art medical technology \
                 with a deeply personal approach to healing.",
            ),
            Line::default(),
            Line::from(vec![
                Span::styled("[b] Book Your Visit", Style::default().fg(colors::PRIMARY)),
                Span::raw("   "),
                Span::raw("[f] Find a Specialist →"),
            ]),
        ]
    }
}

impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = self.hero();

        lines.push(Line::default());
        lines.push(Line::from(
            STATS
                .iter()
                .flat_map(|stat| {
                    [
                        Span::styled(
                            stat.value,
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" {}   ", stat.label),
                            Style::default().fg(colors::PRIMARY),
                        ),
                    ]
                })
                .collect::<Vec<_>>(),
        ));

        lines.push(Line::default());
        lines.push(heading("Leading Departments"));
        lines.push(muted("World-class facilities across major disciplines. [e] Explore All →"));
        let selected = self.featured.selected();
        for (i, department) in catalog::featured_departments().iter().enumerate() {
            let style = if Some(i) == selected {
                Style::default()
                    .fg(colors::SECONDARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if Some(i) == selected { "› " } else { "  " };
            lines.push(Line::styled(
                format!("{marker}{} {}", department.icon, department.name),
                style,
            ));
            lines.push(muted(department.description));
        }

        lines.push(Line::default());
        lines.push(heading("Patient Stories"));
        for testimonial in TESTIMONIALS {
            lines.push(Line::from(format!("\"{}\"", testimonial.quote)));
            lines.push(Line::styled(
                format!("  {} · {}", testimonial.name, testimonial.treatment),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        lines.push(Line::default());
        lines.push(heading("Facilities"));
        for facility in FACILITIES {
            lines.push(Line::from(vec![
                Span::styled(facility.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" · "),
                Span::styled(facility.description, Style::default().fg(colors::NEUTRAL)),
            ]));
        }

        f.render_widget(page(lines, state), area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        let featured = catalog::featured_departments();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                step_selection(&mut self.featured, featured.len(), 1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                step_selection(&mut self.featured, featured.len(), -1);
                Some(Action::None)
            }
            KeyCode::Enter => self
                .featured
                .selected()
                .and_then(|i| featured.get(i))
                .map(|d| {
                    AppMessage::Navigate(PageId::DepartmentDetail, Some(d.id.to_string())).into()
                }),
            KeyCode::Char('b') => Some(AppMessage::Navigate(PageId::Appointment, None).into()),
            KeyCode::Char('f') => Some(AppMessage::Navigate(PageId::Doctors, None).into()),
            KeyCode::Char('e') => Some(AppMessage::Navigate(PageId::Departments, None).into()),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ department · Enter open · b book · f specialists · e all departments"
    }
}
