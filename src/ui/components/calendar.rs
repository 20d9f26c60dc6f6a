use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    calendar::{Calendar, CalendarCell, WEEKDAY_LABELS},
    util::colors,
};

const CELL_WIDTH: usize = 4;

pub struct CalendarWidget<'a> {
    calendar: &'a Calendar,
    selected: Option<&'a str>,
    today: NaiveDate,
    focused: bool,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(calendar: &'a Calendar, selected: Option<&'a str>, today: NaiveDate) -> Self {
        Self {
            calendar,
            selected,
            today,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("‹ [ ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    self.calendar.displayed().title(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ] ›", Style::default().fg(colors::MUTED)),
            ]),
            Line::from(
                WEEKDAY_LABELS
                    .iter()
                    .map(|d| {
                        Span::styled(
                            format!("{d:^width$}", width = CELL_WIDTH),
                            Style::default().fg(colors::NEUTRAL),
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
        ];

        let cells = self.calendar.cells(self.selected, self.today);
        for week in cells.chunks(7) {
            let spans: Vec<Span<'static>> = week
                .iter()
                .map(|cell| match cell {
                    CalendarCell::Blank => Span::raw(" ".repeat(CELL_WIDTH)),
                    CalendarCell::Day(day) => {
                        let mut style = if day.is_selected {
                            Style::default()
                                .fg(colors::BACKGROUND)
                                .bg(colors::PRIMARY)
                                .add_modifier(Modifier::BOLD)
                        } else if day.is_past {
                            Style::default().fg(colors::MUTED)
                        } else {
                            Style::default().fg(colors::TEXT)
                        };
                        if self.focused && day.day_of_month == self.calendar.cursor_day() {
                            style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
                        }
                        Span::styled(
                            format!("{:^width$}", day.day_of_month, width = CELL_WIDTH),
                            style,
                        )
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::styled("■", Style::default().fg(colors::PRIMARY)),
            Span::styled(" Selected  ", Style::default().fg(colors::NEUTRAL)),
            Span::styled("■", Style::default().fg(colors::TEXT)),
            Span::styled(" Available  ", Style::default().fg(colors::NEUTRAL)),
            Span::styled("■", Style::default().fg(colors::MUTED)),
            Span::styled(" Past", Style::default().fg(colors::NEUTRAL)),
        ]));
        lines
    }
}

impl<'a> Widget for CalendarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_title_header_weeks_and_legend() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let calendar = Calendar::new(today);
        let lines = CalendarWidget::new(&calendar, None, today).lines();

        // June 2025 starts on a Sunday and spans five weeks.
        assert_eq!(lines.len(), 2 + 5 + 1);
        assert_eq!(lines[0].to_string(), "‹ [ June 2025 ] ›");
        assert!(lines[2].to_string().starts_with(" 1  "));
    }
}
