pub mod about;
pub mod appointment;
pub mod blank;
pub mod chat;
pub mod confirmation;
pub mod contact;
pub mod department_detail;
pub mod departments;
pub mod doctor_detail;
pub mod doctors;
pub mod home;
pub mod privacy;

pub use about::About;
pub use appointment::Appointment;
pub use blank::Blank;
pub use chat::ChatPanel;
pub use confirmation::Confirmation;
pub use contact::Contact;
pub use department_detail::DepartmentDetail;
pub use departments::Departments;
pub use doctor_detail::DoctorDetail;
pub use doctors::Doctors;
pub use home::Home;
pub use privacy::Privacy;

use ratatui::{
    Frame,
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{ListState, Paragraph, Wrap},
};

use crate::{ui::state::AppState, util::colors};

fn heading(text: &str) -> Line<'_> {
    Line::styled(
        text,
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )
}

fn muted(text: &str) -> Line<'_> {
    Line::styled(text, Style::default().fg(colors::NEUTRAL))
}

// Long-form pages share the content pane scroll offset.
fn page<'a>(lines: Vec<Line<'a>>, state: &AppState) -> Paragraph<'a> {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.scroll, 0))
}

// Pages laid out with fixed-height widgets draw onto a canvas at least `height`
// rows tall, and the frame shows the window starting at the scroll offset.
fn render_scrolled(
    f: &mut Frame,
    area: Rect,
    height: u16,
    scroll: u16,
    draw: impl FnOnce(Rect, &mut Buffer),
) {
    let target = f.buffer_mut();
    let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, height.max(area.height)));
    if let Some(style) = target.cell((area.x, area.y)).map(Cell::style) {
        canvas.set_style(canvas.area, style);
    }
    draw(canvas.area, &mut canvas);

    let scroll = scroll.min(canvas.area.height - area.height);
    for y in 0..area.height {
        for x in 0..area.width {
            if let (Some(src), Some(dst)) = (
                canvas.cell((x, y + scroll)),
                target.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

fn step_selection(list_state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let current = list_state.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    list_state.select(Some(next as usize));
}
