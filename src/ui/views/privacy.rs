use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, text::Line};

use super::{heading, muted, page};
use crate::ui::{
    state::AppState,
    traits::{Action, View},
};

const SECTIONS: [(&str, &str); 3] = [
    (
        "1. Information We Collect",
        "We only ask for personal information when we truly need it to provide a service to you. \
         We collect it by fair and lawful means, with your knowledge and consent.",
    ),
    (
        "2. Data Security",
        "We only retain collected information for as long as necessary to provide you with your \
         requested service. What data we store, we'll protect within commercially acceptable means \
         to prevent loss and theft.",
    ),
    (
        "3. Third-party Access",
        "We do not share any personally identifying information publicly or with third-parties, \
         except when required to by law.",
    ),
];

pub struct Privacy;

impl View for Privacy {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            heading("Privacy Policy"),
            Line::default(),
            Line::from(
                "Your privacy is important to us. It is Nova Medical Campus's policy to respect \
                 your privacy regarding any information we may collect from you across our \
                 services.",
            ),
        ];
        for (title, body) in SECTIONS {
            lines.push(Line::default());
            lines.push(heading(title));
            lines.push(muted(body));
        }
        f.render_widget(page(lines, state), area);
    }

    fn handle_input(&mut self, _key: KeyEvent, _state: &AppState) -> Option<Action> {
        None
    }

    fn hints(&self) -> &'static str {
        "PgUp/PgDn scroll"
    }
}
