use ratatui::crossterm::event::{KeyEvent, KeyEventKind};

use crate::ui::{
    app::App,
    input::InputHandler,
    traits::Action,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt) {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.handle_event(evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent) -> bool {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => {
                app.router.handle_paste(&text, &app.state);
            }
            // draw() picks up the new size on its own
            TerminalEvent::Resize(_, _) => {}
            TerminalEvent::Tick => return false,
        }

        true
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if let Some(msg) = InputHandler::handle_priority_key(evt) {
            app.update(msg);
            return;
        }

        match app.router.handle_input(evt, &app.state) {
            Some(Action::Dispatch(msg)) => app.update(msg),
            Some(Action::None) => {}
            None => {
                if let Some(msg) = InputHandler::handle_key(evt) {
                    app.update(msg);
                }
            }
        }
    }
}
