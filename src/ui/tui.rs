use std::{
    io::{Stdout, stdout},
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor, execute,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, KeyEvent,
        KeyEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Tick,
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Owns the terminal while the front desk is on screen.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: Receiver<TerminalEvent>,
    sender: Sender<TerminalEvent>,
    tick_rate: Duration,
    paste: bool,
    reader: Option<JoinHandle<()>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let (sender, events) = flume::unbounded();
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            events,
            sender,
            tick_rate: Duration::from_millis(33),
            paste: false,
            reader: None,
        })
    }

    pub fn tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = paste;
        self
    }

    fn spawn_reader(&mut self) {
        let sender = self.sender.clone();
        let tick_rate = self.tick_rate;

        self.reader = Some(tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = ticks.tick() => TerminalEvent::Tick,
                    next = stream.next().fuse() => match next {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            TerminalEvent::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Paste(text))) => TerminalEvent::Paste(text),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => TerminalEvent::Resize(w, h),
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            warn!(error = %e, "terminal_event_error");
                            continue;
                        }
                        None => break,
                    },
                };

                if sender.send_async(event).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn enter(&mut self) -> Result<()> {
        self.resume()?;
        self.spawn_reader();
        Ok(())
    }

    /// Puts the terminal back into raw mode on the alternate screen. Also called
    /// after a panic report handed the screen back to the shell.
    pub fn resume(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        if self.paste {
            execute!(stdout(), EnableBracketedPaste)?;
        }
        self.terminal.clear()?;
        debug!("terminal_entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            if self.paste {
                execute!(stdout(), DisableBracketedPaste)?;
            }
            Self::restore()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.events.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            warn!(error = %e, "terminal_restore_failed");
        }
    }
}
