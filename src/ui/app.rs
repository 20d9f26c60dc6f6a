use std::{panic::AssertUnwindSafe, sync::Arc};

use flume::Receiver;
use futures::FutureExt;
use tracing::{debug, info};

use crate::{
    chat::{Assistant, FALLBACK_REPLY, GeminiClient, get_medical_response},
    config::Config,
    event::events::Event,
    util::task::TaskManager,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    router::Router,
    state::{AppState, Command},
    tui::Tui,
    util::handler::EventHandler,
};

const CHAT_TASK: &str = "chat";

pub struct App {
    pub state: AppState,
    pub ctx: AppContext,
    pub router: Router,
    pub event_rx: Receiver<Event>,
    pub task_manager: TaskManager,
    /// Set when a background task panicked; the panic hook has already left
    /// raw mode, so the loop re-enters the terminal before the next frame.
    pub needs_resume: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let assistant = Arc::new(GeminiClient::new(config.chat.clone())?);
        if config.chat.api_key.is_none() {
            info!("no assistant API key configured, chat will answer with the fallback reply");
        }
        Ok(Self::with_assistant(config, assistant))
    }

    pub fn with_assistant(config: Config, assistant: Arc<dyn Assistant>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            state: AppState::default(),
            ctx: AppContext {
                assistant,
                event_tx,
                config,
            },
            router: Router::new(),
            event_rx,
            task_manager: TaskManager::new(),
            needs_resume: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.ctx.config.tick_rate)
            .paste(true);
        tui.enter()?;

        while !self.should_quit {
            if std::mem::take(&mut self.needs_resume) {
                tui.resume()?;
            }

            self.router.sync(&self.state);
            tui.draw(|f| {
                let area = f.area();
                AppLayout::new(self).render(f, area);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        if let Some(command) = self.state.update(msg) {
            self.execute(command);
        }
        self.router.sync(&self.state);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::ChatReplied { generation, reply } => {
                self.update(AppMessage::ChatReplied { generation, reply });
            }
            Event::TaskFailed { task, error } => {
                tracing::error!(task, error = error.as_str(), "background_task_failed");
                self.needs_resume = true;
                self.update(AppMessage::Status(format!("Something went wrong ({task}).")));
            }
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::AskAssistant { generation, query } => {
                debug!(generation, "chat_request_spawned");
                let assistant = self.ctx.assistant.clone();
                let tx = self.ctx.event_tx.clone();

                self.task_manager.spawn(
                    CHAT_TASK,
                    tokio::spawn(async move {
                        let reply = AssertUnwindSafe(get_medical_response(assistant.as_ref(), &query))
                            .catch_unwind()
                            .await;
                        let reply = match reply {
                            Ok(reply) => reply,
                            Err(_) => {
                                let _ = tx.send(Event::TaskFailed {
                                    task: CHAT_TASK,
                                    error: "assistant task panicked".to_string(),
                                });
                                FALLBACK_REPLY.to_string()
                            }
                        };
                        let _ = tx.send(Event::ChatReplied { generation, reply });
                    }),
                );
            }
            Command::CancelChat => self.task_manager.abort(CHAT_TASK),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::ChatError;

    struct Unreachable;

    #[async_trait]
    impl Assistant for Unreachable {
        async fn generate(&self, _query: &str) -> Result<String, ChatError> {
            Err(ChatError::EmptyResponse)
        }
    }

    struct Broken;

    #[async_trait]
    impl Assistant for Broken {
        async fn generate(&self, _query: &str) -> Result<String, ChatError> {
            panic!("assistant exploded");
        }
    }

    struct Slow;

    #[async_trait]
    impl Assistant for Slow {
        async fn generate(&self, _query: &str) -> Result<String, ChatError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn chat_failure_shows_fallback_in_transcript() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Unreachable));
        app.update(AppMessage::SendChat("Do you have parking?".into()));
        assert!(app.state.chat.is_pending());

        let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        app.handle_event(event);

        assert!(!app.state.chat.is_pending());
        assert_eq!(app.state.chat.messages().last().unwrap().text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn panicking_assistant_still_answers() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Broken));
        app.update(AppMessage::SendChat("hello".into()));

        for _ in 0..2 {
            let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv_async())
                .await
                .unwrap()
                .unwrap();
            app.handle_event(event);
        }

        assert!(app.state.ui.status.is_some());
        assert!(app.needs_resume);
        assert!(!app.state.chat.is_pending());
        assert_eq!(app.state.chat.messages().last().unwrap().text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn failed_task_reenters_the_terminal_once() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Unreachable));
        assert!(!app.needs_resume);

        app.handle_event(Event::TaskFailed {
            task: CHAT_TASK,
            error: "boom".to_string(),
        });
        assert!(app.needs_resume);
        assert!(std::mem::take(&mut app.needs_resume));
        assert!(!app.needs_resume);

        app.handle_event(Event::ChatReplied {
            generation: 0,
            reply: "late".to_string(),
        });
        assert!(!app.needs_resume);
    }

    #[tokio::test]
    async fn clearing_chat_aborts_request() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Slow));
        app.update(AppMessage::SendChat("hello".into()));
        assert!(app.task_manager.is_running(CHAT_TASK));

        app.update(AppMessage::ClearChat);
        assert!(!app.task_manager.is_running(CHAT_TASK));
        assert!(!app.state.chat.is_pending());
    }

    #[tokio::test]
    async fn navigation_stays_responsive_while_chat_is_pending() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Slow));
        app.update(AppMessage::SendChat("hello".into()));
        app.update(AppMessage::Navigate(crate::navigation::PageId::Doctors, None));

        assert_eq!(app.state.nav.page(), &crate::navigation::Page::Doctors);
        assert!(app.state.chat.is_pending());
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut app = App::with_assistant(Config::default(), Arc::new(Unreachable));
        app.update(AppMessage::Quit);
        assert!(app.should_quit);
    }
}
