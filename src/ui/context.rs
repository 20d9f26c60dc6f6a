use std::sync::Arc;

use flume::Sender;

use crate::{chat::Assistant, config::Config, event::events::Event};

pub struct AppContext {
    pub assistant: Arc<dyn Assistant>,
    pub event_tx: Sender<Event>,
    pub config: Config,
}
