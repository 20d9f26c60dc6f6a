#[derive(Debug, Clone)]
pub enum Event {
    ChatReplied { generation: u64, reply: String },
    TaskFailed { task: &'static str, error: String },
}
