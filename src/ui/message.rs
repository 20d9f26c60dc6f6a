use crate::{booking::BookingSummary, navigation::PageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // User Input
    Quit,
    ScrollUp,
    ScrollDown,

    // Navigation
    Navigate(PageId, Option<String>),
    BookWithContext(Option<String>),
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),

    // Forms
    SelectDate(String),
    SubmitBooking(BookingSummary),
    SubmitContact,

    // Chat
    ToggleChat,
    CloseChat,
    SendChat(String),
    ClearChat,
    ChatReplied { generation: u64, reply: String },

    Status(String),
}
