use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("No API key configured for the assistant")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Assistant API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed assistant response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Assistant returned an empty response")]
    EmptyResponse,
}
