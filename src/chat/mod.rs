mod client;
mod error;
mod session;

use async_trait::async_trait;
use tracing::{error, info};

pub use client::GeminiClient;
pub use error::ChatError;
pub use session::{ChatMessage, ChatSession, Role};

pub const GREETING: &str = "Welcome to Nova Medical Campus. How can I assist you today?";

pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble connecting to my knowledge base. Please contact our 24/7 support line for immediate assistance.";

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful and compassionate medical assistant for Nova Medical Campus. \
Provide general health information and guidance about our hospital's departments (Cardiology, Neurology, Pediatrics, Orthopedics, Oncology). \
Always include a disclaimer that you are an AI and the user should consult a real doctor for medical emergencies. \
Keep answers concise, reassuring, and professional.";

#[async_trait]
pub trait Assistant: Send + Sync {
    async fn generate(&self, query: &str) -> Result<String, ChatError>;
}

/// Never fails: any assistant error is logged and replaced by [`FALLBACK_REPLY`].
pub async fn get_medical_response(assistant: &dyn Assistant, query: &str) -> String {
    match assistant.generate(query).await {
        Ok(reply) => {
            info!(chars = reply.len(), "assistant_reply");
            reply
        }
        Err(e) => {
            error!(error = %e, "assistant_request_failed");
            FALLBACK_REPLY.to_string()
        }
    }
}
