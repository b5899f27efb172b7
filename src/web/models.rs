use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

// Outbound chat completion payload, OpenAI-compatible shape.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn from_user_input(model: &str, user_input: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: Role::User,
                    content: user_input.to_string(),
                },
            ],
            temperature: 0.7,
        }
    }
}

// Inbound form submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatForm {
    pub user_input: String,
}

/// What the page renders. After a submission exactly one of `reply`/`error`
/// is set; on the initial GET all fields are empty.
#[derive(Debug, Default, PartialEq)]
pub struct ChatOutcome {
    pub user_input: Option<String>,
    pub reply: Option<String>,
    pub error: Option<String>,
}
