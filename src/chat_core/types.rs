#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Fields are private so an entry can't change after
/// it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Message {
        Message {
            role,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub text: String,
}

/// What gets sent to the backend for a single question. Only the latest
/// question is carried; earlier rounds are never replayed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub system_instruction: &'static str,
    pub question: String,
}

impl PromptRequest {
    pub fn messages(&self) -> [PromptMessage; 2] {
        [
            PromptMessage {
                role: PromptRole::System,
                text: self.system_instruction.to_string(),
            },
            PromptMessage {
                role: PromptRole::User,
                text: format!("Question: {}", self.question),
            },
        ]
    }
}
