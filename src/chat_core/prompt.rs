use super::types::PromptRequest;
use crate::global;

pub fn build(question: &str) -> PromptRequest {
    PromptRequest {
        system_instruction: global::SYSTEM_INSTRUCTION,
        question: question.to_string(),
    }
}
