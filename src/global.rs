pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant. Please respond to user queries.";

pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";

/// Prefix of every assistant reply produced from a failed completion.
pub const ERROR_PREFIX: &str = "⚠️ Error: ";

pub const PLACEHOLDER_HINT: &str = "💡 Enter a question above and press 'Send' to start chatting!";
