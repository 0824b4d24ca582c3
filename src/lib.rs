pub mod chat_core;
pub mod config;
pub mod frontend;
pub mod global;

pub use frontend::start_server;
