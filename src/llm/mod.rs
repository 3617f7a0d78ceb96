//! Hosted chat-completion client for transcript summarization and Q&A.

pub mod chat;

pub use chat::ChatClient;
