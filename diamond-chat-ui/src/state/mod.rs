//! State Management
//!
//! Chat page state and its message types.

pub mod chat;

pub use chat::{provide_chat_state, ChatState, Message};
