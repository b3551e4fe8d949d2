//! Chat Session State
//!
//! In-memory conversation state for one session. Nothing here outlives the
//! process.

mod chat;
mod id;
mod message;

pub use chat::{
    ChatSession, SendOutcome, APOLOGY_MESSAGE, FALLBACK_GREETING, GREETING_ERROR, SEND_ERROR,
};
pub use id::SessionId;
pub use message::Message;
