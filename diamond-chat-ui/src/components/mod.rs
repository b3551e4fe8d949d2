//! UI Components
//!
//! Reusable Leptos components for the chat and insights pages.

pub mod chat_header;
pub mod error_banner;
pub mod loading;
pub mod message;
pub mod message_input;
pub mod message_list;
pub mod typing_indicator;

pub use chat_header::ChatHeader;
pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use message::MessageBubble;
pub use message_input::MessageInput;
pub use message_list::MessageList;
pub use typing_indicator::TypingIndicator;
