//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod insights;

pub use chat::Chat;
pub use insights::Insights;
