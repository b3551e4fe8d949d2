//! Message Input
//!
//! Draft handling for the message box: a submit only goes through when the
//! trimmed text is non-empty and no backend call is outstanding.

/// True when `text` has something besides whitespace
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// The text the user is composing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send control should be enabled
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && is_sendable(&self.draft)
    }

    /// Take the draft for sending, leaving the box empty
    ///
    /// Returns `None` and keeps the draft when there is nothing to send or
    /// `busy` is set.
    pub fn submit(&mut self, busy: bool) -> Option<String> {
        if !self.can_submit(busy) {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}
