use crate::ports::confirmation::ConfirmationProvider as ConfirmationProviderTrait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock implementation of ConfirmationProvider
///
/// Answers from a script of queued replies, falling back to a default once the
/// script runs out. Every message asked is recorded for assertions.
pub struct ConfirmationProvider {
    replies: Mutex<VecDeque<bool>>,
    default_reply: bool,
    asked: Mutex<Vec<String>>,
}

impl ConfirmationProvider {
    /// Always answers `reply`
    pub fn answering(reply: bool) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: reply,
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Answers the given replies in order, then declines
    pub fn scripted(replies: impl IntoIterator<Item = bool>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            default_reply: false,
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Messages asked so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Default for ConfirmationProvider {
    fn default() -> Self {
        Self::answering(false)
    }
}

impl ConfirmationProviderTrait for ConfirmationProvider {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default_reply)
    }
}
