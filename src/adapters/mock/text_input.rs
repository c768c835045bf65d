use crate::ports::text_input::TextInputProvider as TextInputProviderTrait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock implementation of TextInputProvider
///
/// Replies from a queue; an exhausted queue behaves like a cancelled prompt.
/// Every message asked is recorded for assertions.
#[derive(Default)]
pub struct TextInputProvider {
    replies: Mutex<VecDeque<Option<String>>>,
    asked: Mutex<Vec<String>>,
}

impl TextInputProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed reply
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Some(text.into()));
        self
    }

    /// Queue a cancelled prompt
    pub fn cancel(self) -> Self {
        self.replies.lock().unwrap().push_back(None);
        self
    }

    /// Messages asked so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl TextInputProviderTrait for TextInputProvider {
    fn prompt(&self, message: &str) -> Option<String> {
        self.asked.lock().unwrap().push(message.to_string());
        self.replies.lock().unwrap().pop_front().flatten()
    }
}
