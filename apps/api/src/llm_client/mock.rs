//! Scripted `ChatModel` for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatModel, LlmError};
use crate::models::conversation::Conversation;

/// Replies from a fixed script and records every conversation it is sent.
/// A scripted `Err(message)` surfaces as `LlmError::Api` with status 500.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    received: Mutex<Vec<Conversation>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn replying<const N: usize>(replies: [&str; N]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    /// Snapshots of the history passed to each call, in call order.
    pub fn received(&self) -> Vec<Conversation> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, conversation: &Conversation) -> Result<String, LlmError> {
        self.received.lock().unwrap().push(conversation.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
