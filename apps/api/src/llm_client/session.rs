use tracing::debug;

use crate::llm_client::{ChatModel, LlmError};
use crate::models::conversation::Conversation;

/// A running chat with a `ChatModel`.
///
/// Each successful `send_message` appends the prompt and the reply, so later
/// prompts see earlier answers as context.
pub struct ChatSession<'a> {
    model: &'a dyn ChatModel,
    history: Conversation,
}

impl<'a> ChatSession<'a> {
    pub fn new(model: &'a dyn ChatModel, history: Conversation) -> Self {
        Self { model, history }
    }

    /// Sends `prompt` and returns the raw reply. On failure the history is left
    /// as it was before the call.
    pub async fn send_message(&mut self, prompt: &str) -> Result<String, LlmError> {
        let before = self.history.len();
        self.history.push_user(prompt);

        match self.model.complete(&self.history).await {
            Ok(reply) => {
                debug!(
                    history_len = self.history.len() + 1,
                    reply_len = reply.len(),
                    "Chat turn completed"
                );
                self.history.push_model(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                self.history.truncate(before);
                Err(e)
            }
        }
    }

    pub fn history(&self) -> &Conversation {
        &self.history
    }
}
