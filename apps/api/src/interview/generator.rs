//! Question generation — drives the scripted conversation for one resume.
//!
//! Flow: seed conversation → resume → synthetic acknowledgment →
//!       MCQ prompt → short-answer prompt → coding prompt.
//!
//! The three prompts run strictly in sequence on one `ChatSession`; each reply
//! becomes context for the next prompt. Any failure aborts the whole run.

use tracing::{debug, info};

use crate::interview::prompts::{QUESTION_PROMPTS, RESUME_ACKNOWLEDGMENT, SEED_CONVERSATION};
use crate::llm_client::{ChatModel, ChatSession, LlmError};
use crate::models::conversation::{Conversation, ConversationTurn};
use crate::models::question::GeneratedQuestionSet;

/// Builds the history sent before the first prompt: seed, resume, acknowledgment.
pub fn build_conversation(resume: &str) -> Conversation {
    let mut conversation: Conversation = SEED_CONVERSATION
        .iter()
        .map(|(role, text)| ConversationTurn {
            role: *role,
            text: text.to_string(),
        })
        .collect();
    conversation.push_user(resume);
    conversation.push_model(RESUME_ACKNOWLEDGMENT);
    conversation
}

/// Strips markdown emphasis and code marks: backticks become `'`, asterisks go.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '*')
        .map(|c| if c == '`' { '\'' } else { c })
        .collect()
}

/// Runs the three prompts against `llm` and returns one block per question type,
/// in fixed order. Returns the first error unchanged; no partial results.
pub async fn generate_questions(
    llm: &dyn ChatModel,
    resume: &str,
) -> Result<Vec<GeneratedQuestionSet>, LlmError> {
    let mut session = ChatSession::new(llm, build_conversation(resume));
    let mut sets = Vec::with_capacity(QUESTION_PROMPTS.len());

    for (kind, prompt) in QUESTION_PROMPTS {
        debug!("Requesting {kind:?}");
        let reply = session.send_message(prompt).await?;
        sets.push(GeneratedQuestionSet {
            kind,
            description: sanitize(&reply),
        });
    }

    info!(
        "Generated {} question sets over {} turns",
        sets.len(),
        session.history().len()
    );
    Ok(sets)
}
