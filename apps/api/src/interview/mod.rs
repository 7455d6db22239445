// Interview question generation.
// Seeds a conversation with the resume, asks three follow-up prompts in order,
// and returns the sanitized replies. All model calls go through llm_client.

#[cfg(test)]
pub mod fixtures;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod resume_input;
