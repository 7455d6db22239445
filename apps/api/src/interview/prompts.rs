// All prompt text for interview generation.
// Changing any of these changes model behavior; keep them versioned together.

use crate::models::conversation::Role;
use crate::models::question::QuestionType;

/// Opening instruction: task framing plus output-format rules.
pub const SEED_INSTRUCTIONS: &str = "I am interviewing a candidate and would like help \
    generating interview questions based on their resume. Follow these rules in every answer:\n\
    1. Base every question only on what the resume states. Do not assume skills or experience it does not mention.\n\
    2. Address the candidate directly in the second person (\"you\", \"your\").\n\
    3. Present the questions as a numbered list, one question per item.\n\
    4. For multiple-choice questions, list the options under each question and give the correct answer right after the options.\n\
    5. For short-answer questions, follow each question with a few keywords a strong answer should mention.\n\
    6. For coding questions, write any code as plain pseudo-code instead of a specific programming language.\n\
    Here's their resume:";

/// Model reply to `SEED_INSTRUCTIONS`.
pub const SEED_REPLY: &str = "Sure, I'd be happy to help. Please provide the resume, \
    and I will assist with generating relevant questions following those rules.";

/// The fixed opening exchange sent before the resume.
pub const SEED_CONVERSATION: [(Role, &str); 2] =
    [(Role::User, SEED_INSTRUCTIONS), (Role::Model, SEED_REPLY)];

/// Synthetic model turn placed right after the resume. The remote model never
/// produces this text; it is injected to anchor the following answers to the resume.
pub const RESUME_ACKNOWLEDGMENT: &str = "Thank you for providing the resume. \
    I'll now generate a set of interview questions tailored to the candidate's skills and experience.";

pub const MCQ_PROMPT: &str = "Based on the candidate's resume, please generate 5 multiple-choice \
    questions (MCQs) that assess their knowledge and experience in key areas.";

pub const SHORT_ANSWER_PROMPT: &str = "Create 5 short-answer questions that evaluate the \
    candidate's understanding of their past projects, achievements, and overall expertise \
    as outlined in their resume.";

pub const CODING_PROMPT: &str = "Generate 5 coding questions that test the candidate's practical \
    programming skills and problem-solving abilities, related to the technologies mentioned \
    in their resume.";

/// Follow-up prompts in the order they are sent. Response order matches.
pub const QUESTION_PROMPTS: [(QuestionType, &str); 3] = [
    (QuestionType::McqQuestions, MCQ_PROMPT),
    (QuestionType::ShortAnswerQuestions, SHORT_ANSWER_PROMPT),
    (QuestionType::CodingQuestions, CODING_PROMPT),
];
