use serde::Serialize;

/// Category of a generated question block. Response order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    McqQuestions,
    ShortAnswerQuestions,
    CodingQuestions,
}

/// One labeled block of questions as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuestionSet {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub description: String,
}
