use serde::{Deserialize, Serialize};

use crate::models::domain::{AssessmentSession, Difficulty, Question, RoleKey, ScoreReport};

/// A question as shown to the candidate: no correct answer, no explanation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub prompt: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id,
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            difficulty: question.difficulty,
        }
    }
}

/// The outcome of question selection: the session the caller must round-trip,
/// plus the candidate-safe views of the selected questions.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssessmentSelection {
    pub session: AssessmentSession,
    pub questions: Vec<QuestionView>,
}

/// Per-question grading detail.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionGrade {
    pub question_id: i64,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradeResult {
    pub role_key: RoleKey,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub score_percentage: f64,
    pub passed: bool,
    pub questions: Vec<QuestionGrade>,
}

/// Distinct role key with its pool size; the provisioning inventory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleQuestionCount {
    pub role_key: RoleKey,
    pub question_count: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RoleConfidence {
    pub label: String,
    pub confidence: f64,
}

/// What the classifier predicted, after the raw label has been resolved to a
/// canonical key.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RoleAnalysis {
    pub predicted_label: String,
    pub role_key: RoleKey,
    pub confidence: f64,
    pub top_roles: Vec<RoleConfidence>,
}

/// Full resume analysis. The score report is always complete; `analysis` is
/// present only when the compliance gate passed and the classifier answered,
/// and `analysis_error` carries the classifier failure otherwise.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnalysisReport {
    pub ats: ScoreReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RoleAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}
