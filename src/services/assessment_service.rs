use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use rand::seq::SliceRandom;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AssessmentSession, NewQuestion, RoleKey, TestResult},
        dto::{
            AddQuestionRequest, AssessmentSelection, GradeResult, QuestionGrade, QuestionView,
            RoleQuestionCount,
        },
    },
    repositories::{QuestionRepository, TestResultRepository},
    services::role_resolver::RoleResolver,
};

/// Minimum percentage for a passing assessment.
pub const PASS_THRESHOLD: f64 = 60.0;

/// Drives one assessment attempt end to end: pick a bounded random question
/// set for a role, and later grade the submitted answers. Stateless between
/// calls; the caller carries the issued question ids.
pub struct AssessmentService {
    questions: Arc<dyn QuestionRepository>,
    results: Arc<dyn TestResultRepository>,
}

impl AssessmentService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        results: Arc<dyn TestResultRepository>,
    ) -> Self {
        Self { questions, results }
    }

    /// Selects up to `limit` questions for `role_key`, falling back to the
    /// `DEFAULT` pool when the role has none. A pool smaller than `limit` is
    /// returned whole; only two empty pools are an error.
    pub async fn select_questions(
        &self,
        role_key: RoleKey,
        limit: usize,
    ) -> AppResult<AssessmentSelection> {
        let mut pool = self.questions.find_by_role(role_key).await?;

        if pool.is_empty() && role_key != RoleKey::Default {
            log::info!(
                "No questions for role '{}', falling back to the DEFAULT pool",
                role_key
            );
            pool = self.questions.find_by_role(RoleKey::Default).await?;
        }

        if pool.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions available for role '{}'",
                role_key
            )));
        }

        // a question must never be issued twice within one session
        let mut seen = HashSet::new();
        pool.retain(|question| seen.insert(question.id));

        pool.shuffle(&mut rand::thread_rng());
        pool.truncate(limit);

        let question_ids = pool.iter().map(|question| question.id).collect();
        let questions = pool.iter().map(QuestionView::from).collect();

        Ok(AssessmentSelection {
            session: AssessmentSession::new(role_key, question_ids),
            questions,
        })
    }

    /// Grades a submission against the stored answer keys. Ids missing from
    /// `answers` count as incorrect; an unknown question id is a provisioning
    /// fault and fails the whole grade. The graded result is appended to
    /// history as a side effect but never feeds back into scoring.
    pub async fn grade(
        &self,
        question_ids: &[i64],
        answers: &HashMap<i64, String>,
    ) -> AppResult<GradeResult> {
        if question_ids.is_empty() {
            return Err(AppError::EmptySubmission(
                "No question ids were submitted".to_string(),
            ));
        }

        let mut graded = Vec::with_capacity(question_ids.len());
        let mut correct_answers: i64 = 0;
        let mut role_key: Option<RoleKey> = None;

        for &id in question_ids {
            let question = self.questions.find_by_id(id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", id))
            })?;

            let submitted = answers.get(&id).cloned();
            let is_correct = submitted.as_deref() == Some(question.correct_answer.as_str());
            if is_correct {
                correct_answers += 1;
            }
            role_key.get_or_insert(question.role_key);

            graded.push(QuestionGrade {
                question_id: id,
                prompt: question.prompt,
                submitted_answer: submitted,
                correct_answer: question.correct_answer,
                is_correct,
                explanation: question.explanation,
            });
        }

        let total_questions = question_ids.len() as i64;
        let score_percentage = 100.0 * correct_answers as f64 / total_questions as f64;
        let passed = score_percentage >= PASS_THRESHOLD;
        let role_key = role_key.unwrap_or(RoleKey::Default);

        self.results
            .append(TestResult {
                role_key,
                total_questions,
                correct_answers,
                score_percentage,
                timestamp: Utc::now(),
            })
            .await?;

        Ok(GradeResult {
            role_key,
            total_questions,
            correct_answers,
            score_percentage,
            passed,
            questions: graded,
        })
    }

    /// Administrative insert. The raw role label is resolved to a canonical
    /// key so every stored question lands in a selectable pool.
    pub async fn add_question(&self, request: AddQuestionRequest) -> AppResult<i64> {
        request.validate()?;

        if !request.options.contains(&request.correct_answer) {
            return Err(AppError::ValidationError(
                "Correct answer must match one of the options".to_string(),
            ));
        }

        let question = NewQuestion {
            role_key: RoleResolver::resolve(&request.role),
            prompt: request.prompt,
            options: request.options,
            correct_answer: request.correct_answer,
            difficulty: request.difficulty.unwrap_or_default(),
            explanation: request.explanation,
        };

        self.questions.insert(question).await
    }

    pub async fn recent_results(&self, limit: i64) -> AppResult<Vec<TestResult>> {
        self.results.recent(limit).await
    }

    pub async fn role_inventory(&self) -> AppResult<Vec<RoleQuestionCount>> {
        self.questions.role_inventory().await
    }

    pub async fn question_count(&self) -> AppResult<u64> {
        self.questions.count().await
    }
}
