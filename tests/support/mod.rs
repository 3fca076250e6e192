#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use talentgate_core::errors::AppResult;
use talentgate_core::models::domain::{Difficulty, NewQuestion, Question, RoleKey, TestResult};
use talentgate_core::models::dto::RoleQuestionCount;
use talentgate_core::repositories::{QuestionRepository, TestResultRepository};

/// Reference implementation of the question store contract, used both to
/// verify the contract itself and to drive the services end to end without a
/// database.
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<i64, Question>>>,
    next_id: AtomicI64,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_role(&self, role_key: RoleKey) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut items: Vec<_> = questions
            .values()
            .filter(|q| q.role_key == role_key)
            .cloned()
            .collect();
        items.sort_by_key(|q| q.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let question = question.into_question(id);

        let mut questions = self.questions.write().await;
        questions.insert(id, question);
        Ok(id)
    }

    async fn role_inventory(&self) -> AppResult<Vec<RoleQuestionCount>> {
        let questions = self.questions.read().await;
        let mut counts: HashMap<RoleKey, i64> = HashMap::new();
        for question in questions.values() {
            *counts.entry(question.role_key).or_insert(0) += 1;
        }

        let mut inventory: Vec<_> = counts
            .into_iter()
            .map(|(role_key, question_count)| RoleQuestionCount {
                role_key,
                question_count,
            })
            .collect();
        inventory.sort_by_key(|entry| entry.role_key.as_str());
        Ok(inventory)
    }

    async fn count(&self) -> AppResult<u64> {
        let questions = self.questions.read().await;
        Ok(questions.len() as u64)
    }
}

pub struct InMemoryTestResultRepository {
    results: Arc<RwLock<Vec<TestResult>>>,
}

impl InMemoryTestResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TestResultRepository for InMemoryTestResultRepository {
    async fn append(&self, result: TestResult) -> AppResult<()> {
        let mut results = self.results.write().await;
        results.push(result);
        Ok(())
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<TestResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results.clone();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }
}

pub fn make_new_question(role_key: RoleKey, tag: &str) -> NewQuestion {
    NewQuestion {
        role_key,
        prompt: format!("Prompt {}", tag),
        options: vec![
            format!("Right {}", tag),
            "Wrong A".to_string(),
            "Wrong B".to_string(),
        ],
        correct_answer: format!("Right {}", tag),
        difficulty: Difficulty::Medium,
        explanation: None,
    }
}

/// Inserts `n` questions for the role and returns their assigned ids.
pub async fn seed_questions(
    repo: &InMemoryQuestionRepository,
    role_key: RoleKey,
    n: usize,
) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for index in 0..n {
        let question = make_new_question(role_key, &format!("{}-{}", role_key, index));
        let id = repo.insert(question).await.expect("seed insert should work");
        ids.push(id);
    }
    ids
}

pub fn make_result(role_key: RoleKey, score_percentage: f64) -> TestResult {
    TestResult {
        role_key,
        total_questions: 10,
        correct_answers: (score_percentage / 10.0) as i64,
        score_percentage,
        timestamp: Utc::now(),
    }
}
