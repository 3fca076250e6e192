use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role_key::RoleKey;

/// One graded submission, appended to history and never mutated.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TestResult {
    pub role_key: RoleKey,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub score_percentage: f64,
    pub timestamp: DateTime<Utc>,
}
