use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role_key::RoleKey;

/// The question ids issued for one assessment attempt. The core keeps no
/// registry of sessions; the caller round-trips this value (or just the ids)
/// and submits it back for grading. The id exists so a calling layer may key
/// a convenience cache by it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub role_key: RoleKey,
    pub question_ids: Vec<i64>,
    pub started_at: DateTime<Utc>,
}

impl AssessmentSession {
    pub fn new(role_key: RoleKey, question_ids: Vec<i64>) -> Self {
        AssessmentSession {
            id: Uuid::new_v4(),
            role_key,
            question_ids,
            started_at: Utc::now(),
        }
    }
}
