use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role_key::RoleKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A multiple-choice question as stored. `options` is kept as a proper array
/// so option text may contain any character; `correct_answer` must equal one
/// of the options by value (enforced at insert time, never re-checked here).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub role_key: RoleKey,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert shape. The id and creation timestamp are assigned by the storage
/// layer when the question is persisted.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewQuestion {
    pub role_key: RoleKey,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub explanation: Option<String>,
}

impl NewQuestion {
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            role_key: self.role_key,
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            explanation: self.explanation,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trip_serialization() {
        let variants = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: Difficulty = serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn difficulty_wire_form_is_lowercase_and_defaults_to_medium() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Easy).expect("should serialize"),
            "\"easy\""
        );
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn question_preserves_option_order_through_serialization() {
        let question = Question {
            id: 7,
            role_key: RoleKey::DataScience,
            prompt: "Which library is primarily used for data manipulation in Python?".to_string(),
            options: vec![
                "NumPy".to_string(),
                "Pandas".to_string(),
                "Matplotlib".to_string(),
                "Scikit-learn".to_string(),
            ],
            correct_answer: "Pandas".to_string(),
            difficulty: Difficulty::Easy,
            explanation: Some(
                "Pandas is the primary library for data manipulation and analysis.".to_string(),
            ),
            created_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(parsed.options, question.options);
        assert!(parsed.options.contains(&parsed.correct_answer));
    }

    #[test]
    fn options_with_commas_survive_round_trip() {
        let question = Question {
            id: 1,
            role_key: RoleKey::Default,
            prompt: "Pick one".to_string(),
            options: vec![
                "Model performs well on training, but poorly on test data".to_string(),
                "Neither, actually".to_string(),
            ],
            correct_answer: "Neither, actually".to_string(),
            difficulty: Difficulty::Medium,
            explanation: None,
            created_at: None,
        };

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(parsed.options.len(), 2);
        assert_eq!(parsed.options, question.options);
    }

    #[test]
    fn new_question_into_question_stamps_id_and_timestamp() {
        let new_question = NewQuestion {
            role_key: RoleKey::WebDeveloper,
            prompt: "What does CSS stand for?".to_string(),
            options: vec![
                "Cascading Style Sheets".to_string(),
                "Computer Style Sheets".to_string(),
            ],
            correct_answer: "Cascading Style Sheets".to_string(),
            difficulty: Difficulty::Easy,
            explanation: None,
        };

        let question = new_question.into_question(42);

        assert_eq!(question.id, 42);
        assert_eq!(question.role_key, RoleKey::WebDeveloper);
        assert!(question.created_at.is_some());
    }
}
