use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Difficulty;

/// Administrative request to add one question to the bank. The role is a raw
/// label and is resolved to a canonical key before storage.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AddQuestionRequest {
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,

    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,

    #[validate(length(min = 2, message = "at least two options are required"))]
    pub options: Vec<String>,

    #[validate(length(min = 1, message = "correct answer is required"))]
    pub correct_answer: String,

    pub difficulty: Option<Difficulty>,
    pub explanation: Option<String>,
}

/// A candidate's completed assessment: the issued question ids plus their
/// chosen answers, keyed by question id. Ids the caller never answered are
/// graded as incorrect, not rejected.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitAssessmentRequest {
    pub question_ids: Vec<i64>,
    pub answers: HashMap<i64, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AddQuestionRequest {
        AddQuestionRequest {
            role: "Data Scientist".to_string(),
            prompt: "What is overfitting?".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_answer: "A".to_string(),
            difficulty: None,
            explanation: None,
        }
    }

    #[test]
    fn valid_add_question_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn add_question_request_rejects_single_option() {
        let mut request = valid_request();
        request.options = vec!["only one".to_string()];
        assert!(request.validate().is_err());
    }

    #[test]
    fn add_question_request_rejects_blank_fields() {
        let mut request = valid_request();
        request.role = String::new();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.prompt = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn submit_request_deserializes_string_keyed_answer_map() {
        let json = r#"{"question_ids":[1,2,3],"answers":{"1":"A","2":"WRONG"}}"#;
        let request: SubmitAssessmentRequest =
            serde_json::from_str(json).expect("request should deserialize");

        assert_eq!(request.question_ids, vec![1, 2, 3]);
        assert_eq!(request.answers.get(&1).map(String::as_str), Some("A"));
        assert!(!request.answers.contains_key(&3));
    }
}
