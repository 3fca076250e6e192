use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub results_collection: String,
    pub counters_collection: String,
    pub question_limit: usize,
    pub history_limit: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "talentgate-local".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "mcq_questions".to_string()),
            results_collection: env::var("RESULTS_COLLECTION")
                .unwrap_or_else(|_| "test_results".to_string()),
            counters_collection: env::var("COUNTERS_COLLECTION")
                .unwrap_or_else(|_| "counters".to_string()),
            question_limit: env::var("QUESTION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            history_limit: env::var("HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "talentgate-test".to_string(),
            questions_collection: "mcq_questions".to_string(),
            results_collection: "test_results".to_string(),
            counters_collection: "counters".to_string(),
            question_limit: 10,
            history_limit: 10,
        }
    }
}
