pub mod question_repository;
pub mod test_result_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use test_result_repository::{MongoTestResultRepository, TestResultRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use test_result_repository::MockTestResultRepository;
