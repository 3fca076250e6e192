pub mod question;
pub mod role_key;
pub mod score_report;
pub mod session;
pub mod test_result;

pub use question::{Difficulty, NewQuestion, Question};
pub use role_key::RoleKey;
pub use score_report::{ScoreReport, ScoreTier, COMPLIANCE_THRESHOLD};
pub use session::AssessmentSession;
pub use test_result::TestResult;
