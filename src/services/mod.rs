pub mod analysis_service;
pub mod assessment_service;
pub mod ats_scorer;
pub mod role_resolver;

pub use analysis_service::{AnalysisService, RoleClassifier, RolePrediction};
pub use assessment_service::{AssessmentService, PASS_THRESHOLD};
pub use ats_scorer::AtsScorer;
pub use role_resolver::RoleResolver;
