pub mod request;
pub mod response;

pub use request::{AddQuestionRequest, SubmitAssessmentRequest};
pub use response::{
    AnalysisReport, AssessmentSelection, GradeResult, QuestionGrade, QuestionView, RoleAnalysis,
    RoleConfidence, RoleQuestionCount,
};
