use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::dto::{AnalysisReport, RoleAnalysis, RoleConfidence},
    services::{ats_scorer::AtsScorer, role_resolver::RoleResolver},
};

/// What the external classification model returns for a resume. The label is
/// untrusted free text and is resolved to a canonical key before use.
#[derive(Clone, Debug, PartialEq)]
pub struct RolePrediction {
    pub predicted_role: String,
    pub confidence: f64,
    pub top_roles: Vec<(String, f64)>,
}

/// External collaborator: the trained resume classifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleClassifier: Send + Sync {
    async fn predict(&self, resume_text: &str) -> AppResult<RolePrediction>;
}

/// The admission pipeline: score the resume, and only when it clears the
/// compliance gate spend a classifier call on it. A classifier failure
/// degrades the report rather than discarding the completed scoring.
pub struct AnalysisService {
    classifier: Arc<dyn RoleClassifier>,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn RoleClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn analyze(&self, resume_text: &str) -> AnalysisReport {
        let ats = AtsScorer::score(resume_text);

        if !ats.is_compliant {
            return AnalysisReport {
                ats,
                analysis: None,
                analysis_error: None,
            };
        }

        match self.classifier.predict(resume_text).await {
            Ok(prediction) => {
                let role_key = RoleResolver::resolve(&prediction.predicted_role);
                AnalysisReport {
                    ats,
                    analysis: Some(RoleAnalysis {
                        role_key,
                        predicted_label: prediction.predicted_role,
                        confidence: prediction.confidence,
                        top_roles: prediction
                            .top_roles
                            .into_iter()
                            .map(|(label, confidence)| RoleConfidence { label, confidence })
                            .collect(),
                    }),
                    analysis_error: None,
                }
            }
            Err(err) => {
                log::warn!("Resume classification failed: {}", err);
                AnalysisReport {
                    ats,
                    analysis: None,
                    analysis_error: Some(err.to_string()),
                }
            }
        }
    }
}
