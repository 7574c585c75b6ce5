use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use crate::entities::assessment::{AssessmentResults, ConditionInput, RiskAssessment};
use crate::entities::care_plan::CarePlan;
use crate::entities::conversions;
use crate::services::care_plan::select_care_plan;
use crate::services::scoring::stratify;
use care_compass_data::repository::{RepositoryError, SessionRepositoryTrait};

/// Assessment service errors
#[derive(Debug, Error)]
pub enum AssessmentServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Stored record could not be mapped back to a domain entity
    #[error("Corrupt session record: {0}")]
    CorruptRecord(String),
}

/// Trait for assessment service operations
#[async_trait]
pub trait AssessmentServiceTrait {
    /// Score one condition's inputs and record the result in the session
    async fn assess(
        &self,
        session_id: Uuid,
        input: ConditionInput,
    ) -> Result<RiskAssessment, AssessmentServiceError>;

    /// Get the session's current condition-to-tier mapping
    async fn get_results(
        &self,
        session_id: Uuid,
    ) -> Result<AssessmentResults, AssessmentServiceError>;

    /// Generate one care plan per condition assessed in the session
    async fn generate_care_plans(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<CarePlan>, AssessmentServiceError>;

    /// Discard all of a session's assessment results
    async fn clear_session(&self, session_id: Uuid) -> Result<(), AssessmentServiceError>;
}

/// Assessment service for domain logic
pub struct AssessmentService<R: SessionRepositoryTrait> {
    repository: R,
}

impl<R: SessionRepositoryTrait> AssessmentService<R> {
    /// Create a new assessment service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> AssessmentServiceError {
        match err {
            RepositoryError::NotFound(msg) => AssessmentServiceError::SessionNotFound(msg),
            RepositoryError::Validation(msg) => AssessmentServiceError::ValidationError(msg),
            _ => AssessmentServiceError::RepositoryError(err.to_string()),
        }
    }

    async fn load_assessments(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<RiskAssessment>, AssessmentServiceError> {
        let records = self
            .repository
            .get_session(session_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        records
            .into_iter()
            .map(|record| {
                conversions::convert_to_domain_assessment(record).map_err(|msg| {
                    error!("Corrupt record in session {}: {}", session_id, msg);
                    AssessmentServiceError::CorruptRecord(msg)
                })
            })
            .collect()
    }
}

#[async_trait]
impl<R: SessionRepositoryTrait + Send + Sync> AssessmentServiceTrait for AssessmentService<R> {
    async fn assess(
        &self,
        session_id: Uuid,
        input: ConditionInput,
    ) -> Result<RiskAssessment, AssessmentServiceError> {
        let condition = input.condition();
        let (score, tier) = stratify(&input);
        debug!(
            "Session {}: {} scored {:.2} -> {}",
            session_id, condition, score, tier
        );

        let assessment = RiskAssessment {
            condition,
            tier,
            score,
            assessed_at: Utc::now(),
        };

        self.repository
            .record(conversions::convert_to_data_record(&assessment, session_id))
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(assessment)
    }

    async fn get_results(
        &self,
        session_id: Uuid,
    ) -> Result<AssessmentResults, AssessmentServiceError> {
        let assessments = self.load_assessments(session_id).await?;

        let mut results = AssessmentResults::new();
        for assessment in assessments {
            results.record(assessment.condition, assessment.tier);
        }
        Ok(results)
    }

    async fn generate_care_plans(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<CarePlan>, AssessmentServiceError> {
        // Only conditions present in the session get a plan; an empty
        // session yields an empty report rather than an error.
        let assessments = self.load_assessments(session_id).await?;

        Ok(assessments
            .into_iter()
            .map(|assessment| select_care_plan(assessment.condition, assessment.tier))
            .collect())
    }

    async fn clear_session(&self, session_id: Uuid) -> Result<(), AssessmentServiceError> {
        self.repository
            .clear_session(session_id)
            .await
            .map_err(|e| self.map_repo_error(e))
    }
}

/// Create a default assessment service using the repository from the data layer
pub fn create_default_assessment_service() -> impl AssessmentServiceTrait + Send + Sync {
    let repository = care_compass_data::repository::SessionRepository::new();
    AssessmentService::new(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::assessment::{
        AsthmaInput, CardiovascularInput, Condition, CopdInput, RiskTier,
    };
    use care_compass_data::repository::tests::MockSessionRepository;

    fn cardio_high() -> ConditionInput {
        ConditionInput::Cardiovascular(CardiovascularInput {
            age: 60,
            systolic_bp: 180,
            smoker: true,
            cholesterol: 250,
        })
    }

    fn copd_low() -> ConditionInput {
        ConditionInput::Copd(CopdInput {
            smoking_years: 0,
            age: 30,
            fev1_percent: 80,
        })
    }

    #[tokio::test]
    async fn test_assess_records_result() {
        let service = AssessmentService::new(MockSessionRepository::new());
        let session_id = Uuid::new_v4();

        let assessment = service.assess(session_id, cardio_high()).await.unwrap();
        assert_eq!(assessment.condition, Condition::Cardiovascular);
        assert_eq!(assessment.tier, RiskTier::High);

        let results = service.get_results(session_id).await.unwrap();
        assert_eq!(
            results.tier_for(Condition::Cardiovascular),
            Some(RiskTier::High)
        );
    }

    #[tokio::test]
    async fn test_partial_session_generates_single_plan() {
        let service = AssessmentService::new(MockSessionRepository::new());
        let session_id = Uuid::new_v4();

        service.assess(session_id, copd_low()).await.unwrap();

        let plans = service.generate_care_plans(session_id).await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].condition, Condition::Copd);
        assert_eq!(plans[0].tier, RiskTier::Low);
    }

    #[tokio::test]
    async fn test_empty_session_generates_empty_report() {
        let service = AssessmentService::new(MockSessionRepository::new());

        let plans = service
            .generate_care_plans(Uuid::new_v4())
            .await
            .unwrap();
        assert!(plans.is_empty());
    }

    #[tokio::test]
    async fn test_reassessment_replaces_tier() {
        let service = AssessmentService::new(MockSessionRepository::new());
        let session_id = Uuid::new_v4();

        service
            .assess(
                session_id,
                ConditionInput::Asthma(AsthmaInput {
                    symptom_days: 3,
                    nighttime_days: 1,
                    inhaler_days: 2,
                    fev1_percent: 80,
                }),
            )
            .await
            .unwrap();
        service
            .assess(
                session_id,
                ConditionInput::Asthma(AsthmaInput {
                    symptom_days: 7,
                    nighttime_days: 7,
                    inhaler_days: 7,
                    fev1_percent: 40,
                }),
            )
            .await
            .unwrap();

        let results = service.get_results(session_id).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.tier_for(Condition::Asthma), Some(RiskTier::High));
    }

    #[tokio::test]
    async fn test_high_tier_plan_cadences() {
        let service = AssessmentService::new(MockSessionRepository::new());
        let session_id = Uuid::new_v4();

        service.assess(session_id, cardio_high()).await.unwrap();

        let plans = service.generate_care_plans(session_id).await.unwrap();
        assert_eq!(plans.len(), 1);
        assert!(plans[0].monitoring.iter().any(|l| l.contains("Monthly")));
        assert!(plans[0]
            .outcome_evaluation
            .iter()
            .any(|l| l.contains("Quarterly")));
    }

    #[tokio::test]
    async fn test_clear_session_discards_results() {
        let service = AssessmentService::new(MockSessionRepository::new());
        let session_id = Uuid::new_v4();

        service.assess(session_id, cardio_high()).await.unwrap();
        service.clear_session(session_id).await.unwrap();

        let results = service.get_results(session_id).await.unwrap();
        assert!(results.is_empty());
    }
}
