use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use care_compass_domain::entities::{
    AsthmaInput, CardiovascularInput, Condition, ConditionInput, CopdInput, DiabetesInput,
    RiskAssessment, RiskTier,
};

/// Cardiovascular assessment fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CardiovascularFields {
    /// Age in years
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: u16,

    /// Systolic blood pressure in mmHg
    #[validate(range(
        min = 90,
        max = 200,
        message = "Systolic blood pressure must be between 90 and 200"
    ))]
    pub systolic_bp: u16,

    /// Current smoker
    pub smoker: bool,

    /// Total cholesterol in mg/dL
    #[validate(range(
        min = 100,
        max = 300,
        message = "Cholesterol must be between 100 and 300"
    ))]
    pub cholesterol: u16,
}

/// Diabetes assessment fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DiabetesFields {
    /// Body mass index
    #[validate(range(min = 10.0, max = 50.0, message = "BMI must be between 10.0 and 50.0"))]
    pub bmi: f64,

    /// Age in years
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: u16,

    /// Family history of diabetes
    pub family_history: bool,

    /// Fasting glucose in mg/dL
    #[validate(range(
        min = 50,
        max = 300,
        message = "Fasting glucose must be between 50 and 300"
    ))]
    pub fasting_glucose: u16,
}

/// COPD assessment fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CopdFields {
    /// Years of smoking
    #[validate(range(max = 60, message = "Smoking years must be between 0 and 60"))]
    pub smoking_years: u16,

    /// Age in years
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: u16,

    /// FEV1 as percent of predicted
    #[validate(range(min = 20, max = 100, message = "FEV1 must be between 20 and 100"))]
    pub fev1_percent: u16,
}

/// Asthma assessment fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AsthmaFields {
    /// Days per week with symptoms
    #[validate(range(max = 7, message = "Symptom days must be between 0 and 7"))]
    pub symptom_days: u16,

    /// Days per week with nighttime symptoms
    #[validate(range(max = 7, message = "Nighttime symptom days must be between 0 and 7"))]
    pub nighttime_days: u16,

    /// Days per week of inhaler use
    #[validate(range(max = 7, message = "Inhaler use days must be between 0 and 7"))]
    pub inhaler_days: u16,

    /// FEV1 as percent of predicted
    #[validate(range(min = 20, max = 100, message = "FEV1 must be between 20 and 100"))]
    pub fev1_percent: u16,
}

/// Request payload for assessing one condition, discriminated by `condition`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum CreateAssessmentRequest {
    Cardiovascular(CardiovascularFields),
    Diabetes(DiabetesFields),
    Copd(CopdFields),
    Asthma(AsthmaFields),
}

impl CreateAssessmentRequest {
    /// Validate the variant's field ranges.
    /// The validator derive has no enum support, so dispatch per variant.
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        match self {
            CreateAssessmentRequest::Cardiovascular(fields) => fields.validate(),
            CreateAssessmentRequest::Diabetes(fields) => fields.validate(),
            CreateAssessmentRequest::Copd(fields) => fields.validate(),
            CreateAssessmentRequest::Asthma(fields) => fields.validate(),
        }
    }

    /// Convert the validated request into the domain input variant
    pub fn into_domain(self) -> ConditionInput {
        match self {
            CreateAssessmentRequest::Cardiovascular(fields) => {
                ConditionInput::Cardiovascular(CardiovascularInput {
                    age: fields.age,
                    systolic_bp: fields.systolic_bp,
                    smoker: fields.smoker,
                    cholesterol: fields.cholesterol,
                })
            }
            CreateAssessmentRequest::Diabetes(fields) => ConditionInput::Diabetes(DiabetesInput {
                bmi: fields.bmi,
                age: fields.age,
                family_history: fields.family_history,
                fasting_glucose: fields.fasting_glucose,
            }),
            CreateAssessmentRequest::Copd(fields) => ConditionInput::Copd(CopdInput {
                smoking_years: fields.smoking_years,
                age: fields.age,
                fev1_percent: fields.fev1_percent,
            }),
            CreateAssessmentRequest::Asthma(fields) => ConditionInput::Asthma(AsthmaInput {
                symptom_days: fields.symptom_days,
                nighttime_days: fields.nighttime_days,
                inhaler_days: fields.inhaler_days,
                fev1_percent: fields.fev1_percent,
            }),
        }
    }
}

/// Public representation of one completed assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    /// Condition that was assessed
    pub condition: Condition,

    /// Classified risk tier
    pub risk_tier: RiskTier,

    /// Raw risk score the tier was derived from
    pub score: f64,

    /// When the assessment was made
    pub assessed_at: DateTime<Utc>,
}

impl From<RiskAssessment> for AssessmentResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            condition: assessment.condition,
            risk_tier: assessment.tier,
            score: assessment.score,
            assessed_at: assessment.assessed_at,
        }
    }
}

/// One entry of a session's condition-to-tier mapping
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentSummary {
    /// Assessed condition
    pub condition: Condition,

    /// Recorded risk tier
    pub risk_tier: RiskTier,
}

/// A session's current assessment results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResultsResponse {
    /// Session key
    pub session_id: Uuid,

    /// Number of conditions assessed so far
    pub assessed: usize,

    /// Recorded (condition, tier) pairs; may cover any subset of the four
    /// conditions
    pub results: Vec<AssessmentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_tagged_json() {
        let json = r#"{
            "condition": "cardiovascular",
            "age": 30,
            "systolic_bp": 120,
            "smoker": false,
            "cholesterol": 180
        }"#;

        let request: CreateAssessmentRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request,
            CreateAssessmentRequest::Cardiovascular(_)
        ));
        assert!(request.validate_fields().is_ok());
    }

    #[test]
    fn test_out_of_range_age_fails_validation() {
        let request = CreateAssessmentRequest::Cardiovascular(CardiovascularFields {
            age: 150,
            systolic_bp: 120,
            smoker: false,
            cholesterol: 180,
        });

        assert!(request.validate_fields().is_err());
    }

    #[test]
    fn test_copd_request_converts_to_domain_variant() {
        let request = CreateAssessmentRequest::Copd(CopdFields {
            smoking_years: 20,
            age: 55,
            fev1_percent: 60,
        });

        let input = request.into_domain();
        assert_eq!(input.condition(), Condition::Copd);
    }
}
