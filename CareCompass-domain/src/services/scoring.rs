use crate::entities::assessment::{
    AsthmaInput, CardiovascularInput, ConditionInput, CopdInput, DiabetesInput, RiskTier,
};

// Weights and thresholds are fixed design constants, not runtime-tunable.

const CARDIO_HIGH_THRESHOLD: f64 = 15.0;
const CARDIO_MODERATE_THRESHOLD: f64 = 10.0;

const DIABETES_HIGH_THRESHOLD: f64 = 20.0;
const DIABETES_MODERATE_THRESHOLD: f64 = 15.0;

const COPD_HIGH_THRESHOLD: f64 = 25.0;
const COPD_MODERATE_THRESHOLD: f64 = 15.0;

const ASTHMA_HIGH_THRESHOLD: f64 = 20.0;
const ASTHMA_MODERATE_THRESHOLD: f64 = 10.0;

/// Classify a score against a condition's thresholds.
///
/// Boundaries are strict: a score exactly equal to a threshold falls into
/// the lower tier. The else branch is deliberate business logic, not a
/// fallback; negative scores classify as Low without clamping.
fn classify(score: f64, high: f64, moderate: f64) -> RiskTier {
    if score > high {
        RiskTier::High
    } else if score > moderate {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Cardiovascular risk score: 0.1*age + 0.05*systolic + 10*smoker + 0.02*cholesterol
pub fn cardiovascular_risk_score(input: &CardiovascularInput) -> f64 {
    f64::from(input.age) * 0.1
        + f64::from(input.systolic_bp) * 0.05
        + if input.smoker { 10.0 } else { 0.0 }
        + f64::from(input.cholesterol) * 0.02
}

/// Diabetes risk score: 0.3*BMI + 0.1*age + 10*familyHistory + 0.02*glucose
pub fn diabetes_risk_score(input: &DiabetesInput) -> f64 {
    input.bmi * 0.3
        + f64::from(input.age) * 0.1
        + if input.family_history { 10.0 } else { 0.0 }
        + f64::from(input.fasting_glucose) * 0.02
}

/// COPD risk score: 0.5*smokingYears + 0.2*age - 0.1*FEV1
pub fn copd_risk_score(input: &CopdInput) -> f64 {
    f64::from(input.smoking_years) * 0.5 + f64::from(input.age) * 0.2
        - f64::from(input.fev1_percent) * 0.1
}

/// Asthma risk score: 2*symptoms + 3*nighttime + 1.5*inhaler - 0.1*FEV1
pub fn asthma_risk_score(input: &AsthmaInput) -> f64 {
    f64::from(input.symptom_days) * 2.0
        + f64::from(input.nighttime_days) * 3.0
        + f64::from(input.inhaler_days) * 1.5
        - f64::from(input.fev1_percent) * 0.1
}

/// Score a condition's inputs and classify the result.
///
/// Pure and deterministic; identical inputs always yield the identical
/// score and tier.
pub fn stratify(input: &ConditionInput) -> (f64, RiskTier) {
    match input {
        ConditionInput::Cardiovascular(inner) => {
            let score = cardiovascular_risk_score(inner);
            (
                score,
                classify(score, CARDIO_HIGH_THRESHOLD, CARDIO_MODERATE_THRESHOLD),
            )
        }
        ConditionInput::Diabetes(inner) => {
            let score = diabetes_risk_score(inner);
            (
                score,
                classify(score, DIABETES_HIGH_THRESHOLD, DIABETES_MODERATE_THRESHOLD),
            )
        }
        ConditionInput::Copd(inner) => {
            let score = copd_risk_score(inner);
            (
                score,
                classify(score, COPD_HIGH_THRESHOLD, COPD_MODERATE_THRESHOLD),
            )
        }
        ConditionInput::Asthma(inner) => {
            let score = asthma_risk_score(inner);
            (
                score,
                classify(score, ASTHMA_HIGH_THRESHOLD, ASTHMA_MODERATE_THRESHOLD),
            )
        }
    }
}
