use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// The four chronic conditions the system can assess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Condition {
    Cardiovascular,
    Diabetes,
    #[serde(rename = "COPD")]
    Copd,
    Asthma,
}

impl Condition {
    /// Canonical label used in headings and at the storage layer
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Cardiovascular => "Cardiovascular",
            Condition::Diabetes => "Diabetes",
            Condition::Copd => "COPD",
            Condition::Asthma => "Asthma",
        }
    }

    /// All assessable conditions
    pub fn all() -> [Condition; 4] {
        [
            Condition::Cardiovascular,
            Condition::Diabetes,
            Condition::Copd,
            Condition::Asthma,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cardiovascular" => Ok(Condition::Cardiovascular),
            "Diabetes" => Ok(Condition::Diabetes),
            "COPD" => Ok(Condition::Copd),
            "Asthma" => Ok(Condition::Asthma),
            other => Err(format!("Unknown condition: {}", other)),
        }
    }
}

/// Discrete risk classification, ordered by severity (Low < Moderate < High)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskTier::Low),
            "Moderate" => Ok(RiskTier::Moderate),
            "High" => Ok(RiskTier::High),
            other => Err(format!("Unknown risk tier: {}", other)),
        }
    }
}

/// Clinical inputs for a cardiovascular risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardiovascularInput {
    /// Age in years (18-100)
    pub age: u16,

    /// Systolic blood pressure in mmHg (90-200)
    pub systolic_bp: u16,

    /// Current smoker
    pub smoker: bool,

    /// Total cholesterol in mg/dL (100-300)
    pub cholesterol: u16,
}

/// Clinical inputs for a diabetes risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInput {
    /// Body mass index (10.0-50.0)
    pub bmi: f64,

    /// Age in years (18-100)
    pub age: u16,

    /// Family history of diabetes
    pub family_history: bool,

    /// Fasting glucose in mg/dL (50-300)
    pub fasting_glucose: u16,
}

/// Clinical inputs for a COPD risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopdInput {
    /// Years of smoking (0-60)
    pub smoking_years: u16,

    /// Age in years (18-100)
    pub age: u16,

    /// FEV1 as percent of predicted (20-100)
    pub fev1_percent: u16,
}

/// Clinical inputs for an asthma risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsthmaInput {
    /// Days per week with symptoms (0-7)
    pub symptom_days: u16,

    /// Days per week with nighttime symptoms (0-7)
    pub nighttime_days: u16,

    /// Days per week of inhaler use (0-7)
    pub inhaler_days: u16,

    /// FEV1 as percent of predicted (20-100)
    pub fev1_percent: u16,
}

/// One condition's validated clinical inputs, ready for scoring.
///
/// Range validation happens at the API boundary; the scorer accepts any
/// values without re-checking and never panics on out-of-range data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionInput {
    Cardiovascular(CardiovascularInput),
    Diabetes(DiabetesInput),
    Copd(CopdInput),
    Asthma(AsthmaInput),
}

impl ConditionInput {
    /// The condition these inputs belong to
    pub fn condition(&self) -> Condition {
        match self {
            ConditionInput::Cardiovascular(_) => Condition::Cardiovascular,
            ConditionInput::Diabetes(_) => Condition::Diabetes,
            ConditionInput::Copd(_) => Condition::Copd,
            ConditionInput::Asthma(_) => Condition::Asthma,
        }
    }
}

/// Outcome of scoring one condition's inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Condition that was assessed
    pub condition: Condition,

    /// Classified risk tier
    pub tier: RiskTier,

    /// Raw risk score the tier was derived from
    pub score: f64,

    /// When the assessment was made
    pub assessed_at: DateTime<Utc>,
}

/// A session's accumulated condition-to-tier mapping.
///
/// Holds at most one tier per condition and may cover any subset of the
/// four conditions; care plans are generated only for entries present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentResults {
    tiers: HashMap<Condition, RiskTier>,
}

impl AssessmentResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tier for a condition, replacing any prior entry
    pub fn record(&mut self, condition: Condition, tier: RiskTier) {
        self.tiers.insert(condition, tier);
    }

    /// Tier recorded for a condition, if it has been assessed
    pub fn tier_for(&self, condition: Condition) -> Option<RiskTier> {
        self.tiers.get(&condition).copied()
    }

    /// Iterate over the recorded (condition, tier) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Condition, RiskTier)> + '_ {
        self.tiers.iter().map(|(c, t)| (*c, *t))
    }

    /// Number of conditions assessed so far
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
