use crate::entities::assessment::{Condition, RiskTier};
use crate::entities::care_plan::CarePlan;

/// Static care plan content for one risk tier.
///
/// The template table is kept separate from the selection logic so the
/// rules stay auditable and testable on their own. Content depends on the
/// tier only; the condition label appears in the plan heading.
struct PlanTemplate {
    self_management: &'static [&'static str],
    monitoring: &'static [&'static str],
    follow_up: &'static [&'static str],
    outcome_evaluation: &'static [&'static str],
}

const HIGH_RISK_PLAN: PlanTemplate = PlanTemplate {
    self_management: &[
        "Comprehensive lifestyle modifications, including diet, physical activity, and medication adherence with regular education sessions.",
    ],
    monitoring: &[
        "Frequency: Monthly clinic visits.",
        "Tests: Regular blood work (e.g., lipid profile, HbA1c for diabetes, pulmonary function for COPD, peak flow for asthma).",
        "Technology use: Remote health monitoring tools such as wearable devices for blood pressure, glucose, or peak flow tracking.",
    ],
    follow_up: &[
        "Frequency: Every 1-3 months depending on condition and symptom progression.",
        "Content: Adjust treatment plans as needed and review adherence to medication and lifestyle changes.",
    ],
    outcome_evaluation: &[
        "Timeframe: Quarterly evaluations for risk factors like blood pressure, glucose levels, lung function, or asthma control.",
        "Adjustments: Intensify interventions if risk factors are not improving.",
    ],
};

const MODERATE_RISK_PLAN: PlanTemplate = PlanTemplate {
    self_management: &[
        "Lifestyle counseling with moderate modifications such as balanced diet, reduced smoking exposure, and physical activity.",
    ],
    monitoring: &[
        "Frequency: Every 3-6 months.",
        "Tests: Basic blood work and relevant condition-specific tests (e.g., HbA1c for diabetes, spirometry for COPD, peak flow for asthma).",
        "Home tracking: Encourage at-home monitoring for blood pressure, weight, or peak flow as appropriate.",
    ],
    follow_up: &[
        "Frequency: Every 3-6 months with healthcare provider.",
        "Content: Review progress on lifestyle changes and risk factors, adjust care plan if needed.",
    ],
    outcome_evaluation: &[
        "Timeframe: Semi-annual assessment of progress in risk factors.",
        "Adjustments: Moderate intensification of lifestyle or medication therapy if no improvement is observed.",
    ],
};

const LOW_RISK_PLAN: PlanTemplate = PlanTemplate {
    self_management: &[
        "Encourage a healthy lifestyle, regular physical activity, and preventive practices.",
    ],
    monitoring: &[
        "Frequency: Annual check-ups.",
        "Tests: Basic blood work and periodic check-ups depending on age and risk factors.",
    ],
    follow_up: &[
        "Frequency: Yearly follow-up with healthcare provider.",
        "Content: Assess maintenance of healthy habits and address any emerging concerns.",
    ],
    outcome_evaluation: &[
        "Timeframe: Annual evaluation for emerging risk factors.",
        "Adjustments: Increase monitoring frequency if any new risk factors are identified.",
    ],
};

fn template_for(tier: RiskTier) -> &'static PlanTemplate {
    match tier {
        RiskTier::High => &HIGH_RISK_PLAN,
        RiskTier::Moderate => &MODERATE_RISK_PLAN,
        RiskTier::Low => &LOW_RISK_PLAN,
    }
}

fn owned(section: &'static [&'static str]) -> Vec<String> {
    section.iter().map(|s| s.to_string()).collect()
}

/// Select the care plan for a condition at a given risk tier.
///
/// Total over all (condition, tier) combinations; every plan has all four
/// sections populated.
pub fn select_care_plan(condition: Condition, tier: RiskTier) -> CarePlan {
    let template = template_for(tier);
    CarePlan {
        condition,
        tier,
        heading: format!("{} Risk: {}", condition.label(), tier),
        self_management: owned(template.self_management),
        monitoring: owned(template.monitoring),
        follow_up: owned(template.follow_up),
        outcome_evaluation: owned(template.outcome_evaluation),
    }
}
