mod policy;
mod rules;

pub use policy::{RiskCategory, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
pub use rules::RiskFactor;

use super::domain::AnswerSet;
use serde::{Deserialize, Serialize};

/// Score an answer set against the fixed rubric.
///
/// Every rule is evaluated independently and the points are summed, so the result does not
/// depend on rule order. The PEP flag is derived from the exposure timeline alone.
pub fn score(answers: &AnswerSet) -> AssessmentResult {
    let components = rules::score_answers(answers);
    let score = components.iter().map(|component| component.points).sum();
    let category = RiskCategory::from_score(score);

    AssessmentResult {
        score,
        category,
        advisory_message: category.advisory().to_string(),
        urgent_pep_warning: answers.time_since_exposure.within_pep_window(),
        components,
    }
}

/// Discrete contribution to a score, allowing the result to be read back rule by rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: u16,
    pub note: String,
}

/// Scoring output: total, category, advisory text and the urgent exposure flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: u16,
    pub category: RiskCategory,
    pub advisory_message: String,
    pub urgent_pep_warning: bool,
    pub components: Vec<ScoreComponent>,
}
