use serde::{Deserialize, Serialize};

/// Lowest score categorized as high risk.
pub const HIGH_RISK_THRESHOLD: u16 = 12;
/// Lowest score categorized as medium risk.
pub const MEDIUM_RISK_THRESHOLD: u16 = 6;

/// Three-tier heuristic risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub const fn from_score(score: u16) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskCategory::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Medium => "Medium Risk",
            RiskCategory::High => "High Risk",
        }
    }

    pub const fn advisory(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW RISK — testing is still the only confirmation.",
            RiskCategory::Medium => "MEDIUM RISK — testing is recommended.",
            RiskCategory::High => "HIGH RISK — get tested as soon as possible.",
        }
    }
}
