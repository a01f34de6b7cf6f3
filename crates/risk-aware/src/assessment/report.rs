use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AnswerOption, AnswerSet};
use super::evaluation::{AssessmentResult, RiskCategory};

pub const DISCLAIMER: &str =
    "This is NOT a diagnostic test — only a healthcare provider can diagnose.";

pub const PRIVACY_NOTICE: &str = "Your responses are private and not stored.";

pub const HEALTH_RESOURCES: &[&str] = &[
    "Local hospitals and clinics",
    "Government HIV testing centers",
    "Community health organizations",
];

pub const PEP_ADVISORY: &str = "If exposure occurred within 72 hours, visit a healthcare provider immediately — PEP may prevent infection.";

const CLINICIAN_NOTE: &str =
    "This individual completed an educational HIV risk self-assessment tool.";

const CLINICIAN_FOLLOW_UPS: &[&str] = &[
    "Proper evaluation by a clinician",
    "Counseling about risk reduction",
    "Appropriate HIV testing based on exposure timing",
    "Guidance about PrEP or PEP depending on risk level",
];

const RECOMMENDED_TESTS: &[TestRecommendation] = &[
    TestRecommendation {
        name: "HIV Antigen/Antibody (4th Generation Test)",
        details: &[
            "Detects HIV earlier than older tests",
            "Usually recommended after 2–6 weeks",
        ],
    },
    TestRecommendation {
        name: "HIV Rapid Antibody Test",
        details: &["Gives results in minutes", "Suitable for screening"],
    },
    TestRecommendation {
        name: "HIV RNA / PCR Test (NAT Test)",
        details: &[
            "Detects HIV earliest (10–14 days after exposure)",
            "Recommended for high-risk or very recent exposure",
        ],
    },
    TestRecommendation {
        name: "Follow-up testing",
        details: &["A second test may be needed at 6 weeks and 3 months"],
    },
];

/// Visual severity a renderer should give the result banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerSeverity {
    Error,
    Warning,
    Success,
}

impl BannerSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            BannerSeverity::Error => "error",
            BannerSeverity::Warning => "warning",
            BannerSeverity::Success => "success",
        }
    }
}

impl From<RiskCategory> for BannerSeverity {
    fn from(category: RiskCategory) -> Self {
        match category {
            RiskCategory::High => BannerSeverity::Error,
            RiskCategory::Medium => BannerSeverity::Warning,
            RiskCategory::Low => BannerSeverity::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBanner {
    pub severity: BannerSeverity,
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecommendation {
    pub name: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicianMessage {
    pub note: &'static str,
    pub follow_ups: &'static [&'static str],
}

/// One line of the answer read-back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Everything a presentation layer needs to show one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub result: AssessmentResult,
    pub banner: ResultBanner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pep_advisory: Option<&'static str>,
    pub disclaimer: &'static str,
    pub privacy_notice: &'static str,
    pub health_resources: &'static [&'static str],
    pub recommended_tests: &'static [TestRecommendation],
    pub clinician_note: ClinicianMessage,
    pub summary: Vec<SummaryLine>,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentReport {
    pub fn build(
        answers: &AnswerSet,
        result: AssessmentResult,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        let banner = ResultBanner {
            severity: BannerSeverity::from(result.category),
            title: result.category.label(),
            message: result.advisory_message.clone(),
        };
        let pep_advisory = result.urgent_pep_warning.then_some(PEP_ADVISORY);

        Self {
            result,
            banner,
            pep_advisory,
            disclaimer: DISCLAIMER,
            privacy_notice: PRIVACY_NOTICE,
            health_resources: HEALTH_RESOURCES,
            recommended_tests: RECOMMENDED_TESTS,
            clinician_note: ClinicianMessage {
                note: CLINICIAN_NOTE,
                follow_ups: CLINICIAN_FOLLOW_UPS,
            },
            summary: answer_summary(answers),
            assessed_at,
        }
    }
}

fn answer_summary(answers: &AnswerSet) -> Vec<SummaryLine> {
    let symptoms: Vec<&str> = answers
        .reported_symptoms()
        .map(|symptom| symptom.label())
        .collect();
    let symptoms = if symptoms.is_empty() {
        "None reported".to_string()
    } else {
        symptoms.join(", ")
    };

    let exposure = if answers.needle_or_blood_exposure() {
        "Yes"
    } else {
        "No"
    };

    vec![
        line("Age", answers.age.years().to_string()),
        line("Sexual activity", answers.sexual_activity.label()),
        line("Condom use", answers.condom_use.label()),
        line("Partner HIV status", answers.partner_status.label()),
        line("Symptoms", symptoms),
        line("Needle/Blood exposure", exposure),
        line("Previous HIV test", answers.previous_test.label()),
        line("Time since exposure", answers.time_since_exposure.label()),
    ]
}

fn line(label: &'static str, value: impl Into<String>) -> SummaryLine {
    SummaryLine {
        label,
        value: value.into(),
    }
}
