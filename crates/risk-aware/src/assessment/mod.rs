//! HIV exposure risk self-assessment: intake validation, rubric scoring and the report view.
//!
//! Answers flow one way: a `QuestionnaireSubmission` is validated into an `AnswerSet`, scored
//! into an `AssessmentResult`, and wrapped in an `AssessmentReport` for display. Nothing is
//! retained between sessions and none of these values are logged.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod questionnaire;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    Age, AnswerOption, AnswerSet, CondomUse, Gender, PartnerStatus, PreviousTest,
    QuestionnaireSubmission, RelationshipStatus, SexualActivity, Symptom, TimeSinceExposure,
};
pub use evaluation::{score, AssessmentResult, RiskCategory, RiskFactor, ScoreComponent};
pub use intake::{IntakeGuard, InvalidInput};
pub use questionnaire::{questionnaire, Question, QuestionKind, QuestionSection};
pub use report::{AssessmentReport, BannerSeverity};
pub use router::assessment_router;

use chrono::{DateTime, Utc};

/// Run one session end to end. The answer set is consumed here and dropped with the call.
pub fn assess(
    submission: QuestionnaireSubmission,
    assessed_at: DateTime<Utc>,
) -> Result<AssessmentReport, InvalidInput> {
    let answers = IntakeGuard::new().answer_set_from_submission(submission)?;
    let result = score(&answers);
    Ok(AssessmentReport::build(&answers, result, assessed_at))
}
