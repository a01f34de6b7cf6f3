use std::collections::BTreeSet;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    Age, AnswerSet, CondomUse, Gender, PartnerStatus, PreviousTest, QuestionnaireSubmission,
    RelationshipStatus, SexualActivity, Symptom, TimeSinceExposure,
};

/// Every answer at its lowest-risk value.
pub(super) fn lowest_risk_answers() -> AnswerSet {
    AnswerSet {
        age: Age::new(30).expect("valid age"),
        gender: Gender::Unspecified,
        relationship_status: RelationshipStatus::Unspecified,
        sexual_activity: SexualActivity::None,
        condom_use: CondomUse::Always,
        unprotected_sex72h: false,
        partner_status: PartnerStatus::Negative,
        shared_needles: false,
        unlicensed_tattoo: false,
        blood_contact: false,
        symptoms: BTreeSet::new(),
        previous_test: PreviousTest::Within1Month,
        time_since_exposure: TimeSinceExposure::None,
    }
}

/// Answers scoring 20 points: multiple partners, no condoms, positive partner, recent
/// unprotected sex, fever, never tested.
pub(super) fn high_risk_answers() -> AnswerSet {
    AnswerSet {
        age: Age::new(22).expect("valid age"),
        gender: Gender::Female,
        relationship_status: RelationshipStatus::Single,
        sexual_activity: SexualActivity::MultiplePartners,
        condom_use: CondomUse::Never,
        unprotected_sex72h: true,
        partner_status: PartnerStatus::Positive,
        shared_needles: false,
        unlicensed_tattoo: false,
        blood_contact: false,
        symptoms: symptoms(&[Symptom::Fever]),
        previous_test: PreviousTest::Never,
        time_since_exposure: TimeSinceExposure::ThreeDaysToSixWeeks,
    }
}

pub(super) fn symptoms(list: &[Symptom]) -> BTreeSet<Symptom> {
    list.iter().copied().collect()
}

/// A complete submission using wire tokens.
pub(super) fn submission() -> QuestionnaireSubmission {
    QuestionnaireSubmission {
        age: Some(22),
        gender: Some("female".to_string()),
        relationship_status: Some("single".to_string()),
        sexual_activity: Some("multiplePartners".to_string()),
        condom_use: Some("never".to_string()),
        unprotected_sex72h: Some(true),
        partner_status: Some("positive".to_string()),
        shared_needles: Some(false),
        unlicensed_tattoo: Some(false),
        blood_contact: Some(false),
        symptoms: vec!["fever".to_string()],
        previous_test: Some("never".to_string()),
        time_since_exposure: Some("under72h".to_string()),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json")
}
