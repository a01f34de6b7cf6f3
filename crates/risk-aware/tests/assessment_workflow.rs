//! End-to-end scenarios for the self-assessment pipeline.
//!
//! Each scenario goes through the public surface only: a raw submission is assessed, or posted
//! to the router, and the resulting report is checked.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use risk_aware::assessment::{
    assess, assessment_router, BannerSeverity, InvalidInput, QuestionnaireSubmission,
    RiskCategory,
};

fn lowest_risk_submission() -> QuestionnaireSubmission {
    QuestionnaireSubmission {
        age: Some(35),
        gender: Some("unspecified".to_string()),
        relationship_status: Some("married".to_string()),
        sexual_activity: Some("none".to_string()),
        condom_use: Some("always".to_string()),
        unprotected_sex72h: Some(false),
        partner_status: Some("negative".to_string()),
        shared_needles: Some(false),
        unlicensed_tattoo: Some(false),
        blood_contact: Some(false),
        symptoms: Vec::new(),
        previous_test: Some("within1Month".to_string()),
        time_since_exposure: Some("none".to_string()),
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 14, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn lowest_risk_session_is_low_without_pep_warning() {
    let report = assess(lowest_risk_submission(), now()).expect("valid submission");

    assert_eq!(report.result.score, 0);
    assert_eq!(report.result.category, RiskCategory::Low);
    assert!(!report.result.urgent_pep_warning);
    assert_eq!(report.banner.severity, BannerSeverity::Success);
    assert!(report.pep_advisory.is_none());
}

#[test]
fn high_risk_session_matches_worked_example() {
    let mut submission = lowest_risk_submission();
    submission.age = Some(22);
    submission.sexual_activity = Some("multiplePartners".to_string());
    submission.condom_use = Some("never".to_string());
    submission.partner_status = Some("positive".to_string());
    submission.unprotected_sex72h = Some(true);
    submission.symptoms = vec!["fever".to_string()];
    submission.previous_test = Some("never".to_string());

    let report = assess(submission, now()).expect("valid submission");

    assert_eq!(report.result.score, 20);
    assert_eq!(report.result.category, RiskCategory::High);
    assert_eq!(report.banner.severity, BannerSeverity::Error);
}

#[test]
fn medium_risk_session_matches_worked_example() {
    let mut submission = lowest_risk_submission();
    submission.sexual_activity = Some("onePartner".to_string());
    submission.condom_use = Some("sometimes".to_string());
    submission.partner_status = Some("unknown".to_string());
    submission.shared_needles = Some(true);
    submission.time_since_exposure = Some("under72h".to_string());

    let report = assess(submission, now()).expect("valid submission");

    assert_eq!(report.result.score, 11);
    assert_eq!(report.result.category, RiskCategory::Medium);
    assert!(report.result.urgent_pep_warning);
    assert!(report.pep_advisory.is_some());
}

#[test]
fn invalid_session_produces_no_report() {
    let mut submission = lowest_risk_submission();
    submission.age = Some(9);

    let error = assess(submission, now()).expect_err("too young");

    assert_eq!(error, InvalidInput::AgeOutOfRange { found: 9 });
}

#[tokio::test]
async fn router_scores_posted_answers() {
    let body = json!({
        "age": 19,
        "gender": "Male",
        "relationshipStatus": "Single",
        "sexualActivity": "Yes, 1 partner",
        "condomUse": "Mostly",
        "unprotectedSex72h": true,
        "partnerStatus": "Unknown",
        "sharedNeedles": false,
        "unlicensedTattoo": false,
        "bloodContact": true,
        "symptoms": ["Fatigue", "Night sweats"],
        "previousTest": "Never",
        "timeSinceExposure": "Less than 72 hours"
    });

    let response = assessment_router()
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");

    // 1 + 1 + 2 + 4 + 2 + 2 + 1
    assert_eq!(payload["result"]["score"], 13);
    assert_eq!(payload["result"]["category"], "high");
    assert_eq!(payload["result"]["urgentPepWarning"], true);
    assert_eq!(payload["banner"]["severity"], "error");
}
