use chrono::{TimeZone, Utc};

use super::common::*;
use crate::assessment::domain::{Symptom, TimeSinceExposure};
use crate::assessment::evaluation::score;
use crate::assessment::report::{
    AssessmentReport, BannerSeverity, DISCLAIMER, HEALTH_RESOURCES, PEP_ADVISORY, PRIVACY_NOTICE,
};

fn assessed_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn high_risk_report_uses_error_banner() {
    let answers = high_risk_answers();
    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());

    assert_eq!(report.banner.severity, BannerSeverity::Error);
    assert_eq!(report.banner.title, "High Risk");
    assert_eq!(report.banner.message, report.result.advisory_message);
    assert!(report.pep_advisory.is_none());
    assert_eq!(report.disclaimer, DISCLAIMER);
    assert_eq!(report.recommended_tests.len(), 4);
    assert_eq!(report.assessed_at, assessed_at());
}

#[test]
fn low_risk_report_uses_success_banner_and_pep_advisory_when_recent() {
    let mut answers = lowest_risk_answers();
    answers.time_since_exposure = TimeSinceExposure::Under72h;

    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());

    assert_eq!(report.banner.severity, BannerSeverity::Success);
    assert_eq!(report.pep_advisory, Some(PEP_ADVISORY));
}

#[test]
fn summary_reads_back_answers_with_labels() {
    let mut answers = high_risk_answers();
    answers.symptoms = symptoms(&[Symptom::None, Symptom::Fever, Symptom::Rash]);
    answers.blood_contact = true;

    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());
    let value_of = |label: &str| {
        report
            .summary
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.clone())
            .unwrap_or_else(|| panic!("{label} missing from summary"))
    };

    assert_eq!(value_of("Age"), "22");
    assert_eq!(value_of("Sexual activity"), "Yes, multiple partners");
    assert_eq!(value_of("Symptoms"), "Fever, Rash");
    assert_eq!(value_of("Needle/Blood exposure"), "Yes");
    assert_eq!(value_of("Time since exposure"), "3 days – 6 weeks");
}

#[test]
fn summary_marks_missing_symptoms() {
    let answers = lowest_risk_answers();
    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());

    let symptoms = report
        .summary
        .iter()
        .find(|line| line.label == "Symptoms")
        .expect("symptom line");
    assert_eq!(symptoms.value, "None reported");
}

#[test]
fn report_serializes_result_fields_in_camel_case() {
    let answers = high_risk_answers();
    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());

    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["result"]["score"], 20);
    assert_eq!(value["result"]["category"], "high");
    assert_eq!(value["result"]["urgentPepWarning"], false);
    assert_eq!(value["banner"]["severity"], "error");
    assert!(value.get("pepAdvisory").is_none());
    assert_eq!(
        value["result"]["components"][0]["note"],
        "sexual activity: Yes, multiple partners"
    );
    assert!(value["clinicianNote"]["note"]
        .as_str()
        .is_some_and(|note| note.contains("self-assessment tool")));
}

#[test]
fn every_report_states_privacy_and_lists_health_resources() {
    for answers in [lowest_risk_answers(), high_risk_answers()] {
        let report = AssessmentReport::build(&answers, score(&answers), assessed_at());

        assert_eq!(report.privacy_notice, PRIVACY_NOTICE);
        assert_eq!(report.health_resources, HEALTH_RESOURCES);
    }

    let answers = lowest_risk_answers();
    let report = AssessmentReport::build(&answers, score(&answers), assessed_at());
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(
        value["privacyNotice"],
        "Your responses are private and not stored."
    );
    assert_eq!(value["healthResources"][1], "Government HIV testing centers");
}
