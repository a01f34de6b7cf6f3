use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use super::domain::QuestionnaireSubmission;
use super::questionnaire::{questionnaire, Question};
use super::report::AssessmentReport;
use crate::error::AppError;

/// Router exposing the questionnaire definition and the scoring endpoint.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route("/api/v1/assessments", post(assess_handler))
}

pub(crate) async fn questionnaire_handler() -> Json<Vec<Question>> {
    Json(questionnaire())
}

pub(crate) async fn assess_handler(
    payload: Result<Json<QuestionnaireSubmission>, JsonRejection>,
) -> Result<Json<AssessmentReport>, AppError> {
    let Json(submission) = payload?;
    let report = super::assess(submission, Utc::now())?;
    Ok(Json(report))
}
