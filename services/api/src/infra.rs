use metrics_exporter_prometheus::PrometheusHandle;
use risk_aware::assessment::QuestionnaireSubmission;
use risk_aware::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a JSON answers file with the same field names the HTTP endpoint accepts.
pub(crate) fn load_submission(path: &Path) -> Result<QuestionnaireSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_submission(&raw)
}

pub(crate) fn parse_submission(raw: &str) -> Result<QuestionnaireSubmission, AppError> {
    serde_json::from_str(raw).map_err(AppError::from)
}
