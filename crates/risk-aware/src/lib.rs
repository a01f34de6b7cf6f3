//! Educational HIV exposure risk self-assessment.
//!
//! The library holds the questionnaire domain, the scoring rubric, the report view and the
//! HTTP router; `risk-aware-api` wraps it in a CLI and server.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
