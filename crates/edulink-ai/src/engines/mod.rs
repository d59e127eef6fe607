pub mod language;
pub mod recommend;
pub mod risk;
pub mod router;

pub use router::{engine_router, Engines};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Caller-input error: a required field is absent or malformed. The
/// boundary layer maps these to 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("at least one of text, phone, or region is required")]
    MissingDetectionSignal,
    #[error("features object is required")]
    MissingFeatures,
    #[error("students array is required")]
    MissingStudents,
    #[error("studentData and riskAssessment are required")]
    MissingStudentContext,
    #[error("schoolData and studentRisks are required")]
    MissingSchoolContext,
    #[error("invalid features object: {0}")]
    InvalidFeatures(String),
    #[error("invalid studentData or riskAssessment: {0}")]
    InvalidStudentContext(String),
    #[error("invalid schoolData or studentRisks: {0}")]
    InvalidSchoolContext(String),
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Scores cross the wire rounded to two decimals, rates and percents
/// to one, matching what existing callers parse.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
