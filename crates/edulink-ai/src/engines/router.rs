//! HTTP surface for the three engines, exposed as a router builder so
//! the service binary can mount it alongside its operational routes.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::language::{DetectionResult, LanguageDetector, LexiconError};
use super::recommend::{
    CostTier, Recommender, SchoolProfile, SchoolRecommendations, StudentProfile,
    StudentRecommendations,
};
use super::risk::{BatchResult, RiskAssessment, RiskScorer, StudentFeatures};
use super::InputError;

/// The three stateless engines bundled behind one shared handle. Each
/// holds only immutable reference tables, so one instance serves any
/// number of concurrent requests.
pub struct Engines {
    pub detector: LanguageDetector,
    pub scorer: RiskScorer,
    pub recommender: Recommender,
}

impl Engines {
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self {
            detector: LanguageDetector::new()?,
            scorer: RiskScorer::new(),
            recommender: Recommender::new(),
        })
    }
}

/// Router builder exposing the decision endpoints.
pub fn engine_router(engines: Arc<Engines>) -> Router {
    Router::new()
        .route("/ai/detect-language", post(detect_language_handler))
        .route("/ai/score-risk", post(score_risk_handler))
        .route("/ai/score-risk/batch", post(score_risk_batch_handler))
        .route("/ai/recommendations", post(recommendations_handler))
        .route(
            "/ai/recommendations/school",
            post(school_recommendations_handler),
        )
        .with_state(engines)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetectLanguageRequest {
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    pub(crate) region: Option<String>,
}

pub(crate) async fn detect_language_handler(
    State(engines): State<Arc<Engines>>,
    Json(payload): Json<DetectLanguageRequest>,
) -> Result<Json<DetectionResult>, InputError> {
    let supplied = [&payload.text, &payload.phone, &payload.region]
        .iter()
        .any(|value| value.as_deref().is_some_and(|value| !value.is_empty()));
    if !supplied {
        return Err(InputError::MissingDetectionSignal);
    }

    let result = engines.detector.detect_combined(
        payload.text.as_deref(),
        payload.phone.as_deref(),
        payload.region.as_deref(),
    );
    info!(
        language = %result.language,
        confidence = result.confidence,
        "language detected"
    );
    Ok(Json(result))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreRiskRequest {
    #[serde(default)]
    pub(crate) features: Option<Map<String, Value>>,
}

pub(crate) async fn score_risk_handler(
    State(engines): State<Arc<Engines>>,
    Json(payload): Json<ScoreRiskRequest>,
) -> Result<Json<RiskAssessment>, InputError> {
    let features = payload
        .features
        .filter(|map| !map.is_empty())
        .ok_or(InputError::MissingFeatures)?;
    let features: StudentFeatures = serde_json::from_value(Value::Object(features))
        .map_err(|err| InputError::InvalidFeatures(err.to_string()))?;

    let assessment = engines.scorer.calculate_risk_score(&features);
    info!(
        score = assessment.risk_score,
        level = assessment.risk_level.label(),
        "risk score calculated"
    );
    Ok(Json(assessment))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreRiskBatchRequest {
    #[serde(default)]
    pub(crate) students: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreRiskBatchResponse {
    pub(crate) results: Vec<BatchResult>,
}

pub(crate) async fn score_risk_batch_handler(
    State(engines): State<Arc<Engines>>,
    Json(payload): Json<ScoreRiskBatchRequest>,
) -> Result<Json<ScoreRiskBatchResponse>, InputError> {
    let students = payload
        .students
        .filter(|students| !students.is_empty())
        .ok_or(InputError::MissingStudents)?;

    let results = engines.scorer.batch_calculate(&students);
    info!(count = results.len(), "batch risk scoring completed");
    Ok(Json(ScoreRiskBatchResponse { results }))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationsRequest {
    #[serde(default, rename = "studentData")]
    pub(crate) student_data: Option<Map<String, Value>>,
    #[serde(default, rename = "riskAssessment")]
    pub(crate) risk_assessment: Option<Map<String, Value>>,
    #[serde(default)]
    pub(crate) budget: Option<CostTier>,
}

pub(crate) async fn recommendations_handler(
    State(engines): State<Arc<Engines>>,
    Json(payload): Json<RecommendationsRequest>,
) -> Result<Json<StudentRecommendations>, InputError> {
    let student_data = payload
        .student_data
        .filter(|map| !map.is_empty())
        .ok_or(InputError::MissingStudentContext)?;
    let risk_assessment = payload
        .risk_assessment
        .filter(|map| !map.is_empty())
        .ok_or(InputError::MissingStudentContext)?;

    let student: StudentProfile = serde_json::from_value(Value::Object(student_data))
        .map_err(|err| InputError::InvalidStudentContext(err.to_string()))?;
    let assessment: RiskAssessment = serde_json::from_value(Value::Object(risk_assessment))
        .map_err(|err| InputError::InvalidStudentContext(err.to_string()))?;
    let budget = payload.budget.unwrap_or_default();

    let result = engines
        .recommender
        .recommend_for_student(&student, &assessment, budget);
    info!(
        student = result.student_id.as_deref().unwrap_or("unknown"),
        count = result.recommendations.len(),
        "student recommendations generated"
    );
    Ok(Json(result))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SchoolRecommendationsRequest {
    #[serde(default, rename = "schoolData")]
    pub(crate) school_data: Option<Map<String, Value>>,
    #[serde(default, rename = "studentRisks")]
    pub(crate) student_risks: Option<Vec<Value>>,
    #[serde(default)]
    pub(crate) budget: Option<f64>,
}

pub(crate) async fn school_recommendations_handler(
    State(engines): State<Arc<Engines>>,
    Json(payload): Json<SchoolRecommendationsRequest>,
) -> Result<Json<SchoolRecommendations>, InputError> {
    let school_data = payload
        .school_data
        .filter(|map| !map.is_empty())
        .ok_or(InputError::MissingSchoolContext)?;
    let student_risks = payload
        .student_risks
        .filter(|risks| !risks.is_empty())
        .ok_or(InputError::MissingSchoolContext)?;

    let school: SchoolProfile = serde_json::from_value(Value::Object(school_data))
        .map_err(|err| InputError::InvalidSchoolContext(err.to_string()))?;
    let student_risks: Vec<RiskAssessment> = student_risks
        .into_iter()
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|err| InputError::InvalidSchoolContext(err.to_string()))
        })
        .collect::<Result<_, _>>()?;
    let budget = payload.budget.unwrap_or(0.0);

    let result = engines
        .recommender
        .recommend_for_school(&school, &student_risks, budget);
    info!(
        school = result.school_name.as_deref().unwrap_or("unknown"),
        students = result.total_students,
        "school recommendations generated"
    );
    Ok(Json(result))
}
