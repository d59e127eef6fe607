use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use edulink_ai::engines::{engine_router, Engines};
use serde_json::json;
use std::sync::Arc;

/// Mount the engine endpoints alongside the operational routes.
pub(crate) fn with_engine_routes(engines: Arc<Engines>) -> axum::Router {
    engine_router(engines)
        .route("/", axum::routing::get(index))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "EduLink AI Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "language_detection": "/ai/detect-language",
            "risk_scoring": "/ai/score-risk",
            "batch_risk_scoring": "/ai/score-risk/batch",
            "student_recommendations": "/ai/recommendations",
            "school_recommendations": "/ai/recommendations/school"
        }
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "edulink-ai",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_service_identity() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "edulink-ai");
    }

    #[tokio::test]
    async fn index_lists_engine_endpoints() {
        let Json(body) = index().await;
        assert_eq!(body["endpoints"]["risk_scoring"], "/ai/score-risk");
        assert_eq!(
            body["endpoints"]["school_recommendations"],
            "/ai/recommendations/school"
        );
    }
}
