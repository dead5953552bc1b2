//! HTTP adapter for the scoring engine.
//!
//! - `GET /health` - liveness
//! - `GET /models` - registered model names
//! - `POST /predict` - `{"model_type": "...", "data": {...}}`
//!
//! Scoring failures come back as `200 {"error": ...}`, including a `data`
//! that is not an object and a `model_type` that is not a string. Only a
//! missing `model_type` or a body that is not a JSON object is a 400, and a
//! panic inside a handler is turned into a 500.

use crate::application::engine::ScoringEngine;
use crate::domain::errors::ScoreError;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

type SharedEngine = Arc<ScoringEngine>;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub model_type: Value,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ErrorBody {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

pub fn router(engine: SharedEngine) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/models", get(list_models))
        .route("/predict", post(predict))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(engine)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}

async fn list_models(State(engine): State<SharedEngine>) -> impl IntoResponse {
    Json(serde_json::json!({
        "models": engine.model_names(),
        "timestamp": Utc::now(),
    }))
}

async fn predict(
    State(engine): State<SharedEngine>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (StatusCode::BAD_REQUEST, ErrorBody::json(rejection.body_text()))
                .into_response();
        }
    };

    let outcome = match request.model_type {
        Value::Null => None,
        Value::String(name) if name.is_empty() => None,
        Value::String(name) => {
            info!("Prediction requested: model={}", name);
            Some(engine.predict_value(&name, request.data))
        }
        // Registered names are strings, so nothing else can match.
        other => {
            info!("Prediction requested with non-string model_type: {}", other);
            Some(Err(ScoreError::UnknownModel {
                name: other.to_string(),
            }))
        }
    };

    let Some(outcome) = outcome else {
        let missing = ScoreError::MissingParameter {
            name: "model_type".to_string(),
        };
        return (StatusCode::BAD_REQUEST, ErrorBody::json(missing.to_string())).into_response();
    };

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (StatusCode::OK, ErrorBody::json(e.to_string())).into_response(),
    }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, ErrorBody::json("Not found")).into_response()
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    error!("Handler panicked: {}", message);
    (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::json(message)).into_response()
}
