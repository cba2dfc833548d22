//! HTTP API for the repurpose service.

use crate::Orchestrator;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use snippetstream_core::{CallerIdentity, GenerationRequest, RepurposeResponse, UsageEvent};
use snippetstream_error::{
    AuthorizationError, InputError, InputErrorKind, SnippetError, UnexpectedError,
};
use snippetstream_interface::AuthProvider;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "SnippetStream";

/// API state shared by every handler.
#[derive(Clone)]
pub struct ApiState {
    orchestrator: Arc<Orchestrator>,
    auth: Arc<dyn AuthProvider>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(orchestrator: Arc<Orchestrator>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { orchestrator, auth }
    }

    async fn caller(&self, headers: &HeaderMap) -> Result<CallerIdentity, ApiError> {
        let credential = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value));
        Ok(self.auth.authenticate(credential).await?)
    }
}

/// Error answered with its mapped status and a `{"detail": ..}` body.
#[derive(Debug)]
pub struct ApiError(SnippetError);

impl From<SnippetError> for ApiError {
    fn from(err: SnippetError) -> Self {
        Self(err)
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        Self(err.into())
    }
}

impl From<UnexpectedError> for ApiError {
    fn from(err: UnexpectedError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(InputError::new(InputErrorKind::MalformedBody(rejection.body_text())).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
        (status, Json(json!({"detail": self.0.public_message()}))).into_response()
    }
}

/// Creates the service router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/repurpose", post(repurpose))
        .route("/analytics/track", post(track))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Turn a daily log into thread, post and carousel artifacts.
///
/// The request runs on its own task; a panic anywhere inside it is answered
/// with a generic 500.
#[instrument(skip_all)]
async fn repurpose(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<RepurposeResponse>, ApiError> {
    let caller = state.caller(&headers).await?;
    let Json(request) = body?;

    let orchestrator = state.orchestrator.clone();
    let response = tokio::spawn(async move { orchestrator.repurpose(&caller, &request).await })
        .await
        .map_err(|e| UnexpectedError::new(format!("Repurpose task failed: {}", e)))??;
    Ok(Json(response))
}

/// Record a client analytics event. Storage failures are reported in the body.
#[instrument(skip_all)]
async fn track(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let caller = state.caller(&headers).await?;
    let Json(payload) = body?;
    let event = UsageEvent::tracked(&caller, payload);

    match state.orchestrator.store().record_usage(event).await {
        Ok(()) => Ok(Json(json!({"status": "tracked"}))),
        Err(e) => {
            error!(error = %e, "Failed to track event");
            Ok(Json(json!({"status": "error", "message": e.message})))
        }
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "healthy", "service": SERVICE_NAME})),
    )
}
