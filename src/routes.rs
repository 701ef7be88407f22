//! # Routes
//!
//! HTTP surface of the service. Each concept has a single route answering
//! GET, POST, PUT, DELETE and PATCH with the same responder:
//!
//! * `/api/error/:status_code`
//! * `/api/random/:error_percent/:delay_ms/:status_code`
//! * `/api/timeout/:timeout_ms`
//!
//! Request bodies are accepted on every method and ignored. Path segments
//! that are not numbers are rejected by the path extractor with a `400`.

use crate::{
    decider::Decider,
    error::Error,
    model::{Body, Reply},
    responder::{DelayResponder, RandomFaultResponder, StatusResponder},
};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{on, MethodFilter},
    Json, Router,
};
use std::sync::Arc;

/// Methods served on every route.
pub const METHODS: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE)
    .or(MethodFilter::PATCH);

/// Shared state of the router.
#[derive(Debug, Clone)]
pub struct AppState {
    random: RandomFaultResponder,
}

impl AppState {
    pub fn new(decider: Arc<dyn Decider>) -> Self {
        AppState {
            random: RandomFaultResponder::new(decider),
        }
    }
}

/// Create the router, drawing random faults from `decider`.
pub fn router(decider: Arc<dyn Decider>) -> Router {
    Router::new()
        .route("/api/error/:status_code", on(METHODS, fixed_status))
        .route(
            "/api/random/:error_percent/:delay_ms/:status_code",
            on(METHODS, random_fault),
        )
        .route("/api/timeout/:timeout_ms", on(METHODS, delayed))
        .with_state(AppState::new(decider))
}

async fn fixed_status(Path(status_code): Path<i32>) -> Reply {
    StatusResponder.respond(status_code)
}

async fn random_fault(
    State(state): State<AppState>,
    Path((error_percent, delay_ms, status_code)): Path<(i32, i64, i32)>,
) -> Reply {
    state
        .random
        .respond(error_percent, delay_ms, status_code)
        .await
}

async fn delayed(method: Method, Path(timeout_ms): Path<i64>) -> Reply {
    DelayResponder.respond(timeout_ms, method.as_str()).await
}

/// Status line for a reply, if the code can end a response.
///
/// Informational (1xx) codes cannot be a final response: hyper would turn
/// them into an empty `500`.
fn status_line(status: i32) -> Option<StatusCode> {
    u16::try_from(status)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|code| !code.is_informational())
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let Some(status) = status_line(self.status) else {
            tracing::warn!(status = self.status, "status code cannot be sent");
            return Error::UnrepresentableStatus(self.status).into_response();
        };

        match self.body {
            Body::Text(text) => (status, text).into_response(),
            body => (status, Json(body)).into_response(),
        }
    }
}
