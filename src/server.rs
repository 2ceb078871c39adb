//! Action server: the HTTP webhook the dialogue runtime calls.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/webhook` | POST | Run the action named in `next_action` |
//! | `/actions` | GET | List registered action names |
//! | `/health` | GET | Liveness probe |

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use numloc_action::{ActionError, ActionRegistry, Domain, Event, Tracker};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /webhook`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    #[serde(default)]
    pub domain: Domain,
    #[serde(default)]
    pub version: Option<String>,
}

/// Successful `POST /webhook` reply.
#[derive(Debug, Clone, Serialize)]
pub struct ActionReply {
    pub events: Vec<Event>,
    pub responses: Vec<numloc_action::Response>,
}

#[derive(Debug, Clone, Serialize)]
struct ActionName<'a> {
    name: &'a str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Wraps [`ActionError`] so it can be turned into an HTTP response.
#[derive(Debug)]
pub struct ServerError(ActionError);

impl From<ActionError> for ServerError {
    fn from(err: ActionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, action_name) = match &self.0 {
            ActionError::NotFound(name) => (StatusCode::NOT_FOUND, name.clone()),
            ActionError::Failed { action, .. } => (StatusCode::INTERNAL_SERVER_ERROR, action.clone()),
        };
        let body = serde_json::json!({
            "error": self.0.to_string(),
            "action_name": action_name,
        });
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct ServerState {
    registry: Arc<ActionRegistry>,
}

pub fn router(registry: Arc<ActionRegistry>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/actions", get(list_actions))
        .route("/webhook", post(webhook))
        .with_state(ServerState { registry })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_actions(State(state): State<ServerState>) -> Json<serde_json::Value> {
    let names: Vec<ActionName<'_>> = state.registry.names().map(|name| ActionName { name }).collect();
    Json(serde_json::json!(names))
}

async fn webhook(
    State(state): State<ServerState>,
    Json(mut call): Json<ActionCall>,
) -> Result<Json<ActionReply>, ServerError> {
    if call.tracker.sender_id.is_empty() {
        if let Some(sender) = call.sender_id.take() {
            call.tracker.sender_id = sender;
        }
    }
    tracing::debug!(
        action = %call.next_action,
        sender = %call.tracker.sender_id,
        version = call.version.as_deref().unwrap_or("-"),
        "webhook call"
    );

    let outcome = state
        .registry
        .run(&call.next_action, &call.tracker, &call.domain)
        .inspect_err(|err| tracing::warn!(action = %call.next_action, error = %err, "action failed"))?;

    Ok(Json(ActionReply {
        events: outcome.events,
        responses: outcome.responses,
    }))
}

// ---------------------------------------------------------------------------
// Serving
// ---------------------------------------------------------------------------

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, registry: Arc<ActionRegistry>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "action server listening");
    axum::serve(listener, router(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("action server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
