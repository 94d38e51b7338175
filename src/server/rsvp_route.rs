use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{post, MethodRouter};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::rsvp::relay::RelayError;
use crate::rsvp::submission::RsvpSubmission;
use crate::server::server::AppState;

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: &'static str,
}

fn reply(status: StatusCode, success: bool, message: &'static str) -> Response {
    (status, Json(RelayResponse { success, message })).into_response()
}

pub fn method_router() -> MethodRouter<AppState> {
    post(handle_rsvp).fallback(method_not_allowed)
}

async fn method_not_allowed() -> Response {
    reply(StatusCode::METHOD_NOT_ALLOWED, false, "Method not allowed")
}

/// Failures past validation answer with a generic 500; details stay in the log.
async fn handle_rsvp(State(state): State<AppState>, body: Bytes) -> Response {
    let submission: RsvpSubmission = match serde_json::from_slice(&body) {
        Ok(s) => s,
        Err(e) => {
            warn!("rejecting unparseable submission: {}", e);
            return reply(StatusCode::BAD_REQUEST, false, "Invalid request body");
        }
    };

    match state.relay.submit(&submission).await {
        Ok(()) => {
            info!("rsvp stored");
            reply(StatusCode::OK, true, "RSVP received successfully")
        }
        Err(RelayError::MissingFields) => {
            reply(StatusCode::BAD_REQUEST, false, "Missing required fields")
        }
        Err(e) => {
            error!("error processing rsvp: {}", e);
            reply(StatusCode::INTERNAL_SERVER_ERROR, false, "Internal server error")
        }
    }
}
