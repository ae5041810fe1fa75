use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::http::AppState;
use crate::models::types::{ChatRequest, ChatResponse, StatusResponse};
use crate::services::helper_script::resolve_chat_url;

const HELPER_CONTENT_TYPE: &str = "text/x-python; charset=utf-8";

/// GET / - liveness only.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

/// POST /chat - always 200; provider failures are folded into `reply`.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let outcome = state.relay.relay(&req.prompt).await;
    Json(ChatResponse::from(outcome))
}

/// GET /j_helper.py - notebook snippet pointing back at this instance's /chat.
pub async fn j_helper(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let scheme = forwarded_proto(&headers).unwrap_or("http");
    let authority = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()));

    let Some(authority) = authority else {
        return (StatusCode::BAD_REQUEST, "cannot resolve base URL: no Host header").into_response();
    };
    let chat_url = match resolve_chat_url(scheme, &authority) {
        Ok(url) => url,
        Err(e) => {
            warn!(host = %authority, error = %e, "j_helper: invalid host");
            return (StatusCode::BAD_REQUEST, format!("cannot resolve base URL: {}", e)).into_response();
        }
    };

    match state.helper.render(&chat_url) {
        Ok(body) => {
            info!(chat_url = %chat_url, "j_helper: served");
            ([(header::CONTENT_TYPE, HELPER_CONTENT_TYPE)], body).into_response()
        }
        Err(e) => {
            error!(error = %e, "j_helper: template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "helper script unavailable").into_response()
        }
    }
}

fn forwarded_proto(headers: &HeaderMap) -> Option<&'static str> {
    let first = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())?
        .trim();
    if first.eq_ignore_ascii_case("https") {
        Some("https")
    } else if first.eq_ignore_ascii_case("http") {
        Some("http")
    } else {
        None
    }
}
