pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::helper_script::HelperScript;
use crate::services::relay::RelayService;

/// Everything the handlers need, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub helper: Arc<HelperScript>,
}

impl AppState {
    pub fn new(relay: RelayService, helper: HelperScript) -> Self {
        Self {
            relay: Arc::new(relay),
            helper: Arc::new(helper),
        }
    }
}

/// Any origin, method and header with credentials. A literal `*` is not allowed
/// together with credentials, so the request values are mirrored back.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/chat", post(handlers::chat))
        .route("/j_helper.py", get(handlers::j_helper))
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}
