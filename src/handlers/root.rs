use crate::app_state::AppState;
use axum::{extract::State, http::Method, response::IntoResponse};

/// Handler label recorded for every request served here.
///
/// This handler also serves as the router fallback, so requests to any
/// unknown path are counted under the same label.
const ROOT_HANDLER: &str = "/";

/// Counts the request and greets the caller.
///
/// Recording is best-effort; the greeting is returned regardless of what
/// the metrics backend does.
pub async fn root_handler(State(state): State<AppState>, method: Method) -> impl IntoResponse {
    // ---
    state
        .metrics()
        .record_http_request(method.as_str(), ROOT_HANDLER);

    "Hello, Prometheus!"
}
