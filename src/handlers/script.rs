use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

/// GET /ims/urls.js handler - Route table as a browser script
///
/// Serves the body rendered at startup with a private cache lifetime taken
/// from `URLS_JS_MAX_AGE_SECS`.
#[utoipa::path(
    get,
    path = routes::URLS_JS,
    responses(
        (status = 200, description = "Route table as JavaScript variable declarations", content_type = "text/javascript", body = String)
    ),
    tag = "routes"
)]
pub async fn urls_js_handler(State(state): State<AppState>) -> impl IntoResponse {
    let cache_control = format!("max-age={}, private", state.config.urls_js_max_age_secs);
    tracing::debug!("Serving urls.js ({} bytes)", state.urls_js.len());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        state.urls_js.clone(),
    )
}
