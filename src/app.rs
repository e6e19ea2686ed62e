use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{get_handler, health_handler, list_handler, urls_js_handler};
use crate::routes;
use crate::state::AppState;

/// Build the service router with all endpoints and docs mounted
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::service::HEALTH, get(health_handler))
        .route(routes::service::ROUTE_LIST, get(list_handler))
        .route(routes::service::ROUTE_ITEM, get(get_handler))
        .route(routes::URLS_JS, get(urls_js_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
