use crate::error::{ApiError, ErrorResponse};
use crate::models::RouteResponse;
use crate::routes;
use axum::{extract::Path, http::StatusCode, Json};

/// GET /routes/{name} handler - Look up one path template by route name
#[utoipa::path(
    get,
    path = routes::service::ROUTE_ITEM,
    params(
        ("name" = String, Path, description = "Route name, e.g. incidentNumber")
    ),
    responses(
        (status = 200, description = "Route found", body = RouteResponse),
        (status = 404, description = "Unknown route", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn get_handler(
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    match routes::entry(&name) {
        Ok(entry) => {
            tracing::info!("Resolved route {} -> {}", entry.name, entry.template);
            Ok((StatusCode::OK, Json(RouteResponse::from(&entry))))
        }
        Err(err) => {
            tracing::warn!("Route lookup failed: {}", err);
            Err(err)
        }
    }
}
