use crate::models::{ListQuery, RouteListResponse, RouteResponse};
use crate::routes;
use axum::{extract::Query, http::StatusCode, Json};

/// GET /routes handler - List the route table
///
/// Entries come back in table order.
/// Query parameters:
/// - prefix: Keep only templates starting with this value (optional)
#[utoipa::path(
    get,
    path = routes::service::ROUTE_LIST,
    params(
        ("prefix" = Option<String>, Query, description = "Keep only templates starting with this value")
    ),
    responses(
        (status = 200, description = "Route table", body = RouteListResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(
    Query(query): Query<ListQuery>,
) -> (StatusCode, Json<RouteListResponse>) {
    let prefix = query.prefix.as_deref().unwrap_or("");

    let data: Vec<RouteResponse> = routes::entries()
        .iter()
        .filter(|entry| entry.template.starts_with(prefix))
        .map(RouteResponse::from)
        .collect();

    let response = RouteListResponse {
        total_count: data.len(),
        data,
    };

    tracing::info!(
        "Listed {} routes (prefix: {:?})",
        response.total_count,
        query.prefix
    );

    (StatusCode::OK, Json(response))
}
