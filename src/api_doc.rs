use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{RouteListResponse, RouteResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ims-urls API",
        version = "1.0.0",
        description = "Route table shared by the IMS server and its browser client"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_handler,
        handlers::list::list_handler,
        handlers::script::urls_js_handler
    ),
    components(
        schemas(
            RouteResponse,
            RouteListResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route table operations")
    )
)]
pub struct ApiDoc;
