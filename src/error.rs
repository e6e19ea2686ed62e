use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error type for route lookups and template expansion
///
/// Lookups by name and placeholder substitution fail fast with one of these
/// variants. When the error reaches an HTTP handler it is mapped to a status
/// code and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Route name not present in the table
    UnknownRoute(String),
    /// Template placeholder with no value supplied
    MissingBinding { placeholder: String, template: String },
    /// Template whose brackets do not form `<name>` placeholders: an
    /// unterminated `<`, an empty name, a name containing `/` or `<`, or a
    /// stray `>` outside any placeholder
    MalformedTemplate(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnknownRoute(name) => write!(f, "Unknown route: {}", name),
            ApiError::MissingBinding {
                placeholder,
                template,
            } => write!(
                f,
                "Missing value for placeholder <{}> in '{}'",
                placeholder, template
            ),
            ApiError::MalformedTemplate(template) => {
                write!(f, "Malformed path template: '{}'", template)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            ApiError::MissingBinding { .. } | ApiError::MalformedTemplate(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
