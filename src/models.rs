use serde::{Deserialize, Serialize};

use crate::routes::RouteEntry;

/// Response type for a single route lookup
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub name: String,
    pub template: String,
    pub relative: bool,
}

impl From<&RouteEntry> for RouteResponse {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            template: entry.template.to_string(),
            relative: entry.is_relative(),
        }
    }
}

/// Query parameters for list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub prefix: Option<String>,
}

/// Response type for list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteListResponse {
    pub data: Vec<RouteResponse>,
    pub total_count: usize,
}
