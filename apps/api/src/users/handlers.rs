use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::users::display_name::format_display_name;

#[derive(Debug, Deserialize)]
pub struct DisplayNameQuery {
    pub raw: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DisplayNameResponse {
    pub display_name: String,
}

/// GET /api/v1/users/display-name?raw=
pub async fn handle_display_name(
    Query(params): Query<DisplayNameQuery>,
) -> Json<DisplayNameResponse> {
    Json(DisplayNameResponse {
        display_name: format_display_name(params.raw.as_deref()),
    })
}
