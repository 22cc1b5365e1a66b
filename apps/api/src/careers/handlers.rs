use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::{Career, CareerMatch};
use crate::models::quiz::ProfileScores;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Trait label → percentage. Labels are matched case-insensitively.
    pub profile: BTreeMap<String, u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub profile: ProfileScores,
    pub matches: Vec<CareerMatch>,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<Career>> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/careers/match
///
/// Ranks the catalog against a caller-supplied profile. Unknown trait labels
/// are ignored unless strict validation is enabled.
pub async fn handle_match_careers(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = ProfileScores::from_raw(&request.profile, state.config.strict_validation)?;
    let matches = state.matcher.rank(&profile, &state.catalog);

    Ok(Json(MatchResponse { profile, matches }))
}
