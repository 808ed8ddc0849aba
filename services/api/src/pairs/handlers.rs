use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::AppState;

use super::requests::GeneratePairsRequest;
use super::responses::PairsResponse;

pub async fn generate_pairs(
    State(state): State<AppState>,
    Json(body): Json<GeneratePairsRequest>,
) -> Result<Json<PairsResponse>, ApiError> {
    let pairs = state
        .pairing
        .generate(&body.current_user, &body.all_users_data)
        .await?;

    Ok(Json(PairsResponse {
        success: true,
        pairs,
    }))
}
