use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::AppState;

use super::requests::FetchRecordsQuery;
use super::responses::FetchRecordsResponse;

pub async fn fetch_records(
    State(state): State<AppState>,
    Query(query): Query<FetchRecordsQuery>,
) -> Result<Json<FetchRecordsResponse>, ApiError> {
    let (text, top_k) = query.validate()?;

    let data = state.search.search(text, top_k).await?;
    tracing::info!(top_k, hits = data.hits().len(), "records fetched");

    Ok(Json(FetchRecordsResponse {
        success: true,
        data,
    }))
}
