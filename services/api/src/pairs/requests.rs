use icebreak_common::types::{CurrentUser, SearchHit};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeneratePairsRequest {
    #[serde(rename = "currentUser", default)]
    pub current_user: CurrentUser,
    #[serde(rename = "allUsersData", default)]
    pub all_users_data: Vec<SearchHit>,
}
