use icebreak_upstream::SearchResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FetchRecordsResponse {
    pub success: bool,
    pub data: SearchResponse,
}
