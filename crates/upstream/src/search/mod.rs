pub mod client;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use icebreak_common::error::IcebreakResult;

use models::SearchResponse;

/// Nearest-neighbour lookup over the submitted answers.
#[async_trait]
pub trait RecordSearch: Send + Sync {
    async fn search(&self, text: &str, top_k: u32) -> IcebreakResult<SearchResponse>;
}

#[async_trait]
impl<T: RecordSearch + ?Sized> RecordSearch for Arc<T> {
    async fn search(&self, text: &str, top_k: u32) -> IcebreakResult<SearchResponse> {
        (**self).search(text, top_k).await
    }
}
