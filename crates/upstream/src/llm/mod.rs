pub mod client;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use icebreak_common::error::IcebreakResult;

/// A single-turn chat completion returning the assistant's text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> IcebreakResult<String>;
}

#[async_trait]
impl<T: ChatModel + ?Sized> ChatModel for Arc<T> {
    async fn complete(&self, system: &str, prompt: &str) -> IcebreakResult<String> {
        (**self).complete(system, prompt).await
    }
}
