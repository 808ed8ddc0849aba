pub mod error;
pub mod llm;
pub mod search;

pub use error::UpstreamError;
pub use llm::client::ChatClient;
pub use llm::ChatModel;
pub use search::client::SearchClient;
pub use search::models::{SearchResponse, SearchResult, SearchUsage, UpsertRecord};
pub use search::RecordSearch;
