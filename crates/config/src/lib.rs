pub mod env;
pub mod tracing_init;

pub use env::{AppConfig, LlmConfig, SearchConfig, SurveyConfig, MAX_TOP_K};
pub use tracing_init::init_tracing;
