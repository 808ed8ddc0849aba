use icebreak_common::error::{IcebreakError, IcebreakResult};
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_NAMESPACE: &str = "q-and-a-knowledge-base";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.gmi-serving.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct";
/// Largest `top_k` the search backend accepts in one query.
pub const MAX_TOP_K: u32 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub search: SearchConfig,
    pub llm: LlmConfig,
    pub survey: SurveyConfig,
}

/// Vector-search backend. All three credentials are required.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub api_key: String,
    pub index_name: String,
    pub index_host: String,
    pub namespace: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub batch_size: usize,
}

/// Chat-completion backend. A missing key is tolerated at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    pub question_count: usize,
    pub preview_top_k: u32,
    pub corpus_top_k: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> IcebreakResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: parse_var("PORT", "8080")?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            search: SearchConfig::from_env()?,
            llm: LlmConfig::from_env()?,
            survey: SurveyConfig::from_env()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SearchConfig {
    pub fn from_env() -> IcebreakResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_key: get_var("PINECONE_API_KEY")?,
            index_name: get_var("PINECONE_INDEX_NAME")?,
            index_host: normalize_host(&get_var("PINECONE_INDEX_HOST")?),
            namespace: get_var_or("PINECONE_NAMESPACE", DEFAULT_NAMESPACE),
            api_version: get_var_or("PINECONE_API_VERSION", "2025-01"),
            timeout_secs: parse_var("SEARCH_TIMEOUT_SECS", "30")?,
            batch_size: parse_var("INGEST_BATCH_SIZE", "96")?,
        })
    }
}

impl LlmConfig {
    pub fn from_env() -> IcebreakResult<Self> {
        let api_key = env::var("GMI_API_KEY")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        Ok(Self {
            api_key,
            base_url: get_var_or("LLM_BASE_URL", DEFAULT_LLM_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            model: get_var_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            temperature: parse_var("LLM_TEMPERATURE", "0.2")?,
            max_tokens: parse_var("LLM_MAX_TOKENS", "1500")?,
            timeout_secs: parse_var("LLM_TIMEOUT_SECS", "60")?,
        })
    }
}

impl SurveyConfig {
    pub fn from_env() -> IcebreakResult<Self> {
        let cfg = Self {
            question_count: parse_var("QUESTION_COUNT", "3")?,
            preview_top_k: parse_var("PREVIEW_TOP_K", "2")?,
            corpus_top_k: parse_var("CORPUS_TOP_K", "40")?,
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> IcebreakResult<()> {
        if self.question_count == 0 {
            return Err(IcebreakError::Config(
                "QUESTION_COUNT must be at least 1".to_owned(),
            ));
        }
        if self.preview_top_k == 0 {
            return Err(IcebreakError::Config(
                "PREVIEW_TOP_K must be at least 1".to_owned(),
            ));
        }
        if self.corpus_top_k == 0 {
            return Err(IcebreakError::Config(
                "CORPUS_TOP_K must be at least 1".to_owned(),
            ));
        }

        let window = u64::from(self.preview_top_k) + u64::from(self.corpus_top_k);
        if window > u64::from(MAX_TOP_K) {
            return Err(IcebreakError::Config(format!(
                "PREVIEW_TOP_K + CORPUS_TOP_K must not exceed {MAX_TOP_K}, got {window}"
            )));
        }

        Ok(())
    }

    /// Every session draws `question_count` distinct questions from the pool.
    pub fn ensure_fits_pool(&self, pool_size: usize) -> IcebreakResult<()> {
        if self.question_count > pool_size {
            return Err(IcebreakError::Config(format!(
                "QUESTION_COUNT is {} but the question pool only holds {pool_size}",
                self.question_count
            )));
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            question_count: 3,
            preview_top_k: 2,
            corpus_top_k: 40,
        }
    }
}

fn get_var(key: &str) -> IcebreakResult<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| IcebreakError::Config(format!("{key} is required but not set")))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var<T>(key: &str, default: &str) -> IcebreakResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    get_var_or(key, default)
        .trim()
        .parse()
        .map_err(|e| IcebreakError::Config(format!("invalid {key}: {e}")))
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_owned()
    } else {
        format!("https://{host}")
    }
}
