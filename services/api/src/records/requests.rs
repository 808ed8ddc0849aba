use icebreak_common::error::{IcebreakError, IcebreakResult};
use icebreak_config::MAX_TOP_K;
use serde::Deserialize;

/// Raw query string. `kAmount` stays a string so a bad number is a
/// validation error with the usual JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct FetchRecordsQuery {
    pub q: Option<String>,
    #[serde(rename = "kAmount")]
    pub k_amount: Option<String>,
}

impl FetchRecordsQuery {
    pub fn validate(&self) -> IcebreakResult<(&str, u32)> {
        let text = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| IcebreakError::Validation("q must not be empty".to_string()))?;

        let raw = self
            .k_amount
            .as_deref()
            .ok_or_else(|| IcebreakError::Validation("kAmount is required".to_string()))?;

        let top_k = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|k| (1..=MAX_TOP_K).contains(k))
            .ok_or_else(|| {
                IcebreakError::Validation(format!(
                    "kAmount must be an integer between 1 and {MAX_TOP_K}, got {raw:?}"
                ))
            })?;

        Ok((text, top_k))
    }
}
