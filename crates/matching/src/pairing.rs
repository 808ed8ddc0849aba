use icebreak_common::error::{IcebreakError, IcebreakResult};
use serde::{Deserialize, Serialize};

use crate::extract::extract_json_object;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch {
    pub match_with: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub person: String,
    #[serde(default)]
    pub matches: Vec<PairMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSet {
    pub pairings: Vec<Pairing>,
}

impl PairingSet {
    pub fn for_person(&self, name: &str) -> Option<&Pairing> {
        self.pairings.iter().find(|p| p.person == name)
    }
}

/// Parse model output into pairings. Anything that is not an object with a
/// `pairings` array is a malformed response.
pub fn parse_pairings(text: &str) -> IcebreakResult<PairingSet> {
    let json = extract_json_object(text).ok_or_else(|| {
        tracing::error!(raw = %text, "model reply contains no JSON object");
        IcebreakError::MalformedResponse("failed to parse LLM response as JSON".to_string())
    })?;

    serde_json::from_str::<PairingSet>(json).map_err(|e| {
        tracing::error!(error = %e, raw = %text, "model reply has no usable pairings");
        IcebreakError::MalformedResponse(format!("LLM response lacks a pairings array: {e}"))
    })
}
