use icebreak_common::types::{SearchHit, Submission};
use serde::{Deserialize, Serialize};

/// Only these record fields are requested and passed on.
pub const RETURNED_FIELDS: [&str; 3] = ["answer", "question", "person"];

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: SearchQuery<'a>,
    pub fields: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub inputs: QueryInputs<'a>,
    pub top_k: u32,
}

#[derive(Debug, Serialize)]
pub struct QueryInputs<'a> {
    pub text: &'a str,
}

impl<'a> SearchRequest<'a> {
    pub fn new(text: &'a str, top_k: u32) -> Self {
        Self {
            query: SearchQuery {
                inputs: QueryInputs { text },
                top_k,
            },
            fields: &RETURNED_FIELDS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: SearchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<SearchUsage>,
}

impl SearchResponse {
    pub fn hits(&self) -> &[SearchHit] {
        &self.result.hits
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.result.hits
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchUsage {
    #[serde(default)]
    pub read_units: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_total_tokens: Option<u64>,
}

/// One line of an NDJSON upsert body. The index embeds `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub answer: String,
    pub question: String,
    pub person: String,
}

impl UpsertRecord {
    pub fn new(id: String, submission: Submission) -> Self {
        Self {
            id,
            answer: submission.answer,
            question: submission.question,
            person: submission.person,
        }
    }
}
