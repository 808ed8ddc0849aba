use chrono::{DateTime, Utc};
use icebreak_common::types::SearchHit;
use icebreak_survey::Collector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Similarity results fetched once the session reached review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResults {
    pub top_hits: Vec<SearchHit>,
    /// The full larger result set. Pairing and insights read all of it.
    pub wide_hits: Vec<SearchHit>,
    pub fetched_at: DateTime<Utc>,
}

impl SessionResults {
    /// `wide_hits[skip..min(len, skip + limit)]`: the larger set minus the
    /// entries already shown as the preview.
    pub fn more_hits(&self, skip: usize, limit: usize) -> &[SearchHit] {
        let len = self.wide_hits.len();
        let start = skip.min(len);
        let end = skip.saturating_add(limit).min(len);
        &self.wide_hits[start..end]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub collector: Collector,
    pub results: Option<SessionResults>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(collector: Collector) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            collector,
            results: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
