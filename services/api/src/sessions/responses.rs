use chrono::{DateTime, Utc};
use icebreak_common::types::SearchHit;
use icebreak_matching::{Constellation, QuestionCount};
use icebreak_store::Session;
use icebreak_survey::Step;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub step: Step,
    pub questions: Vec<String>,
    pub name: String,
    pub answers: Vec<String>,
    pub current_question: Option<String>,
    pub results_ready: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let collector = &session.collector;
        Self {
            id: session.id,
            step: collector.step(),
            questions: collector.questions().to_vec(),
            name: collector.name().to_string(),
            answers: collector.answers().to_vec(),
            current_question: collector.current_question().map(String::from),
            results_ready: session.results.is_some(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: SessionView,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            success: true,
            session: SessionView::from(session),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub success: bool,
    pub top_hits: Vec<SearchHit>,
    pub more_hits: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub popularity: Vec<QuestionCount>,
    pub constellation: Constellation,
}
