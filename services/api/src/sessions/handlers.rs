use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use icebreak_common::error::IcebreakError;
use icebreak_matching::{constellation, question_popularity};
use icebreak_store::Session;
use icebreak_survey::Collector;

use crate::error::ApiError;
use crate::extractors::SessionId;
use crate::pairs::responses::PairsResponse;
use crate::AppState;

use super::requests::{AnswerRequest, NameRequest};
use super::responses::{InsightsResponse, ResultsResponse, SessionResponse};
use super::results::{ensure_results, load_session};

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let questions = state
        .questions
        .select(state.survey.question_count, &mut rand::thread_rng())?;

    let session = state
        .sessions
        .create(Session::new(Collector::new(questions)?))
        .await?;

    tracing::info!(session_id = %session.id, "session started");
    Ok((StatusCode::CREATED, Json(SessionResponse::from(&session))))
}

pub async fn get_session(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = load_session(&state, id).await?;
    Ok(Json(SessionResponse::from(&session)))
}

pub async fn submit_name(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(body): Json<NameRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let saved = state
        .sessions
        .modify(
            id,
            Box::new(move |session: &mut Session| {
                session.collector.submit_name(&body.name).map(|_| ())
            }),
        )
        .await?;

    Ok(Json(SessionResponse::from(&saved)))
}

pub async fn submit_answer(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(body): Json<AnswerRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let saved = state
        .sessions
        .modify(
            id,
            Box::new(move |session: &mut Session| {
                session.collector.submit_answer(&body.answer).map(|_| ())
            }),
        )
        .await?;

    let step = saved.collector.step();
    tracing::debug!(session_id = %saved.id, step = step.as_str(), "answer recorded");
    Ok(Json(SessionResponse::from(&saved)))
}

pub async fn get_results(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<ResultsResponse>, ApiError> {
    let session = ensure_results(&state, load_session(&state, id).await?).await?;
    let results = session
        .results
        .ok_or_else(|| IcebreakError::Internal("results missing after fetch".to_string()))?;

    let more_hits = results
        .more_hits(
            state.survey.preview_top_k as usize,
            state.survey.corpus_top_k as usize,
        )
        .to_vec();

    Ok(Json(ResultsResponse {
        success: true,
        top_hits: results.top_hits,
        more_hits,
    }))
}

pub async fn generate_pairs(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<PairsResponse>, ApiError> {
    let session = load_session(&state, id).await?;
    let current = session.collector.current_user()?;

    let session = ensure_results(&state, session).await?;
    let corpus = session
        .results
        .as_ref()
        .map(|r| r.wide_hits.as_slice())
        .unwrap_or_default();

    let pairs = state.pairing.generate(&current, corpus).await?;
    Ok(Json(PairsResponse {
        success: true,
        pairs,
    }))
}

pub async fn get_insights(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<InsightsResponse>, ApiError> {
    let session = ensure_results(&state, load_session(&state, id).await?).await?;
    let corpus = session
        .results
        .as_ref()
        .map(|r| r.wide_hits.as_slice())
        .unwrap_or_default();

    Ok(Json(InsightsResponse {
        success: true,
        popularity: question_popularity(corpus),
        constellation: constellation(corpus, &mut rand::thread_rng()),
    }))
}
