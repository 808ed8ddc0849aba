use chrono::Utc;
use icebreak_common::error::{IcebreakError, IcebreakResult};
use icebreak_store::{Session, SessionResults};

use crate::AppState;

/// Load a session or fail with `NotFound`.
pub async fn load_session(state: &AppState, id: uuid::Uuid) -> IcebreakResult<Session> {
    state
        .sessions
        .get_by_id(id)
        .await?
        .ok_or_else(|| IcebreakError::NotFound(format!("session {id} not found")))
}

/// Fetch similarity results the first time a completed session asks for them.
///
/// The preview and the larger result set are requested together. A failed
/// fetch leaves the session untouched so the next request retries. When two
/// requests race, the first stored result set wins.
pub async fn ensure_results(state: &AppState, session: Session) -> IcebreakResult<Session> {
    if session.results.is_some() {
        return Ok(session);
    }

    if !session.collector.is_complete() {
        return Err(IcebreakError::Validation(
            "answer every question before requesting results".to_string(),
        ));
    }

    let query = session.collector.query_text();
    let preview_k = state.survey.preview_top_k;
    let wide_k = state.survey.corpus_top_k;

    let (preview, wide) = tokio::try_join!(
        state.search.search(&query, preview_k),
        state.search.search(&query, wide_k),
    )?;

    let results = SessionResults {
        top_hits: preview.into_hits(),
        wide_hits: wide.into_hits(),
        fetched_at: Utc::now(),
    };

    tracing::info!(session_id = %session.id, preview_k, wide_k, "session results fetched");
    state
        .sessions
        .modify(
            session.id,
            Box::new(move |stored: &mut Session| {
                if stored.results.is_none() {
                    stored.results = Some(results);
                }
                Ok(())
            }),
        )
        .await
}
