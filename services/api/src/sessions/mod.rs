pub mod handlers;
pub mod requests;
pub mod responses;
pub mod results;

use axum::routing::{get, post, put};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", post(handlers::create_session))
        .route("/api/sessions/{id}", get(handlers::get_session))
        .route("/api/sessions/{id}/name", put(handlers::submit_name))
        .route("/api/sessions/{id}/answers", post(handlers::submit_answer))
        .route("/api/sessions/{id}/results", get(handlers::get_results))
        .route("/api/sessions/{id}/pairs", post(handlers::generate_pairs))
        .route("/api/sessions/{id}/insights", get(handlers::get_insights))
}
