mod error;
mod extractors;
mod pairs;
mod records;
mod sessions;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use icebreak_common::error::IcebreakResult;
use icebreak_common::types::ServiceInfo;
use icebreak_config::{init_tracing, AppConfig, SurveyConfig};
use icebreak_matching::PairingEngine;
use icebreak_store::{InMemorySessionRepository, SessionRepository};
use icebreak_survey::QuestionPool;
use icebreak_upstream::{ChatClient, ChatModel, RecordSearch, SearchClient, UpstreamError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn RecordSearch>,
    pub pairing: Arc<PairingEngine<Arc<dyn ChatModel>>>,
    pub sessions: Arc<dyn SessionRepository>,
    pub questions: Arc<QuestionPool>,
    pub survey: SurveyConfig,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("icebreak-api"))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(records::router())
        .merge(pairs::router())
        .merge(sessions::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `None` when no chat key is configured; pairing then reports a
/// configuration error per request.
fn build_chat_model(config: &AppConfig) -> Result<Option<Arc<dyn ChatModel>>, UpstreamError> {
    match ChatClient::new(config.llm.clone()) {
        Ok(client) => {
            let model: Arc<dyn ChatModel> = Arc::new(client);
            Ok(Some(model))
        }
        Err(UpstreamError::MissingCredentials(key)) => {
            tracing::warn!(key, "chat credentials missing; pair generation is disabled");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// The built-in pool, checked against the configured question count so a
/// bad `QUESTION_COUNT` fails at startup rather than on every new session.
fn question_pool(survey: &SurveyConfig) -> IcebreakResult<QuestionPool> {
    let pool = QuestionPool::default();
    survey.ensure_fits_pool(pool.len())?;
    Ok(pool)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };
    tracing::info!(
        service = "icebreak-api",
        index = %config.search.index_name,
        namespace = %config.search.namespace,
        "starting"
    );

    let questions = match question_pool(&config.survey) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "invalid survey config");
            std::process::exit(1);
        }
    };

    let search = SearchClient::new(config.search.clone()).expect("failed to build search client");
    let chat = build_chat_model(&config).expect("failed to build chat client");

    let state = AppState {
        search: Arc::new(search),
        pairing: Arc::new(PairingEngine::new(chat)),
        sessions: Arc::new(InMemorySessionRepository::new()),
        questions: Arc::new(questions),
        survey: config.survey.clone(),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
