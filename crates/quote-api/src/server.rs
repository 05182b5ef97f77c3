//! Axum server and routes.

use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use quote_types::{
    GenerateQuotesResponse, QuoteGenerator, QuoteRequest, QuoteStore, RequestLimits,
    StoredQuotesResponse,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub generator: Arc<dyn QuoteGenerator + Send + Sync>,
    pub store: Arc<dyn QuoteStore + Send + Sync>,
    pub limits: RequestLimits,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-quote", post(handle_generate_quote))
        .route("/get-quotes", get(handle_get_quotes))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_generate_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<GenerateQuotesResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let job = req.validate(&state.limits).map_err(|e| {
        tracing::debug!(error = %e, "rejected generate-quote request");
        e
    })?;

    let quotes = state.generator.generate_batch(&job.event, job.number).await;
    state.store.append(&quotes).await?;
    let stored = state.store.len().await?;
    tracing::debug!(batch = quotes.len(), stored, "batch appended to store");

    Ok(Json(GenerateQuotesResponse { quotes }))
}

async fn handle_get_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoredQuotesResponse>, ApiError> {
    let quotes = state.store.read_all().await?;
    Ok(Json(StoredQuotesResponse::from_results(quotes)))
}

async fn handle_health() -> &'static str {
    "ok"
}
