use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::dto::{
    EconResponse, NewsResponse, QuoteResponse, SentimentRequest, SettingsFailure,
    SettingsResponse, SymbolQuery,
};
use super::error::ApiError;
use crate::domain::entities::settings::Settings;
use crate::domain::values::sentiment::SentimentReport;
use crate::MarketDesk;

fn require_symbol(query: SymbolQuery) -> Result<String, ApiError> {
    query
        .symbol
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("symbol query param required".to_string()))
}

/// GET /api/quote?symbol=S
pub async fn quote(
    State(desk): State<Arc<MarketDesk>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let symbol = require_symbol(query)?;
    Ok(Json(desk.quote(&symbol).await.into()))
}

/// GET /api/news?symbol=S
pub async fn news(
    State(desk): State<Arc<MarketDesk>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    let symbol = require_symbol(query)?;
    Ok(Json(desk.news(&symbol).await.into()))
}

/// GET /api/econ
pub async fn econ(State(desk): State<Arc<MarketDesk>>) -> Json<EconResponse> {
    Json(desk.econ().await.into())
}

/// GET /api/settings
pub async fn settings_get(State(desk): State<Arc<MarketDesk>>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        ok: true,
        data: desk.settings().await,
    })
}

/// POST /api/settings — body is a partial document; unknown fields are
/// dropped by deserialization before anything reaches the store.
pub async fn settings_update(
    State(desk): State<Arc<MarketDesk>>,
    Json(update): Json<Settings>,
) -> Response {
    match desk.update_settings(update).await {
        Ok(merged) => Json(SettingsResponse {
            ok: true,
            data: merged,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "settings update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SettingsFailure {
                    ok: false,
                    error: "failed to write settings".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/sentiment
pub async fn sentiment(
    State(desk): State<Arc<MarketDesk>>,
    Json(request): Json<SentimentRequest>,
) -> Json<SentimentReport> {
    Json(desk.sentiment(&request.text))
}
