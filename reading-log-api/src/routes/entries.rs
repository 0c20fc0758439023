use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{
        AutocompleteResponse, EntryPayload, EntryResponse, MutationResponse,
    },
    app_state::AppState,
    domain::models::EntryId,
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/save", post(save_entry))
        .route("/update/:entry_id", put(update_entry))
        .route("/delete/:entry_id", delete(delete_entry))
        .route("/autocomplete", get(autocomplete))
}

type MutationResult = Result<Json<MutationResponse>, ApiError>;

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[instrument(name = "GET /api/entries", skip(app_state))]
async fn list_entries(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = app_state.entry_service.search(&query.q).await?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

#[instrument(name = "POST /api/save", skip(app_state, payload))]
async fn save_entry(
    State(app_state): State<AppState>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> MutationResult {
    let Json(payload) = payload?;

    let entry = app_state.entry_service.create(payload.into()).await?;
    tracing::info!(entry_id = %entry.id, "entry created");

    Ok(Json(MutationResponse::success("Saved!")))
}

#[instrument(name = "PUT /api/update", skip(app_state, payload))]
async fn update_entry(
    State(app_state): State<AppState>,
    Path(entry_id): Path<String>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> MutationResult {
    let Json(payload) = payload?;
    let entry_id = EntryId::from(entry_id);

    app_state
        .entry_service
        .update(&entry_id, payload.into())
        .await?;
    tracing::info!(%entry_id, "entry updated");

    Ok(Json(MutationResponse::success("Updated!")))
}

#[instrument(name = "DELETE /api/delete", skip(app_state))]
async fn delete_entry(
    State(app_state): State<AppState>,
    Path(entry_id): Path<String>,
) -> MutationResult {
    let entry_id = EntryId::from(entry_id);

    app_state.entry_service.delete(&entry_id).await?;
    tracing::info!(%entry_id, "entry deleted");

    Ok(Json(MutationResponse::success("Deleted!")))
}

#[instrument(name = "GET /api/autocomplete", skip(app_state))]
async fn autocomplete(
    State(app_state): State<AppState>,
) -> Result<Json<AutocompleteResponse>, ApiError> {
    let suggestions = app_state.entry_service.suggestions().await?;

    Ok(Json(suggestions.into()))
}
