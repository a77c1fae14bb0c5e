use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{ApiResult, AppError},
    state::AppState,
};
use directory_core::{types::Channel, verify::code_matches};
use directory_store::NewChannel;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/channels", get(list_channels).post(create_channel))
        .route("/api/check/{username}", get(check_channel))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateChannelRequest {
    name: Option<String>,
    url: Option<String>,
    category: Option<String>,
    // Accepted for compatibility with older clients, never trusted; the
    // verification code alone decides the flag.
    official: Option<bool>,
    verification_code: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    id: i64,
    name: String,
    url: String,
    official: bool,
    category: String,
}

async fn list_channels(State(state): State<AppState>) -> Json<Vec<Channel>> {
    Json(state.store.list().await)
}

async fn create_channel(
    State(state): State<AppState>,
    Json(payload): Json<CreateChannelRequest>,
) -> ApiResult<(StatusCode, Json<Channel>)> {
    let name = payload.name.unwrap_or_default();
    let url = payload.url.unwrap_or_default();
    if name.trim().is_empty() || url.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Channel name and URL are required".to_string(),
        ));
    }

    let official = payload
        .verification_code
        .as_deref()
        .map(|code| code_matches(code, &state.settings.verification_code))
        .unwrap_or(false);
    if payload.official == Some(true) && !official {
        debug!(%url, "ignoring client-supplied official flag");
    }

    let channel = state
        .store
        .create(NewChannel {
            name,
            url,
            category: payload.category,
            official,
        })
        .await?;

    info!(
        id = channel.id,
        url = %channel.url,
        official = channel.official,
        "channel registered"
    );

    Ok((StatusCode::CREATED, Json(channel)))
}

async fn check_channel(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<CheckResponse>> {
    let channel = state
        .store
        .find_by_handle(&username)
        .await
        .ok_or_else(|| AppError::NotFound("Channel not found in the directory".to_string()))?;

    Ok(Json(CheckResponse {
        id: channel.id,
        name: channel.name,
        url: channel.url,
        official: channel.official,
        category: channel.category,
    }))
}
