use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const VERIFICATION_INSTRUCTIONS: &str =
    "To have a channel marked official, submit it with the verification code \
     issued by the directory operators.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/info", get(admin_info))
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminInfoResponse {
    total_channels: usize,
    official_channels: usize,
    verification_instructions: &'static str,
}

// Read-only summary. Carries no auth check, matching the surface it fronts.
async fn admin_info(State(state): State<AppState>) -> Json<AdminInfoResponse> {
    let channels = state.store.list().await;
    let official_channels = channels.iter().filter(|channel| channel.official).count();

    Json(AdminInfoResponse {
        total_channels: channels.len(),
        official_channels,
        verification_instructions: VERIFICATION_INSTRUCTIONS,
    })
}
