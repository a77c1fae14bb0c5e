pub mod admin;
pub mod channels;
pub mod health;

use axum::Router;

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(channels::router(state.clone()))
        .merge(admin::router(state))
}

pub fn health_router() -> Router {
    health::router()
}
