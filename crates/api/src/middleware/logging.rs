use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::info;

use crate::state::RequestId;

pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let resp = next.run(req).await;
    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        %request_id,
        "request"
    );
    resp
}
