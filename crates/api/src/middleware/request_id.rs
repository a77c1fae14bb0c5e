use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;

use crate::state::RequestId;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Tags every request with a fresh id, exposed to handlers as a
/// [`RequestId`] extension and echoed back on the response header so a
/// client report can be matched against the logs.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = new_request_id();
    req.extensions_mut().insert(RequestId(id.clone()));
    let mut resp = next.run(req).await;
    if let Ok(value) = id.parse() {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    resp
}

fn new_request_id() -> String {
    format!("req_{}", nanoid!(16))
}
