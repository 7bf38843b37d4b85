//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every inbound request
//! - Stamp the ID as early as possible so traces can correlate
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - IDs supplied by the caller are kept; only missing ones are generated
//! - The header name is fixed to `x-request-id`

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 for requests arriving without an ID.
#[derive(Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer that stamps `x-request-id` onto incoming requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<RequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), RequestUuid)
}

/// Layer that copies `x-request-id` onto outgoing responses.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}
