//! Request-id middleware.
//!
//! Requests without `x-request-id` get a generated UUID, and the final id is
//! echoed on the response. Assignment must wrap propagation so the echoed
//! header sees the generated value.

use tower::layer::util::Stack;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assign-then-echo request-id stack.
pub type RequestIdLayer = Stack<PropagateRequestIdLayer, SetRequestIdLayer<MakeRequestUuid>>;

/// Build the request-id stack. Apply it outside tracing so spans can read the id.
#[must_use]
pub fn request_id_layer() -> RequestIdLayer {
    Stack::new(
        PropagateRequestIdLayer::x_request_id(),
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
    )
}
