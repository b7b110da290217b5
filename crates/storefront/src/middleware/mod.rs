//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. Request ID (reuse or generate `x-request-id`)
//! 3. `TraceLayer` (request span carrying the request ID)
//! 4. Session layer (tower-sessions, in-memory store; holds the cart slot)

pub mod request_id;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, RequestId, make_request_span, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
