//! HTTP API module for the attendance statistics engine.
//!
//! This module provides the administrative recalculation endpoint. Binding
//! the router to a socket and authenticating callers is left to the host.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RecalculateRequest;
pub use response::{ApiError, ApiErrorResponse, RecalculateResponse};
pub use state::AppState;
