//! # Submission Relay Service Module
//!
//! Routes `/api/submissions` to the relay that forwards validated request
//! values to the chat and spreadsheet webhooks.

mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/submissions";

/// # Registered Routes:
///
/// *   **`POST /{form_id}`**: `submit::process`, relays one submission for the
///     stored form `form_id`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{form_id}", post().to(submit::process))
}
