//! # Form Definition Service Module
//!
//! Routes everything under `/api/forms` to the handlers that read and write
//! the [`FormStore`](crate::store::FormStore).
//!
//! ## Sub-modules:
//! - `list`: Returns every stored definition.
//! - `get`: Returns a single definition by id.
//! - `save`: Validates and upserts a definition sent by the form builder.
//! - `delete`: Removes a definition by id.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all form-definition endpoints.
const API_PATH: &str = "/api/forms";

/// Configures and returns the Actix `Scope` for the form-definition routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, all definitions in insertion order.
/// *   **`POST /save`**: `save::process`, create or replace one definition.
/// *   **`GET /{form_id}`**: `get::process`, one definition or `404`.
/// *   **`DELETE /{form_id}`**: `delete::process`, idempotent removal.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{form_id}", get().to(get::process))
        .route("/{form_id}", delete().to(delete::process))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::store::FormStore;
    use common::model::field::FormField;
    use common::model::form::FormDefinition;
    use tempfile::TempDir;

    pub fn temp_store() -> (TempDir, FormStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FormStore::open(dir.path().join("portal.sqlite")).unwrap();
        (dir, store)
    }

    pub fn sample_form(id: &str, name: &str) -> FormDefinition {
        FormDefinition {
            name: name.into(),
            handler_ldap: "bella.arena".into(),
            ..FormDefinition::skeleton(id, vec![FormField::applicant()])
        }
    }
}
