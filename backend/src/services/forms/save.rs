//! # Form Save Service
//!
//! Backs `POST /api/forms/save`, the only write path for definitions.
//!
//! ## Workflow
//!
//! 1.  **Validation**: The posted [`FormDefinition`] is checked with
//!     [`FormDefinition::validate`]. A blank name or a duplicate field id is
//!     answered with `400 Bad Request` and the validation message.
//! 2.  **Upsert**: The definition replaces any stored one with the same id.
//!     Concurrent saves of the same id are not reconciled; the later write wins.
//! 3.  **Response**: The stored definition is echoed back as JSON. A store
//!     failure is answered with `503 Service Unavailable`.

use crate::store::{FormStore, StoreError};
use actix_web::{web, HttpResponse, Responder};
use common::model::form::{FormDefinition, FormError};
use log::{error, info};
use thiserror::Error;

#[derive(Debug, Error)]
enum SaveError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub async fn process(
    store: web::Data<FormStore>,
    form: web::Json<FormDefinition>,
) -> impl Responder {
    match save_form(&store, form.into_inner()).await {
        Ok(saved) => {
            info!("Saved form {} ({})", saved.id, saved.name);
            HttpResponse::Ok().json(saved)
        }
        Err(SaveError::Invalid(e)) => HttpResponse::BadRequest().body(e.to_string()),
        Err(SaveError::Store(e)) => {
            error!("Failed to save form: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving form: {}", e))
        }
    }
}

async fn save_form(store: &FormStore, form: FormDefinition) -> Result<FormDefinition, SaveError> {
    form.validate()?;
    let saved = form.clone();
    store.run(move |s| s.upsert(&form)).await?;
    Ok(saved)
}
