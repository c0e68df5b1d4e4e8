//! # Submission Relay
//!
//! Backs `POST /api/submissions/{form_id}`.
//!
//! ## Workflow
//!
//! 1.  **Form lookup**: The definition is read from the store so the payloads
//!     are built from the saved labels, not from whatever the client holds.
//!     An unknown id is answered with `404 Not Found`.
//! 2.  **Dispatch**: [`Dispatcher::dispatch`] sends the chat payload and, for
//!     forms with a sheet layout, the spreadsheet row concurrently.
//! 3.  **Response**: `200 OK` with a [`DispatchReport`](common::requests::DispatchReport)
//!     when the chat webhook accepted the request, whatever happened to the
//!     spreadsheet row. `502 Bad Gateway` with the failure text when the chat
//!     webhook failed.
//!
//! Values are not validated here. The client validates before posting, and a
//! request that slips through is still delivered with blanks shown as
//! `정보 없음`.

use crate::dispatch::{DispatchError, Dispatcher};
use crate::store::{FormStore, StoreError};
use actix_web::{web, HttpResponse, Responder};
use common::requests::{DispatchReport, SubmitRequest};
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
enum RelayError {
    #[error("form {0} not found")]
    UnknownForm(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub async fn process(
    store: web::Data<FormStore>,
    dispatcher: web::Data<Dispatcher>,
    form_id: web::Path<String>,
    request: web::Json<SubmitRequest>,
) -> impl Responder {
    match relay(&store, &dispatcher, form_id.into_inner(), request.into_inner()).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e @ RelayError::UnknownForm(_)) => {
            warn!("{}", e);
            HttpResponse::NotFound().body(e.to_string())
        }
        Err(RelayError::Store(e)) => {
            error!("Failed to load form for submission: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error loading form: {}", e))
        }
        Err(RelayError::Dispatch(e)) => {
            error!("Primary webhook rejected submission: {}", e);
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}

async fn relay(
    store: &FormStore,
    dispatcher: &Dispatcher,
    form_id: String,
    request: SubmitRequest,
) -> Result<DispatchReport, RelayError> {
    let lookup_id = form_id.clone();
    let form = store
        .run(move |s| s.get(&lookup_id))
        .await?
        .ok_or(RelayError::UnknownForm(form_id))?;

    Ok(dispatcher.dispatch(&form, &request.values).await?)
}
