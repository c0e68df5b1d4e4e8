//! # Form Retrieval Service
//!
//! Backs `GET /api/forms/{form_id}`.

use crate::store::FormStore;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(store: web::Data<FormStore>, form_id: web::Path<String>) -> impl Responder {
    let form_id = form_id.into_inner();
    let lookup_id = form_id.clone();
    match store.run(move |s| s.get(&lookup_id)).await {
        Ok(Some(form)) => HttpResponse::Ok().json(form),
        Ok(None) => HttpResponse::NotFound().body(format!("Form {} not found", form_id)),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error retrieving form: {}", e)),
    }
}
