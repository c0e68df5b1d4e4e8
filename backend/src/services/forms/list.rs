//! # Form Listing Service
//!
//! Backs `GET /api/forms`. The client calls it once at startup to fill its
//! catalog, so the response is the full set of definitions in the order they
//! were first stored.

use crate::store::FormStore;
use actix_web::{web, HttpResponse, Responder};
use log::error;

pub async fn process(store: web::Data<FormStore>) -> impl Responder {
    match store.run(|s| s.list_all()).await {
        Ok(forms) => HttpResponse::Ok().json(forms),
        Err(e) => {
            error!("Failed to list forms: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing forms: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::forms::test_support::{sample_form, temp_store};
    use actix_web::{test, App};
    use common::model::form::FormDefinition;

    #[actix_web::test]
    async fn lists_stored_forms_in_insertion_order() {
        let (_dir, store) = temp_store();
        store.upsert(&sample_form("b", "두번째")).unwrap();
        store.upsert(&sample_form("a", "첫번째")).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(crate::services::forms::configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/forms").to_request();
        let forms: Vec<FormDefinition> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<_> = forms.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
