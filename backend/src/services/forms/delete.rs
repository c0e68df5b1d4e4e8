//! # Form Delete Service
//!
//! Backs `DELETE /api/forms/{form_id}`. Deleting an id that is not stored
//! succeeds as well, so a retried delete never surfaces an error.

use crate::store::FormStore;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

pub async fn process(store: web::Data<FormStore>, form_id: web::Path<String>) -> impl Responder {
    let form_id = form_id.into_inner();
    let target = form_id.clone();
    match store.run(move |s| s.delete(&target)).await {
        Ok(existed) => {
            info!("Deleted form {} (existed: {})", form_id, existed);
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            error!("Failed to delete form {}: {}", form_id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error deleting form: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::forms::test_support::{sample_form, temp_store};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let (_dir, store) = temp_store();
        store.upsert(&sample_form("form_1", "방문자 등록")).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(crate::services::forms::configure_routes()),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri("/api/forms/form_1").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        }
        assert_eq!(store.get("form_1").unwrap(), None);
    }
}
