//! # Submission Dispatch
//!
//! Delivers an accepted submission to its two destinations at the same time:
//!
//! - the **primary** team-chat webhook, which receives a JSON
//!   [`PrimaryPayload`](common::submission::PrimaryPayload) and decides the
//!   outcome of the whole submission;
//! - the **secondary** spreadsheet web app, which receives a url-encoded form
//!   whose `payload` field holds the JSON row. It is only called for forms with
//!   a sheet layout, and its failure is logged and reported but never fails the
//!   submission.
//!
//! Both requests are started before either is awaited, so a slow spreadsheet
//! never delays the primary result beyond its own round trip.

use common::model::form::FormDefinition;
use common::requests::{DispatchReport, SheetDelivery};
use common::submission::{build_primary_payload, build_sheet_payload, SheetPayload, SubmissionValues};
use futures_util::future::join;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    primary_url: String,
    sheets_url: String,
}

impl Dispatcher {
    /// Neither request carries a timeout of its own; a hung webhook holds the
    /// submission open until the connection drops.
    pub fn new(primary_url: impl Into<String>, sheets_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            primary_url: primary_url.into(),
            sheets_url: sheets_url.into(),
        }
    }

    /// Sends `values` for `form` to both destinations.
    ///
    /// Returns `Err` only when the primary webhook fails. The spreadsheet
    /// outcome travels in the returned [`DispatchReport`].
    pub async fn dispatch(
        &self,
        form: &FormDefinition,
        values: &SubmissionValues,
    ) -> Result<DispatchReport, DispatchError> {
        let primary = build_primary_payload(form, values);
        let sheet = build_sheet_payload(form, values);

        let send_primary = async {
            let response = self.client.post(&self.primary_url).json(&primary).send().await?;
            ensure_success(response).await
        };
        let send_sheet = async {
            match sheet {
                Some(row) => match self.send_sheet_row(&row).await {
                    Ok(()) => SheetDelivery::Delivered,
                    Err(e) => {
                        warn!("Spreadsheet row for form {} was not stored: {}", form.id, e);
                        SheetDelivery::Failed(e.to_string())
                    }
                },
                None => SheetDelivery::Skipped,
            }
        };

        let (primary_result, sheet) = join(send_primary, send_sheet).await;
        primary_result?;

        info!("Submission for form {} delivered (sheet: {:?})", form.id, sheet);
        Ok(DispatchReport { sheet })
    }

    async fn send_sheet_row(&self, row: &SheetPayload) -> Result<(), DispatchError> {
        let payload = serde_json::to_string(row)?;
        let response = self
            .client
            .post(&self.sheets_url)
            .form(&[("payload", payload)])
            .send()
            .await?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<(), DispatchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(DispatchError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::field::{FieldType, FormField};
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn field(id: &str, label: &str) -> FormField {
        FormField {
            id: id.into(),
            label: label.into(),
            field_type: FieldType::Text,
            options: None,
            placeholder: None,
            is_fixed: false,
        }
    }

    fn form_named(name: &str) -> FormDefinition {
        FormDefinition {
            name: name.into(),
            handler_ldap: "bella.arena".into(),
            ..FormDefinition::skeleton(
                "form_visit",
                vec![field("who", "신청자 이름"), field("guest", "방문자 이름")],
            )
        }
    }

    fn values() -> SubmissionValues {
        [("who", "정하늘"), ("guest", "김민수")].into_iter().collect()
    }

    fn dispatcher_for(server: &MockServer) -> Dispatcher {
        Dispatcher::new(
            format!("{}/primary", server.uri()),
            format!("{}/sheets", server.uri()),
        )
    }

    async fn mount(server: &MockServer, route: &str, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn form_without_layout_skips_sheet() {
        let server = MockServer::start().await;
        mount(&server, "/primary", 200, 1).await;
        mount(&server, "/sheets", 200, 0).await;

        let report = dispatcher_for(&server)
            .dispatch(&form_named("시설 수리 요청"), &values())
            .await
            .unwrap();
        assert_eq!(report.sheet, SheetDelivery::Skipped);
    }

    #[tokio::test]
    async fn primary_receives_chat_payload_as_json() {
        let server = MockServer::start().await;
        let form = form_named("시설 수리 요청");
        let expected = serde_json::to_value(build_primary_payload(&form, &values())).unwrap();
        Mock::given(method("POST"))
            .and(path("/primary"))
            .and(body_json(expected))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        dispatcher_for(&server).dispatch(&form, &values()).await.unwrap();
    }

    #[tokio::test]
    async fn sheet_row_is_sent_as_urlencoded_payload_field() {
        let server = MockServer::start().await;
        mount(&server, "/primary", 200, 1).await;
        Mock::given(method("POST"))
            .and(path("/sheets"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("payload="))
            .and(body_string_contains("%22sheet%22%3A%22visitors%22"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let report = dispatcher_for(&server)
            .dispatch(&form_named("방문자 등록"), &values())
            .await
            .unwrap();
        assert_eq!(report.sheet, SheetDelivery::Delivered);
    }

    #[tokio::test]
    async fn primary_failure_fails_dispatch_even_if_sheet_succeeds() {
        let server = MockServer::start().await;
        mount(&server, "/primary", 500, 1).await;
        mount(&server, "/sheets", 200, 1).await;

        let err = dispatcher_for(&server)
            .dispatch(&form_named("방문자 등록"), &values())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn sheet_failure_is_reported_not_raised() {
        let server = MockServer::start().await;
        mount(&server, "/primary", 200, 1).await;
        mount(&server, "/sheets", 500, 1).await;

        let report = dispatcher_for(&server)
            .dispatch(&form_named("방문자 등록"), &values())
            .await
            .unwrap();
        assert!(matches!(report.sheet, SheetDelivery::Failed(_)));
    }

    #[tokio::test]
    async fn unreachable_sheet_endpoint_is_reported_not_raised() {
        let server = MockServer::start().await;
        mount(&server, "/primary", 200, 1).await;
        let dispatcher =
            Dispatcher::new(format!("{}/primary", server.uri()), "http://127.0.0.1:9/sheets");

        let report = dispatcher
            .dispatch(&form_named("방문자 등록"), &values())
            .await
            .unwrap();
        assert!(matches!(report.sheet, SheetDelivery::Failed(_)));
    }
}
