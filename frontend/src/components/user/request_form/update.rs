//! Update function for the request view, Elm style: mutate the component for
//! `msg` and return whether to re-render.
//!
//! Submitting validates through the session first. Only a request that passed
//! validation is posted, and only the chat webhook's outcome decides success.
//! A failed spreadsheet append comes back inside the report and is written to
//! the console, never shown to the user.

use common::requests::{DispatchReport, SheetDelivery};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RequestFormComponent;

pub fn update(
    component: &mut RequestFormComponent,
    ctx: &Context<RequestFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetValue { field_id, value } => {
            component.session.set_value(&field_id, value);
            true
        }
        Msg::Submit => {
            let Some(form) = ctx.props().form.as_ref() else {
                return false;
            };
            // Blocked attempts leave the session's errors to render.
            let Ok(request) = component.session.begin_submit(form) else {
                return true;
            };

            let url = format!("/api/submissions/{}", form.id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let sent = match Request::post(&url).json(&request) {
                    Ok(req) => req.send().await,
                    Err(err) => {
                        link.send_message(Msg::Failed(err.to_string()));
                        return;
                    }
                };
                match sent {
                    Ok(resp) if resp.ok() => match resp.json::<DispatchReport>().await {
                        Ok(report) => link.send_message(Msg::Delivered(report)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    },
                    Ok(resp) => {
                        let status = resp.status();
                        let body = resp.text().await.unwrap_or_default();
                        link.send_message(Msg::Failed(format!("{}: {}", status, body)));
                    }
                    Err(err) => link.send_message(Msg::Failed(err.to_string())),
                }
            });
            true
        }
        Msg::Delivered(report) => {
            if let SheetDelivery::Failed(reason) = report.sheet {
                gloo_console::warn!("[Sheets Append Warning]", reason);
            }
            component.session.finish(true);
            true
        }
        Msg::Failed(reason) => {
            gloo_console::error!("Submission error:", reason);
            component.session.finish(false);
            true
        }
    }
}
