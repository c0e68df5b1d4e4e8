//! Root component: owns the form catalog and the navigation state, and is the
//! only place that talks to `/api/forms`.
//!
//! Responsibilities
//! - Load every definition once after the first render and show a loading
//!   message until it arrives.
//! - Route between the four views and the admin password prompt.
//! - Persist builder saves and admin deletes, updating the catalog only after
//!   the server confirmed the write.

use common::catalog::FormCatalog;
use common::gate::{Navigation, View, DEFAULT_ADMIN_PASSWORD};
use common::model::form::FormDefinition;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::admin::form_builder::FormBuilderComponent;
use crate::components::admin::portal::AdminPortal;
use crate::components::header::Header;
use crate::components::password_modal::PasswordModal;
use crate::components::user::portal::UserPortal;
use crate::components::user::request_form::RequestFormComponent;
use crate::helpers::{confirm, set_window_dirty_flag, show_toast};

const DELETE_CONFIRMATION: &str = "정말로 이 양식을 삭제하시겠습니까? 이 작업은 되돌릴 수 없습니다.";

pub enum Msg {
    FormsLoaded(Vec<FormDefinition>),
    LoadFailed(String),
    ShowUserPortal,
    OpenRequestForm(String),
    OpenPrompt,
    ClosePrompt,
    SubmitPassword(String),
    ShowAdminPortal,
    CreateForm,
    EditForm(String),
    SaveForm(FormDefinition),
    FormSaved(FormDefinition),
    DeleteForm(String),
    FormDeleted(String),
}

pub struct App {
    catalog: FormCatalog,
    navigation: Navigation,
    loading: bool,
}

/// Build-time override of the admin password, falling back to the shared default.
fn admin_secret() -> &'static str {
    option_env!("PORTAL_ADMIN_PASSWORD").unwrap_or(DEFAULT_ADMIN_PASSWORD)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            catalog: FormCatalog::default(),
            navigation: Navigation::new(admin_secret()),
            loading: true,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            match Request::get("/api/forms").send().await {
                Ok(resp) if resp.ok() => match resp.json::<Vec<FormDefinition>>().await {
                    Ok(forms) => link.send_message(Msg::FormsLoaded(forms)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                },
                Ok(resp) => {
                    let body = resp.text().await.unwrap_or_default();
                    link.send_message(Msg::LoadFailed(body));
                }
                Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
            }
        });
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FormsLoaded(forms) => {
                self.catalog = FormCatalog::new(forms);
                self.loading = false;
            }
            Msg::LoadFailed(reason) => {
                gloo_console::error!("Error fetching forms:", reason.clone());
                show_toast(&format!("양식을 불러오지 못했습니다: {}", reason));
                self.loading = false;
            }
            Msg::ShowUserPortal => {
                set_window_dirty_flag(false);
                self.navigation.show_user_portal();
            }
            Msg::OpenRequestForm(form_id) => self.navigation.open_request_form(form_id),
            Msg::OpenPrompt => self.navigation.open_prompt(),
            Msg::ClosePrompt => self.navigation.close_prompt(),
            Msg::SubmitPassword(password) => {
                if self.navigation.submit_password(&password).is_ok() {
                    set_window_dirty_flag(false);
                }
            }
            Msg::ShowAdminPortal => {
                set_window_dirty_flag(false);
                self.navigation.show_admin_portal();
            }
            Msg::CreateForm => self.navigation.open_builder(FormDefinition::new_id()),
            Msg::EditForm(form_id) => self.navigation.open_builder(form_id),
            Msg::SaveForm(form) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = match Request::post("/api/forms/save").json(&form) {
                        Ok(request) => request,
                        Err(err) => {
                            show_toast(&format!("양식 저장 중 오류가 발생했습니다: {}", err));
                            return;
                        }
                    };
                    match request.send().await {
                        Ok(resp) if resp.ok() => {
                            link.send_message(Msg::FormSaved(form));
                            show_toast("양식이 저장되었습니다.");
                        }
                        Ok(resp) => {
                            let body = resp.text().await.unwrap_or_default();
                            gloo_console::error!("Error saving form:", body.clone());
                            show_toast(&format!("양식 저장 중 오류가 발생했습니다: {}", body));
                        }
                        Err(err) => {
                            gloo_console::error!("Error saving form:", err.to_string());
                            show_toast(&format!("양식 저장 중 오류가 발생했습니다: {}", err));
                        }
                    }
                });
                return false;
            }
            Msg::FormSaved(form) => {
                self.catalog.upsert(form);
                set_window_dirty_flag(false);
                self.navigation.show_admin_portal();
            }
            Msg::DeleteForm(form_id) => {
                if !confirm(DELETE_CONFIRMATION) {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match Request::delete(&format!("/api/forms/{}", form_id)).send().await {
                        Ok(resp) if resp.ok() => link.send_message(Msg::FormDeleted(form_id)),
                        Ok(resp) => {
                            let body = resp.text().await.unwrap_or_default();
                            gloo_console::error!("Error deleting form:", body.clone());
                            show_toast(&format!("양식 삭제 중 오류가 발생했습니다: {}", body));
                        }
                        Err(err) => {
                            gloo_console::error!("Error deleting form:", err.to_string());
                            show_toast(&format!("양식 삭제 중 오류가 발생했습니다: {}", err));
                        }
                    }
                });
                return false;
            }
            Msg::FormDeleted(form_id) => {
                self.catalog.remove(&form_id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let prompt = self.navigation.prompt().map(|prompt| {
            html! {
                <PasswordModal
                    error={prompt.error.clone()}
                    on_close={link.callback(|_| Msg::ClosePrompt)}
                    on_submit={link.callback(Msg::SubmitPassword)}
                />
            }
        });

        html! {
            <div class="app-root">
                <Header
                    admin_active={self.navigation.view().is_admin()}
                    on_user_portal={link.callback(|_| Msg::ShowUserPortal)}
                    on_admin={link.callback(|_| Msg::OpenPrompt)}
                />
                { for prompt }
                <main class="app-main">
                    { self.view_content(ctx) }
                </main>
            </div>
        }
    }
}

impl App {
    fn view_content(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="loading">{"데이터를 불러오는 중..."}</div> };
        }
        let link = ctx.link();

        match self.navigation.view() {
            View::UserPortal => html! {
                <UserPortal
                    catalog={self.catalog.clone()}
                    on_select={link.callback(Msg::OpenRequestForm)}
                />
            },
            View::RequestForm(form_id) => html! {
                <RequestFormComponent
                    key={form_id.clone()}
                    form={self.catalog.get(form_id).cloned()}
                    on_back={link.callback(|_| Msg::ShowUserPortal)}
                />
            },
            View::AdminPortal => html! {
                <AdminPortal
                    catalog={self.catalog.clone()}
                    on_create={link.callback(|_| Msg::CreateForm)}
                    on_edit={link.callback(Msg::EditForm)}
                    on_delete={link.callback(Msg::DeleteForm)}
                />
            },
            View::FormBuilder(form_id) => html! {
                <FormBuilderComponent
                    key={form_id.clone()}
                    form_id={form_id.clone()}
                    catalog={self.catalog.clone()}
                    on_save={link.callback(Msg::SaveForm)}
                    on_back={link.callback(|_| Msg::ShowAdminPortal)}
                />
            },
        }
    }
}
