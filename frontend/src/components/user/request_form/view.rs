use common::model::form::FormDefinition;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{button_label, status_line};
use super::messages::Msg;
use super::state::RequestFormComponent;
use crate::components::fields::field_input;

pub fn view(component: &RequestFormComponent, ctx: &Context<RequestFormComponent>) -> Html {
    let on_back = ctx.props().on_back.reform(|_: MouseEvent| ());

    let Some(form) = ctx.props().form.as_ref() else {
        return html! {
            <div class="not-found">
                <h2>{"양식을 찾을 수 없습니다"}</h2>
                <button class="link-btn" onclick={on_back}>{"뒤로 가기"}</button>
            </div>
        };
    };

    html! {
        <div>
            <button class="back-btn" onclick={on_back}>{"← 모든 양식 보기"}</button>
            <div class="card">
                <div class="card-header">
                    <h1>{ &form.name }</h1>
                    <p class="muted">{ &form.description }</p>
                </div>
                { build_form(component, form, ctx.link()) }
            </div>
        </div>
    }
}

fn build_form(
    component: &RequestFormComponent,
    form: &FormDefinition,
    link: &Scope<RequestFormComponent>,
) -> Html {
    let session = &component.session;
    let status = session.status();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="card-body" {onsubmit}>
            <div class="field-list">
                { for form.fields.iter().map(|field| {
                    let field_id = field.id.clone();
                    let on_change = link.callback(move |value: String| Msg::SetValue {
                        field_id: field_id.clone(),
                        value,
                    });
                    html! {
                        <div key={field.id.clone()} class="field">
                            <label for={field.id.clone()}>{ &field.label }</label>
                            { field_input(field, session.values().value_or_empty(&field.id), on_change) }
                            if let Some(error) = session.errors().get(&field.id) {
                                <p class="field-error">{ error }</p>
                            }
                        </div>
                    }
                }) }
            </div>
            <div class="form-footer">
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled={!session.can_submit()}
                >
                    { button_label(status) }
                </button>
                if let Some((class, line)) = status_line(status) {
                    <p class={classes!("status-line", class)}>{ line }</p>
                }
            </div>
        </form>
    }
}
