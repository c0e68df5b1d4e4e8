//! View for the form builder: the form's own attributes on top, then one row
//! per field, then the save bar.
//!
//! Fixed fields render with every control disabled and without a delete
//! button. The placeholder input only appears for free-text types, and the
//! options textarea only for dropdowns.

use common::builder::FieldChange;
use common::model::field::{parse_options, FieldType, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FormBuilderComponent;

pub fn view(component: &FormBuilderComponent, ctx: &Context<FormBuilderComponent>) -> Html {
    let link = ctx.link();
    let on_back = ctx.props().on_back.reform(|_: MouseEvent| ());

    html! {
        <div>
            <button class="back-btn" onclick={on_back}>{"← 관리자 패널로 돌아가기"}</button>
            <div class="card">
                { build_form_attributes(component, link) }
                { build_field_list(component, link) }
                <div class="save-bar">
                    if component.is_dirty() {
                        <span class="dirty-dot" title="저장하지 않은 변경 사항" />
                    }
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Save)}>
                        {"양식 저장"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_form_attributes(
    component: &FormBuilderComponent,
    link: &Scope<FormBuilderComponent>,
) -> Html {
    let form = component.builder.form();

    html! {
        <div class="card-body stack">
            <div>
                <label for="name">{"양식 이름"}</label>
                <input type="text" id="name" class="input" placeholder="예: 방문자 등록"
                    value={form.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })} />
            </div>
            <div>
                <label for="description">{"설명"}</label>
                <textarea id="description" class="input" rows="3"
                    placeholder="이 양식의 용도에 대한 간략한 설명입니다."
                    value={form.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })} />
            </div>
            <div>
                <label for="handlerLdap">{"담당자 LDAP (쉼표로 구분)"}</label>
                <input type="text" id="handlerLdap" class="input" placeholder="bella.arena,jaye.sung"
                    value={form.handler_ldap.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetHandlers(e.target_unchecked_into::<HtmlInputElement>().value())
                    })} />
                <p class="hint">
                    {"요청이 생성될 담당자들의 LDAP 계정을 쉼표(,)로 구분하여 입력하세요."}
                </p>
            </div>
        </div>
    }
}

fn build_field_list(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <div class="card-body">
            <h2>{"양식 필드"}</h2>
            <div class="stack">
                { for component.builder.form().fields.iter().map(|field| build_field_row(field, link)) }
            </div>
            <button class="link-btn" onclick={link.callback(|_| Msg::AddField)}>{"+ 필드 추가"}</button>
        </div>
    }
}

fn build_field_row(field: &FormField, link: &Scope<FormBuilderComponent>) -> Html {
    let fixed = field.is_fixed;

    let id = field.id.clone();
    let on_type = link.batch_callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        FieldType::parse(&value).map(|field_type| Msg::UpdateField {
            field_id: id.clone(),
            change: FieldChange::field_type(field_type),
        })
    });
    let id = field.id.clone();
    let on_label = link.callback(move |e: InputEvent| Msg::UpdateField {
        field_id: id.clone(),
        change: FieldChange::label(e.target_unchecked_into::<HtmlInputElement>().value()),
    });
    let id = field.id.clone();
    let on_placeholder = link.callback(move |e: InputEvent| Msg::UpdateField {
        field_id: id.clone(),
        change: FieldChange::placeholder(e.target_unchecked_into::<HtmlInputElement>().value()),
    });
    let id = field.id.clone();
    let on_options = link.callback(move |e: InputEvent| Msg::UpdateField {
        field_id: id.clone(),
        change: FieldChange::options(parse_options(
            &e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        )),
    });
    let id = field.id.clone();
    let on_remove = link.callback(move |_: MouseEvent| Msg::RemoveField(id.clone()));

    html! {
        <div key={field.id.clone()} class="field-row">
            <div class="field-row-grid">
                <select class="input select" id={format!("type-{}", field.id)} disabled={fixed}
                    onchange={on_type}>
                    { for FieldType::ALL.iter().map(|t| html! {
                        <option value={t.as_str()} selected={*t == field.field_type}>
                            { t.display_name() }
                        </option>
                    }) }
                </select>
                <input type="text" class="input" id={format!("label-{}", field.id)} placeholder="제목"
                    disabled={fixed} value={field.label.clone()} oninput={on_label} />
                if field.field_type.accepts_placeholder() {
                    <input type="text" class="input" id={format!("placeholder-{}", field.id)}
                        placeholder="예시를 입력해주세요" disabled={fixed}
                        value={field.placeholder.clone().unwrap_or_default()}
                        oninput={on_placeholder} />
                } else {
                    <span />
                }
                if !fixed {
                    <button class="danger-btn" title="필드 삭제" onclick={on_remove}>{"🗑"}</button>
                }
            </div>
            if field.field_type == FieldType::Dropdown {
                <div class="field-options">
                    <label for={format!("options-{}", field.id)}>{"드롭다운 옵션 (한 줄에 하나씩)"}</label>
                    <textarea class="input" rows="3" id={format!("options-{}", field.id)}
                        placeholder={"Option 1\nOption 2\nOption 3"}
                        value={field.options_text()}
                        oninput={on_options} />
                </div>
            }
        </div>
    }
}
