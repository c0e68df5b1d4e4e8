//! Input widgets for request form fields.
//!
//! Every field type maps to exactly one widget here. Adding a variant to
//! `FieldType` fails to compile until it gets a widget.

use common::model::field::{FieldType, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Shown as the disabled first option of a dropdown without its own placeholder.
pub const DROPDOWN_PROMPT: &str = "옵션을 선택하세요";

pub fn field_input(field: &FormField, value: &str, on_change: Callback<String>) -> Html {
    let id = field.id.clone();
    let placeholder = field.placeholder.clone().unwrap_or_default();

    match field.field_type {
        FieldType::Text => html! {
            <input type="text" class="input" {id} {placeholder}
                value={value.to_string()}
                oninput={input_callback(on_change)} />
        },
        FieldType::Textarea => html! {
            <textarea class="input" rows="4" {id} {placeholder}
                value={value.to_string()}
                oninput={on_change.reform(|e: InputEvent| {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                })} />
        },
        FieldType::Date => html! {
            <input type="date" class="input" {id}
                value={value.to_string()}
                oninput={input_callback(on_change)} />
        },
        FieldType::Datetime => html! {
            <input type="datetime-local" class="input" {id}
                value={value.to_string()}
                oninput={input_callback(on_change)} />
        },
        FieldType::Dropdown => {
            let prompt = if placeholder.is_empty() {
                DROPDOWN_PROMPT.to_string()
            } else {
                placeholder
            };
            let options = field.options.clone().unwrap_or_default();
            html! {
                <select class="input select" {id}
                    onchange={on_change.reform(|e: Event| {
                        e.target_unchecked_into::<HtmlSelectElement>().value()
                    })}>
                    <option value="" disabled=true selected={value.is_empty()}>{ prompt }</option>
                    { for options.into_iter().map(|opt| html! {
                        <option value={opt.clone()} selected={opt == value}>{ opt }</option>
                    }) }
                </select>
            }
        }
    }
}

fn input_callback(on_change: Callback<String>) -> Callback<InputEvent> {
    on_change.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())
}
