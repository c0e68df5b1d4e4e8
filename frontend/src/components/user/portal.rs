use common::catalog::FormCatalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserPortalProps {
    pub catalog: FormCatalog,
    pub on_select: Callback<String>,
}

/// Card list of every available form. Picking a card opens its request view.
#[function_component(UserPortal)]
pub fn user_portal(props: &UserPortalProps) -> Html {
    if props.catalog.is_empty() {
        return html! {
            <div class="card empty-state">
                <h3>{"사용 가능한 양식이 없습니다"}</h3>
            </div>
        };
    }

    html! {
        <div class="form-grid">
            { for props.catalog.forms().iter().map(|form| {
                let form_id = form.id.clone();
                let onclick = props.on_select.reform(move |_: MouseEvent| form_id.clone());
                html! {
                    <div key={form.id.clone()} class="card form-card" {onclick}>
                        <h2>{ &form.name }</h2>
                        <p class="muted clamp-2">{ &form.description }</p>
                        <span class="card-cta">{"요청 시작 →"}</span>
                    </div>
                }
            }) }
        </div>
    }
}
