use common::catalog::FormCatalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminPortalProps {
    pub catalog: FormCatalog,
    pub on_create: Callback<()>,
    pub on_edit: Callback<String>,
    /// Receives the id to delete. The parent asks for confirmation.
    pub on_delete: Callback<String>,
}

#[function_component(AdminPortal)]
pub fn admin_portal(props: &AdminPortalProps) -> Html {
    let on_create = props.on_create.reform(|_: MouseEvent| ());

    let rows = if props.catalog.is_empty() {
        html! {
            <li class="empty-state">
                <h3>{"아직 생성된 양식이 없습니다."}</h3>
            </li>
        }
    } else {
        props
            .catalog
            .forms()
            .iter()
            .map(|form| {
                let edit_id = form.id.clone();
                let delete_id = form.id.clone();
                let on_edit = props.on_edit.reform(move |_: MouseEvent| edit_id.clone());
                let on_delete = props.on_delete.reform(move |_: MouseEvent| delete_id.clone());
                html! {
                    <li key={form.id.clone()} class="admin-row">
                        <div class="admin-row-text">
                            <p class="admin-row-title">{ &form.name }</p>
                            <p class="muted">{ &form.description }</p>
                        </div>
                        <div class="admin-row-actions">
                            <button class="link-btn" onclick={on_edit}>{"수정"}</button>
                            <span class="divider">{"|"}</span>
                            <button class="danger-btn" title="삭제" onclick={on_delete}>{"🗑"}</button>
                        </div>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div>
            <div class="toolbar-right">
                <button class="btn btn-primary" aria-label="새 양식 만들기" onclick={on_create}>
                    {"+"}
                </button>
            </div>
            <div class="card">
                <ul class="admin-list">{ rows }</ul>
            </div>
        </div>
    }
}
